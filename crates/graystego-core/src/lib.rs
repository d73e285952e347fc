//! # Graystego Core API
//!
//! Embeds a secret bit stream into a fixed 256x256 gray-scale cover matrix
//! by least-significant-bit substitution, optionally corrected by the
//! optimal pixel adjustment, and reports the embedding distortion as
//! (MSE, PSNR) pairs.
//!
//! The central pieces are
//! - [`Embedder`][emb] driving one run over the matrix
//! - [`CoverMatrix`] and [`SecretBits`] parsing the plaintext inputs
//! - [`commands::embed`] as the file-to-file entry point
//!
//! # Usage Example
//!
//! ```rust
//! use graystego_core::{CoverMatrix, EmbedWidth, Embedder, SecretBits, PIXEL_COUNT};
//!
//! let cover = CoverMatrix::from_reader("128 ".repeat(PIXEL_COUNT).as_bytes())
//!     .expect("Cover matrix is not readable");
//! let secret = SecretBits::from_reader("1 0 ".repeat(PIXEL_COUNT / 2).as_bytes())
//!     .expect("Secret bits are not readable");
//!
//! let mut stego = Vec::new();
//! let report = Embedder::new(EmbedWidth::OneBit)
//!     .run(&cover, &secret, &mut stego)
//!     .expect("Cannot embed the secret");
//!
//! assert_eq!(stego.len(), PIXEL_COUNT);
//! assert!((report.substitution.mse - 0.5).abs() < 1e-9);
//! ```
//!
//! [emb]: ./pipeline/struct.Embedder.html

pub mod bits;
pub mod commands;
pub mod distortion;
pub mod embedding;
pub mod error;
pub mod numeric;
pub mod pgm;
pub mod pipeline;
pub mod result;
pub mod sources;

pub use crate::distortion::Distortion;
pub use crate::error::{StegoError, StreamKind};
pub use crate::pipeline::{EmbedWidth, Embedder, EmbeddingReport, PixelSink};
pub use crate::result::Result;
pub use crate::sources::{CoverMatrix, SecretBits};

/// Width and height of the fixed cover matrix.
pub const MATRIX_DIM: usize = 256;

/// Pixels in one cover matrix.
pub const PIXEL_COUNT: usize = MATRIX_DIM * MATRIX_DIM;
