//! The embedding run itself: drives every pixel of the cover matrix through
//! substitution and adjustment while the distortion statistics accumulate.

use log::debug;

use crate::bits;
use crate::distortion::{Distortion, DistortionAccumulator};
use crate::embedding::{HideAlgorithm, HideAlgorithms, OneBitHide, TwoBitHide};
use crate::error::StegoError;
use crate::result::Result;
use crate::sources::{CoverMatrix, SecretBits};
use crate::PIXEL_COUNT;

/// Embedding widths supported by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedWidth {
    /// One secret digit per pixel, plain substitution.
    OneBit,
    /// Two secret digits per pixel, corrected by the optimal pixel
    /// adjustment.
    TwoBit,
}

impl EmbedWidth {
    fn algorithm(self) -> HideAlgorithms {
        match self {
            EmbedWidth::OneBit => OneBitHide.into(),
            EmbedWidth::TwoBit => TwoBitHide.into(),
        }
    }
}

/// Receiver of the stego pixel stream, in row-major emission order.
pub trait PixelSink {
    fn write_pixel(&mut self, value: u8) -> Result<()>;
}

/// In-memory sink, mostly for tests and benchmarks.
impl PixelSink for Vec<u8> {
    fn write_pixel(&mut self, value: u8) -> Result<()> {
        self.push(value);
        Ok(())
    }
}

/// Drives one embedding run over the full cover matrix.
pub struct Embedder {
    width: EmbedWidth,
    algorithm: HideAlgorithms,
}

impl Embedder {
    pub fn new(width: EmbedWidth) -> Self {
        Self {
            width,
            algorithm: width.algorithm(),
        }
    }

    /// Secret digits required to fill every pixel of the matrix.
    pub fn required_bits(&self) -> usize {
        PIXEL_COUNT * self.algorithm.bits_per_pixel()
    }

    /// Fails when the secret stream cannot cover the whole matrix, so that
    /// a short stream is rejected before any output exists.
    pub fn ensure_capacity(&self, secret: &SecretBits) -> Result<()> {
        let needed = self.required_bits();
        if secret.len() < needed {
            return Err(StegoError::SecretExhausted {
                needed,
                got: secret.len(),
            });
        }
        Ok(())
    }

    /// Walks the matrix in row-major order, substitutes the secret digits
    /// into every pixel and streams the adjusted result into `sink`.
    ///
    /// Pixel `i` consumes the secret digits `i*w..(i+1)*w`; the two streams
    /// stay aligned for the whole run.
    pub fn run<S: PixelSink>(
        &self,
        cover: &CoverMatrix,
        secret: &SecretBits,
        sink: &mut S,
    ) -> Result<EmbeddingReport> {
        self.ensure_capacity(secret)?;

        let per_pixel = self.algorithm.bits_per_pixel();
        let mut plain = DistortionAccumulator::new();
        let mut corrected = DistortionAccumulator::new();

        for (i, &original) in cover.pixels().iter().enumerate() {
            let digits = &secret.digits()[i * per_pixel..(i + 1) * per_pixel];
            let stego = bits::decode(&self.algorithm.substitute(bits::encode(original), digits));
            let adjusted = self.algorithm.adjust(original, stego);

            plain.record(original, stego);
            corrected.record(original, adjusted);
            sink.write_pixel(adjusted)?;
        }

        let report = EmbeddingReport {
            substitution: plain.finalize(),
            with_adjustment: match self.width {
                EmbedWidth::OneBit => None,
                EmbedWidth::TwoBit => Some(corrected.finalize()),
            },
        };
        debug!("embedding finished: {report:?}");
        Ok(report)
    }
}

/// Distortion statistics of one finished run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmbeddingReport {
    /// Distortion of the plain substituted matrix.
    pub substitution: Distortion,
    /// Distortion after the pixel adjustment; present for the two-bit
    /// width only.
    pub with_adjustment: Option<Distortion>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::{CoverMatrix, SecretBits};
    use crate::PIXEL_COUNT;

    fn flat_cover(value: u8) -> CoverMatrix {
        CoverMatrix::from_reader(format!("{value} ").repeat(PIXEL_COUNT).as_bytes())
            .expect("Cover matrix is not readable")
    }

    fn secret_of(pattern: &str, times: usize) -> SecretBits {
        SecretBits::from_reader(pattern.repeat(times).as_bytes())
            .expect("Secret bits are not readable")
    }

    #[test]
    fn one_bit_run_over_a_flat_cover_alternates_the_output() {
        let cover = flat_cover(128);
        let secret = secret_of("1 0 ", PIXEL_COUNT / 2);
        let mut stego = Vec::new();

        let report = Embedder::new(EmbedWidth::OneBit)
            .run(&cover, &secret, &mut stego)
            .unwrap();

        assert_eq!(stego.len(), PIXEL_COUNT);
        assert!(stego.chunks(2).all(|pair| pair == [129, 128]));
        assert_eq!(report.substitution.mse, 0.5);
        assert!((report.substitution.psnr - 51.1412).abs() < 1e-3);
        assert!(report.with_adjustment.is_none());
    }

    #[test]
    fn two_bit_run_reports_both_distortions() {
        let cover = flat_cover(128);
        let secret = secret_of("1 ", 2 * PIXEL_COUNT);
        let mut stego = Vec::new();

        let report = Embedder::new(EmbedWidth::TwoBit)
            .run(&cover, &secret, &mut stego)
            .unwrap();

        // every pixel substitutes 128 -> 131 and adjusts back to 127
        assert!(stego.iter().all(|&pixel| pixel == 127));
        assert_eq!(report.substitution.mse, 9.0);
        let adjusted = report.with_adjustment.unwrap();
        assert_eq!(adjusted.mse, 1.0);
        assert!(adjusted.psnr > report.substitution.psnr);
    }

    #[test]
    fn identical_stego_output_scores_an_infinite_ratio() {
        // embedding the digits a pixel already carries changes nothing
        let cover = flat_cover(129);
        let secret = secret_of("1 ", PIXEL_COUNT);
        let mut stego = Vec::new();

        let report = Embedder::new(EmbedWidth::OneBit)
            .run(&cover, &secret, &mut stego)
            .unwrap();

        assert_eq!(report.substitution.mse, 0.0);
        assert!(report.substitution.psnr.is_infinite());
    }

    #[test]
    fn a_short_secret_stream_is_rejected_before_any_pixel_is_emitted() {
        let cover = flat_cover(128);
        let secret = secret_of("1 0 ", PIXEL_COUNT / 4);
        let mut stego = Vec::new();

        let result = Embedder::new(EmbedWidth::OneBit).run(&cover, &secret, &mut stego);
        match result.err() {
            Some(StegoError::SecretExhausted { needed, got }) => {
                assert_eq!(needed, PIXEL_COUNT);
                assert_eq!(got, PIXEL_COUNT / 2);
            }
            other => panic!("expected exhausted secret, got {other:?}"),
        }
        assert!(stego.is_empty());
    }

    #[test]
    fn the_two_bit_width_needs_twice_the_digits() {
        assert_eq!(Embedder::new(EmbedWidth::OneBit).required_bits(), PIXEL_COUNT);
        assert_eq!(
            Embedder::new(EmbedWidth::TwoBit).required_bits(),
            2 * PIXEL_COUNT
        );
    }
}
