//! Parsers for the plaintext cover and secret input streams.
//!
//! Both formats are flat sequences of whitespace-separated decimal tokens,
//! read in full before any embedding starts so that a malformed or short
//! stream never leaves partial output behind.

use std::io::Read;

use crate::error::{StegoError, StreamKind};
use crate::result::Result;
use crate::PIXEL_COUNT;

/// Read-only cover image: a fixed 256x256 gray-scale matrix, row-major.
pub struct CoverMatrix(Box<[u8; PIXEL_COUNT]>);

impl CoverMatrix {
    /// Parses intensities until the matrix is full; surplus tokens are left
    /// unread.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let text = read_text(reader)?;
        let mut pixels = Box::new([0u8; PIXEL_COUNT]);
        let mut filled = 0;

        for (index, token) in text.split_whitespace().enumerate() {
            if filled == PIXEL_COUNT {
                break;
            }
            let value = parse_value(StreamKind::Cover, index, token)?;
            if !(0..=255).contains(&value) {
                return Err(invalid(StreamKind::Cover, index, token));
            }
            pixels[filled] = value as u8;
            filled += 1;
        }

        if filled < PIXEL_COUNT {
            return Err(StegoError::CoverExhausted {
                needed: PIXEL_COUNT,
                got: filled,
            });
        }
        Ok(Self(pixels))
    }

    /// The matrix intensities in row-major order.
    pub fn pixels(&self) -> &[u8; PIXEL_COUNT] {
        &self.0
    }
}

/// Secret payload: a flat sequence of binary digits.
pub struct SecretBits(Vec<u8>);

impl SecretBits {
    /// Parses every digit in the stream; anything but 0 or 1 is rejected.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let text = read_text(reader)?;
        let mut digits = Vec::new();

        for (index, token) in text.split_whitespace().enumerate() {
            let value = parse_value(StreamKind::Secret, index, token)?;
            if value != 0 && value != 1 {
                return Err(invalid(StreamKind::Secret, index, token));
            }
            digits.push(value as u8);
        }
        Ok(Self(digits))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The digits in embedding order.
    pub fn digits(&self) -> &[u8] {
        &self.0
    }
}

fn read_text<R: Read>(mut reader: R) -> Result<String> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|source| StegoError::ReadError { source })?;
    Ok(text)
}

fn parse_value(stream: StreamKind, index: usize, token: &str) -> Result<i64> {
    token.parse().map_err(|_| invalid(stream, index, token))
}

fn invalid(stream: StreamKind, index: usize, token: &str) -> StegoError {
    StegoError::InvalidInput {
        stream,
        index,
        token: token.to_string(),
    }
}
