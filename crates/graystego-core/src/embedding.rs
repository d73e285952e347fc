//! Hiding algorithms operating on the binary digits of a single pixel.

use enum_dispatch::enum_dispatch;

use crate::bits::{PixelBits, PIXEL_BITS};

/// Substitution width the optimal adjustment is defined for.
const ADJUST_WIDTH: u32 = 2;

/// Generic hiding algorithm, used for the specific LSB widths.
#[enum_dispatch]
pub trait HideAlgorithm {
    /// Secret digits consumed per cover pixel.
    fn bits_per_pixel(&self) -> usize;

    /// Overwrites the lowest digits of `digits` with the secret digits.
    fn substitute(&self, digits: PixelBits, secret: &[u8]) -> PixelBits;

    /// Post-substitution correction of the stego value; identity unless the
    /// algorithm defines one.
    fn adjust(&self, original: u8, substituted: u8) -> u8;
}

/// Replaces the least significant digit with one secret digit.
#[derive(Debug)]
pub struct OneBitHide;

impl HideAlgorithm for OneBitHide {
    fn bits_per_pixel(&self) -> usize {
        1
    }

    fn substitute(&self, mut digits: PixelBits, secret: &[u8]) -> PixelBits {
        digits[PIXEL_BITS - 1] = secret[0];
        digits
    }

    fn adjust(&self, _original: u8, substituted: u8) -> u8 {
        substituted
    }
}

/// Replaces the two least significant digits with a secret digit pair and
/// corrects the result with the optimal pixel adjustment.
#[derive(Debug)]
pub struct TwoBitHide;

impl HideAlgorithm for TwoBitHide {
    fn bits_per_pixel(&self) -> usize {
        2
    }

    fn substitute(&self, mut digits: PixelBits, secret: &[u8]) -> PixelBits {
        digits[PIXEL_BITS - 2] = secret[0];
        digits[PIXEL_BITS - 1] = secret[1];
        digits
    }

    fn adjust(&self, original: u8, substituted: u8) -> u8 {
        optimal_adjustment(original, substituted)
    }
}

#[enum_dispatch(HideAlgorithm)]
#[derive(Debug)]
pub enum HideAlgorithms {
    OneBitHide,
    TwoBitHide,
}

/// Pulls the stego value back towards the original when the substitution
/// overshot, without touching the embedded low digits.
fn optimal_adjustment(original: u8, substituted: u8) -> u8 {
    let step = 1i16 << ADJUST_WIDTH;
    let half = 1i16 << (ADJUST_WIDTH - 1);
    let ceiling = (1i16 << PIXEL_BITS) - step;

    let s = i16::from(substituted);
    let delta = s - i16::from(original);

    if half < delta && delta < step && s >= step {
        (s - step) as u8
    } else if -step <= delta && delta <= -half && s < ceiling {
        (s + step) as u8
    } else {
        substituted
    }
}
