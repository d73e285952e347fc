//! Streaming MSE/PSNR statistics over original/stego pixel pairs.

use crate::bits::PIXEL_BITS;
use crate::numeric::{log10, power};

/// Running squared error over a stream of pixel pairs.
#[derive(Debug, Default)]
pub struct DistortionAccumulator {
    squared_error: f64,
    samples: usize,
}

impl DistortionAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one original/stego pixel pair into the running error.
    pub fn record(&mut self, original: u8, stego: u8) {
        let delta = f64::from(original) - f64::from(stego);
        self.squared_error += power(delta, 2);
        self.samples += 1;
    }

    /// Closes the stream and derives the aggregate statistics.
    pub fn finalize(self) -> Distortion {
        let mse = if self.samples == 0 {
            0.0
        } else {
            self.squared_error / self.samples as f64
        };
        Distortion {
            mse,
            psnr: peak_signal_to_noise_ratio(mse),
        }
    }
}

/// Aggregate distortion of one embedding run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Distortion {
    /// Mean squared error between the cover and the stego matrix.
    pub mse: f64,
    /// Peak signal-to-noise ratio in decibel; infinite for a perfect
    /// reconstruction.
    pub psnr: f64,
}

/// PSNR for the given mean squared error, as
/// `20 * log10(max) - 10 * log10(mse)` with an 8-bit peak intensity.
///
/// A zero error has no finite ratio and maps to infinity instead of
/// entering the logarithm.
fn peak_signal_to_noise_ratio(mse: f64) -> f64 {
    if mse == 0.0 {
        return f64::INFINITY;
    }
    let max_intensity = power(2.0, PIXEL_BITS as u32) - 1.0;
    20.0 * log10(max_intensity) - 10.0 * log10(mse)
}
