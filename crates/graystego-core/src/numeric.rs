//! Math-library-free numeric primitives shared by the codec and the
//! distortion metrics.

/// Natural logarithm of 10, to the precision the series below needs.
const LN_10: f64 = 2.302585;

/// Odd terms folded into the logarithm series before truncation.
const LOG_SERIES_TERMS: u32 = 1000;

/// Raises `base` to a non-negative integral power by repeated multiplication.
pub fn power(base: f64, exponent: u32) -> f64 {
    let mut result = 1.0;
    for _ in 0..exponent {
        result *= base;
    }
    result
}

/// Base-10 logarithm of `x`, approximated by the truncated series
/// `log10(x) = (2 / ln 10) * sum((1/k) * ((x-1)/(x+1))^k)` over odd `k`.
///
/// Panics if `x` is not positive.
pub fn log10(x: f64) -> f64 {
    assert!(x > 0.0, "logarithm argument must be positive, got {x}");

    let ratio = (x - 1.0) / (x + 1.0);
    let mut sum = 0.0;
    let mut k = 1;
    for _ in 0..LOG_SERIES_TERMS {
        sum += power(ratio, k) / f64::from(k);
        k += 2;
    }
    sum * 2.0 / LN_10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_of_zero_exponent_is_one() {
        assert_eq!(power(123.0, 0), 1.0);
    }

    #[test]
    fn power_multiplies_repeatedly() {
        assert_eq!(power(2.0, 8), 256.0);
        assert_eq!(power(10.0, 3), 1000.0);
    }

    #[test]
    fn power_handles_negative_bases() {
        assert_eq!(power(-3.0, 2), 9.0);
        assert_eq!(power(-2.0, 3), -8.0);
    }

    #[test]
    fn log10_of_one_is_zero() {
        assert_eq!(log10(1.0), 0.0);
    }

    #[test]
    fn log10_matches_the_standard_library_within_tolerance() {
        for x in [0.5, 2.0, 9.0, 10.0, 128.0, 255.0] {
            let diff = (log10(x) - x.log10()).abs();
            assert!(diff < 1e-4, "log10({x}) off by {diff}");
        }
    }

    #[test]
    #[should_panic(expected = "must be positive")]
    fn log10_rejects_zero() {
        log10(0.0);
    }

    #[test]
    #[should_panic(expected = "must be positive")]
    fn log10_rejects_negatives() {
        log10(-4.2);
    }
}
