// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dampening of the raw scale factor.

/// Dampen a raw scale factor into the coefficient applied to resolved values.
///
/// Halves the distance between the factor and `1`, so extreme factors adjust
/// dimensions less aggressively than a linear multiplier would: a scale of
/// `2` yields `1.5`, a scale of `0.5` yields `0.75`, a scale of `0` yields
/// `0.5`.
///
/// Any finite input is accepted. Zero and negative factors produce
/// mathematically valid but degenerate coefficients and are deliberately not
/// clamped; NaN propagates.
///
/// ```
/// use overstory_scale::reduce_scale_coefficient;
///
/// assert_eq!(reduce_scale_coefficient(1.0), 1.0);
/// assert_eq!(reduce_scale_coefficient(2.0), 1.5);
/// assert_eq!(reduce_scale_coefficient(0.5), 0.75);
/// ```
#[must_use]
pub fn reduce_scale_coefficient(scale: f64) -> f64 {
    if scale == 1.0 {
        return scale;
    }
    let diff = (scale - 1.0) / 2.0;
    // `diff` already carries the sign of `scale - 1`, so adding it moves
    // halfway toward the factor from either side of 1.
    1.0 + diff
}

#[cfg(test)]
mod tests {
    use super::reduce_scale_coefficient;

    #[test]
    fn identity_at_one() {
        assert_eq!(reduce_scale_coefficient(1.0), 1.0);
    }

    #[test]
    fn upscales_are_dampened() {
        assert_eq!(reduce_scale_coefficient(2.0), 1.5);
        assert_eq!(reduce_scale_coefficient(3.0), 2.0);
    }

    #[test]
    fn downscales_are_dampened() {
        assert_eq!(reduce_scale_coefficient(0.5), 0.75);
        assert_eq!(reduce_scale_coefficient(0.0), 0.5);
    }

    #[test]
    fn degenerate_factors_pass_through() {
        // Negative factors are accepted and not clamped.
        assert_eq!(reduce_scale_coefficient(-1.0), 0.0);
        assert!(reduce_scale_coefficient(f64::NAN).is_nan());
    }
}
