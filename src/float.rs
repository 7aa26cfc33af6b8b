//! Scalar float helpers: interpolation, approximate comparison and the sRGB
//! transfer function.

use crate::EPSILON;
use anyhow::{bail, Result};
use std::num::FpCategory;

/// A linear interpolation between two values. `t` is not clamped.
///
/// # Examples
/// ```
/// use kuutio::float;
/// assert_eq!(float::lerp(0.0, 10.0, 0.0), 0.0);
/// assert_eq!(float::lerp(0.0, 10.0, 1.0), 10.0);
/// assert_eq!(float::lerp(0.0, 10.0, 0.5), 5.0);
/// assert_eq!(float::lerp(0.0, 10.0, 2.0), 20.0); // extrapolates
/// ```
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

/// Checks two floats for approximate equality against [`EPSILON`].
pub fn almost_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks two floats for near-equality: first an absolute tolerance check
/// against [`EPSILON`], then a fallback comparison accepting values at most
/// 4 ULPs apart.
///
/// Values of differing sign never match via the ULP fallback, even when both
/// are close to zero; only the tolerance check can accept those. NaN never
/// compares near-equal to anything, including itself.
///
/// # Examples
/// ```
/// use kuutio::float;
/// assert!(float::near_eq(1.0, 1.0));
/// assert!(float::near_eq(1.0, 1.0 + f32::EPSILON));
/// assert!(!float::near_eq(1.0, 1.1));
/// assert!(!float::near_eq(f32::NAN, f32::NAN));
/// ```
pub fn near_eq(a: f32, b: f32) -> bool {
    if (a - b).abs() < EPSILON {
        return true;
    }
    near_eq_ulps(a, b, 4)
}

/// Checks whether two floats are within `max_ulps` units in the last place of
/// each other, by reinterpreting their bit patterns as integers.
pub fn near_eq_ulps(a: f32, b: f32, max_ulps: i32) -> bool {
    if a.is_nan() || b.is_nan() {
        return false;
    }
    let a_bits = a.to_bits() as i32;
    let b_bits = b.to_bits() as i32;
    if (a_bits < 0) != (b_bits < 0) {
        return false;
    }
    (a_bits - b_bits).abs() <= max_ulps
}

/// Returns true for zero and normal values, false for NaN, infinities and
/// subnormals.
pub fn is_finite(x: f32) -> bool {
    matches!(x.classify(), FpCategory::Zero | FpCategory::Normal)
}

/// Replaces negative zero with positive zero, leaving all other values alone.
pub fn force_positive_zero(x: f32) -> f32 {
    if x == 0.0 {
        0.0
    } else {
        x
    }
}

/// The sign of `x` as `-1.0`, `0.0` or `1.0`, with both zeroes mapping to
/// `0.0`.
pub fn sign_zero(x: f32) -> f32 {
    if x == 0.0 {
        0.0
    } else {
        x.signum()
    }
}

/// Converts a float to `u32`, failing if the value is out of range.
pub fn f32_to_u32(x: f32) -> Result<u32> {
    if !(0.0..=u32::MAX as f32).contains(&x) {
        bail!("{x} does not fit in range of u32");
    }
    #[allow(clippy::cast_sign_loss)]
    Ok(x as u32)
}

/// Converts a single sRGB-encoded channel to linear light.
///
/// Standard piecewise transfer function: values at or below 0.04045 are
/// divided by 12.92, the rest follow the 2.4-exponent curve.
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Converts a single linear-light channel to sRGB encoding.
///
/// Inverse of [`srgb_to_linear`]: values at or below 0.0031308 are multiplied
/// by 12.92, the rest follow the 1/2.4-exponent curve.
pub fn linear_to_srgb(c: f32) -> f32 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}
