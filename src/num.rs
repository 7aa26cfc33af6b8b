//! Generic numeric helpers: clamping and power-of-two alignment.

use num_traits::PrimInt;

/// Bounds `value` to `[min, max]`.
///
/// The upper bound is applied first, then the lower bound; callers must not
/// rely on the result when `min > max` (the lower bound wins, which is
/// deterministic but asserted against in debug builds).
///
/// # Examples
/// ```
/// use kuutio::num;
/// assert_eq!(num::clamp(5, 0, 10), 5);
/// assert_eq!(num::clamp(-3, 0, 10), 0);
/// assert_eq!(num::clamp(42, 0, 10), 10);
/// ```
pub fn clamp<T: Copy + PartialOrd>(value: T, min: T, max: T) -> T {
    debug_assert!(!(min > max), "clamp called with min > max");
    let value = if value > max { max } else { value };
    if value < min {
        min
    } else {
        value
    }
}

/// Returns true if `x` is a power of two. Zero is not a power of two.
pub fn is_pow2<T: PrimInt>(x: T) -> bool {
    x > T::zero() && (x & (x - T::one())) == T::zero()
}

/// Rounds `value` up to the next multiple of `alignment`.
///
/// `alignment` must be a power of two; this is asserted in debug builds and
/// undefined otherwise.
///
/// # Examples
/// ```
/// use kuutio::num;
/// assert_eq!(num::align_up(5u32, 4), 8);
/// assert_eq!(num::align_up(8u32, 4), 8);
/// ```
pub fn align_up<T: PrimInt>(value: T, alignment: T) -> T {
    debug_assert!(is_pow2(alignment), "alignment must be a power of two");
    let mask = alignment - T::one();
    (value + mask) & !mask
}

/// Rounds `value` down to the previous multiple of `alignment`.
///
/// `alignment` must be a power of two; this is asserted in debug builds and
/// undefined otherwise.
///
/// # Examples
/// ```
/// use kuutio::num;
/// assert_eq!(num::align_down(5u32, 4), 4);
/// assert_eq!(num::align_down(8u32, 4), 8);
/// ```
pub fn align_down<T: PrimInt>(value: T, alignment: T) -> T {
    debug_assert!(is_pow2(alignment), "alignment must be a power of two");
    value & !(alignment - T::one())
}
