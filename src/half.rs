//! IEEE-754 binary16 ("half") conversion.
//!
//! [`Half`] stores the raw 16-bit encoding (1 sign bit, 5 exponent bits,
//! 10 mantissa bits) and converts to and from `f32` bit-exactly, including
//! subnormals, signed zero, infinities and NaN. Decoding is injective, so
//! every non-NaN pattern survives a round trip through `f32`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Formatter;

/// A 16-bit floating point value.
///
/// Equality and hashing operate on the raw bit pattern, so `0.0 != -0.0` and
/// NaN compares equal to an identical NaN pattern. Convert to `f32` for
/// numeric comparison.
///
/// # Examples
///
/// ```
/// use kuutio::half::Half;
///
/// let h = Half::from_f32(1.0);
/// assert_eq!(h, Half::ONE);
/// assert_eq!(h.to_f32(), 1.0);
///
/// // Values beyond the representable range saturate to infinity.
/// assert_eq!(Half::from_f32(70000.0), Half::INFINITY);
/// ```
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Half(u16);

impl Half {
    /// Positive zero.
    pub const ZERO: Half = Half(0x0000);
    /// Negative zero.
    pub const NEG_ZERO: Half = Half(0x8000);
    /// One.
    pub const ONE: Half = Half(0x3C00);
    /// Positive infinity.
    pub const INFINITY: Half = Half(0x7C00);
    /// Negative infinity.
    pub const NEG_INFINITY: Half = Half(0xFC00);
    /// A quiet NaN.
    pub const NAN: Half = Half(0x7E00);
    /// Largest finite value, 65504.
    pub const MAX: Half = Half(0x7BFF);
    /// Smallest positive normal value, 2^-14.
    pub const MIN_POSITIVE: Half = Half(0x0400);
    /// Smallest positive subnormal value, 2^-24.
    pub const MIN_POSITIVE_SUBNORMAL: Half = Half(0x0001);

    /// Reinterprets a raw bit pattern as a half-precision value.
    pub const fn from_bits(bits: u16) -> Half {
        Half(bits)
    }

    /// The raw bit pattern.
    pub const fn to_bits(self) -> u16 {
        self.0
    }

    /// Encodes an `f32` as binary16 with round-to-nearest (ties to even).
    ///
    /// Magnitudes beyond the half range saturate to infinity; NaN inputs
    /// produce a quiet NaN preserving the top mantissa bits; values below the
    /// smallest normal shift into the subnormal representation, and values
    /// below half the smallest subnormal flush to signed zero.
    pub fn from_f32(value: f32) -> Half {
        let bits = value.to_bits();
        let sign = ((bits >> 16) & 0x8000) as u16;
        let exp32 = ((bits >> 23) & 0xFF) as i32;
        let man = bits & 0x007F_FFFF;

        if exp32 == 0xFF {
            if man == 0 {
                return Half(sign | 0x7C00);
            }
            // Quiet NaN; keep the top payload bits but guarantee a nonzero
            // mantissa.
            return Half(sign | 0x7E00 | ((man >> 13) as u16));
        }

        let exp = exp32 - 127 + 15;
        if exp >= 0x1F {
            return Half(sign | 0x7C00);
        }
        if exp <= 0 {
            if exp < -10 {
                return Half(sign);
            }
            // Subnormal: restore the implicit bit, then shift the mantissa
            // into place rounding to nearest even.
            let man = man | 0x0080_0000;
            let shift = (14 - exp) as u32;
            let round = (1u32 << (shift - 1)) - 1;
            let odd = (man >> shift) & 1;
            return Half(sign | ((man + round + odd) >> shift) as u16);
        }

        // Normal: round the 23-bit mantissa to 10 bits, ties to even.
        let man = man + 0x0FFF + ((man >> 13) & 1);
        if man & 0x0080_0000 != 0 {
            // Rounding carried into the exponent.
            let exp = exp + 1;
            if exp >= 0x1F {
                return Half(sign | 0x7C00);
            }
            return Half(sign | ((exp as u16) << 10));
        }
        Half(sign | ((exp as u16) << 10) | ((man >> 13) as u16))
    }

    /// Decodes this binary16 value to `f32`. Exact for every input.
    pub fn to_f32(self) -> f32 {
        let sign = (u32::from(self.0) & 0x8000) << 16;
        let exp = u32::from((self.0 >> 10) & 0x1F);
        let man = u32::from(self.0 & 0x03FF);

        if exp == 0x1F {
            return f32::from_bits(sign | 0x7F80_0000 | (man << 13));
        }
        if exp == 0 {
            if man == 0 {
                return f32::from_bits(sign);
            }
            // Subnormal: renormalise by shifting the mantissa up until the
            // implicit bit appears, rebiasing the exponent as we go.
            let mut man = man;
            let mut exp = 113u32;
            while man & 0x0400 == 0 {
                man <<= 1;
                exp -= 1;
            }
            return f32::from_bits(sign | (exp << 23) | ((man & 0x03FF) << 13));
        }
        f32::from_bits(sign | ((exp + 112) << 23) | (man << 13))
    }

    /// True if this value encodes NaN.
    pub const fn is_nan(self) -> bool {
        self.0 & 0x7C00 == 0x7C00 && self.0 & 0x03FF != 0
    }

    /// True if this value encodes positive or negative infinity.
    pub const fn is_infinite(self) -> bool {
        self.0 & 0x7FFF == 0x7C00
    }

    /// True if the sign bit is set (including negative zero and NaN).
    pub const fn is_sign_negative(self) -> bool {
        self.0 & 0x8000 != 0
    }
}

impl From<f32> for Half {
    fn from(value: f32) -> Self {
        Half::from_f32(value)
    }
}

impl From<Half> for f32 {
    fn from(value: Half) -> Self {
        value.to_f32()
    }
}

impl fmt::Display for Half {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_f32())
    }
}
