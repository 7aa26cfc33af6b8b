//! A floating-point RGBA colour and its conversions to the packed formats.

use crate::linalg::Vec4f;
use crate::packed::{Bgra8, Rgba8};
use crate::{float, num};
use num_traits::{FromPrimitive, PrimInt};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};
use std::{fmt, fmt::Formatter};

/// An RGBA colour with `f32` channels, nominally in `[0, 1]`.
///
/// Channels may wander outside `[0, 1]` during arithmetic; conversion to the
/// packed byte formats clamps. Unless stated otherwise the channels are
/// non-premultiplied sRGB-encoded values; use [`to_linear`](Colour::to_linear)
/// before mixing colours in linear light.
///
/// # Examples
///
/// ```
/// use kuutio::prelude::*;
///
/// let tint = Colour::red().with_alpha(0.5);
/// assert_eq!(tint.as_bytes(), [255, 0, 0, 128]);
/// ```
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Colour {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Default for Colour {
    fn default() -> Self {
        Self::white()
    }
}

impl Colour {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// An opaque colour from its colour channels.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Converts byte channels to floats by dividing by 255.
    #[must_use]
    pub fn from_bytes(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_rgba8(Rgba8::new(r, g, b, a))
    }

    /// As [`from_bytes`](Colour::from_bytes), but accepts any primitive
    /// integer type and clamps each channel to the byte range first.
    #[must_use]
    pub fn from_bytes_clamp<I: PrimInt + FromPrimitive>(r: I, g: I, b: I, a: I) -> Self {
        let to_byte = |c: I| {
            let min = I::from_u8(u8::MIN).unwrap_or_else(I::zero);
            let max = I::from_u8(u8::MAX).unwrap_or_else(I::max_value);
            num::clamp(c, min, max).to_u8().unwrap_or(u8::MAX)
        };
        Self::from_bytes(to_byte(r), to_byte(g), to_byte(b), to_byte(a))
    }

    /// Quantises to bytes, clamping each channel to `[0, 1]` and rounding to
    /// nearest.
    #[must_use]
    pub fn as_bytes(&self) -> [u8; 4] {
        let packed = self.as_rgba8();
        [packed.r, packed.g, packed.b, packed.a]
    }

    pub const fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }
    pub const fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }
    pub const fn red() -> Self {
        Self::rgb(1.0, 0.0, 0.0)
    }
    pub const fn green() -> Self {
        Self::rgb(0.0, 1.0, 0.0)
    }
    pub const fn blue() -> Self {
        Self::rgb(0.0, 0.0, 1.0)
    }
    pub const fn cyan() -> Self {
        Self::rgb(0.0, 1.0, 1.0)
    }
    pub const fn magenta() -> Self {
        Self::rgb(1.0, 0.0, 1.0)
    }
    pub const fn yellow() -> Self {
        Self::rgb(1.0, 1.0, 0.0)
    }
    /// Fully transparent black.
    pub const fn transparent() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// The same colour with a different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    /// Scales the colour channels, leaving alpha unchanged.
    #[must_use]
    pub fn scaled(self, factor: f32) -> Self {
        Self {
            r: self.r * factor,
            g: self.g * factor,
            b: self.b * factor,
            a: self.a,
        }
    }

    /// Multiplies the colour channels by the alpha, for blend modes that
    /// expect premultiplied input.
    #[must_use]
    pub fn premultiplied(self) -> Self {
        self.scaled(self.a)
    }

    /// Linearly interpolates all four channels. `t` is not clamped.
    #[must_use]
    pub fn lerp(self, to: Colour, t: f32) -> Self {
        Self {
            r: float::lerp(self.r, to.r, t),
            g: float::lerp(self.g, to.g, t),
            b: float::lerp(self.b, to.b, t),
            a: float::lerp(self.a, to.a, t),
        }
    }

    /// Checks all four channels for approximate equality against
    /// [`EPSILON`](crate::EPSILON).
    #[must_use]
    pub fn almost_eq(self, rhs: Colour) -> bool {
        float::almost_eq(self.r, rhs.r)
            && float::almost_eq(self.g, rhs.g)
            && float::almost_eq(self.b, rhs.b)
            && float::almost_eq(self.a, rhs.a)
    }

    /// Decodes the colour channels from sRGB to linear light. Alpha is
    /// already linear and passes through.
    #[must_use]
    pub fn to_linear(self) -> Self {
        Self {
            r: float::srgb_to_linear(self.r),
            g: float::srgb_to_linear(self.g),
            b: float::srgb_to_linear(self.b),
            a: self.a,
        }
    }

    /// Encodes linear-light colour channels to sRGB. Alpha passes through.
    #[must_use]
    pub fn to_srgb(self) -> Self {
        Self {
            r: float::linear_to_srgb(self.r),
            g: float::linear_to_srgb(self.g),
            b: float::linear_to_srgb(self.b),
            a: self.a,
        }
    }

    #[must_use]
    pub fn as_rgba8(&self) -> Rgba8 {
        Rgba8::from_f32(self.r, self.g, self.b, self.a)
    }

    #[must_use]
    pub fn from_rgba8(packed: Rgba8) -> Self {
        let [r, g, b, a] = packed.to_f32();
        Self { r, g, b, a }
    }

    #[must_use]
    pub fn as_bgra8(&self) -> Bgra8 {
        Bgra8::from_f32(self.r, self.g, self.b, self.a)
    }

    #[must_use]
    pub fn from_bgra8(packed: Bgra8) -> Self {
        let [r, g, b, a] = packed.to_f32();
        Self { r, g, b, a }
    }

    #[must_use]
    pub const fn as_vec4(&self) -> Vec4f {
        Vec4f {
            x: self.r,
            y: self.g,
            z: self.b,
            w: self.a,
        }
    }

    #[must_use]
    pub const fn from_vec4(v: Vec4f) -> Self {
        Self {
            r: v.x,
            g: v.y,
            b: v.z,
            a: v.w,
        }
    }
}

impl Add for Colour {
    type Output = Colour;

    fn add(self, rhs: Colour) -> Self::Output {
        Self {
            r: self.r + rhs.r,
            g: self.g + rhs.g,
            b: self.b + rhs.b,
            a: self.a + rhs.a,
        }
    }
}

/// Component-wise modulation, e.g. tinting a texture sample.
impl Mul for Colour {
    type Output = Colour;

    fn mul(self, rhs: Colour) -> Self::Output {
        Self {
            r: self.r * rhs.r,
            g: self.g * rhs.g,
            b: self.b * rhs.b,
            a: self.a * rhs.a,
        }
    }
}

impl Mul<f32> for Colour {
    type Output = Colour;

    fn mul(self, rhs: f32) -> Self::Output {
        Self {
            r: self.r * rhs,
            g: self.g * rhs,
            b: self.b * rhs,
            a: self.a * rhs,
        }
    }
}

impl From<[f32; 4]> for Colour {
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Colour> for [f32; 4] {
    fn from(value: Colour) -> Self {
        [value.r, value.g, value.b, value.a]
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_rgba8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Byte conversion ====================

    #[test]
    fn as_bytes_clamps_and_rounds() {
        assert_eq!(Colour::white().as_bytes(), [255, 255, 255, 255]);
        assert_eq!(Colour::transparent().as_bytes(), [0, 0, 0, 0]);
        assert_eq!(
            Colour::new(2.0, -1.0, 0.5, 1.0).as_bytes(),
            [255, 0, 128, 255]
        );
    }

    #[test]
    fn byte_round_trip_error_bounded() {
        let c = Colour::new(0.1, 0.4, 0.7, 0.9);
        let [r, g, b, a] = c.as_bytes();
        let back = Colour::from_bytes(r, g, b, a);
        // One quantization step; rounding ties land exactly on half a step.
        for (x, y) in [(c.r, back.r), (c.g, back.g), (c.b, back.b), (c.a, back.a)] {
            assert!((x - y).abs() < 1.0 / 255.0);
        }
    }

    #[test]
    fn from_bytes_clamp_bounds_integer_input() {
        let c = Colour::from_bytes_clamp(-10i32, 300, 128, 255);
        assert_eq!(c.as_bytes(), [0, 255, 128, 255]);
    }

    #[test]
    fn byte_round_trip_exact_on_quantised_input() {
        for byte in [0u8, 1, 127, 200, 255] {
            let c = Colour::from_bytes(byte, byte, byte, byte);
            assert_eq!(c.as_bytes(), [byte; 4]);
        }
    }

    // ==================== Packed formats ====================

    #[test]
    fn rgba8_and_bgra8_share_channel_semantics() {
        let c = Colour::new(1.0, 0.5, 0.0, 1.0);
        let rgba = c.as_rgba8();
        let bgra = c.as_bgra8();
        assert_eq!(rgba.r, bgra.r);
        assert_eq!(rgba.b, bgra.b);
        assert_eq!(rgba.swizzle_bgra(), bgra);
        assert!(Colour::from_bgra8(bgra).almost_eq(Colour::from_rgba8(rgba)));
    }

    // ==================== Arithmetic ====================

    #[test]
    fn scaled_leaves_alpha_alone() {
        let c = Colour::new(0.2, 0.4, 0.8, 0.5).scaled(2.0);
        assert!(c.almost_eq(Colour::new(0.4, 0.8, 1.6, 0.5)));
    }

    #[test]
    fn premultiplied_scales_by_alpha() {
        let c = Colour::new(1.0, 0.5, 0.0, 0.5).premultiplied();
        assert!(c.almost_eq(Colour::new(0.5, 0.25, 0.0, 0.5)));
    }

    #[test]
    fn lerp_does_not_clamp() {
        let black = Colour::black();
        let white = Colour::white();
        assert!(black.lerp(white, 0.5).almost_eq(Colour::rgb(0.5, 0.5, 0.5)));
        assert!(black
            .lerp(white, 2.0)
            .almost_eq(Colour::rgb(2.0, 2.0, 2.0)));
    }

    #[test]
    fn modulation_and_addition() {
        let tint = Colour::red() * Colour::new(0.5, 0.5, 0.5, 1.0);
        assert!(tint.almost_eq(Colour::new(0.5, 0.0, 0.0, 1.0)));
        let sum = Colour::red() + Colour::blue();
        // Alpha adds too; addition does not clamp.
        assert!(sum.almost_eq(Colour::magenta().with_alpha(2.0)));
        assert!(sum.a > 1.0);
    }

    // ==================== Colour space ====================

    #[test]
    fn srgb_round_trip() {
        let c = Colour::new(0.1, 0.5, 0.9, 0.7);
        let rt = c.to_linear().to_srgb();
        assert!(rt.almost_eq(c));
        // Alpha passes through untouched.
        assert_eq!(c.to_linear().a, c.a);
    }

    #[test]
    fn srgb_midgrey() {
        // sRGB 0.5 is roughly 21.4% linear light.
        let lin = Colour::rgb(0.5, 0.5, 0.5).to_linear();
        assert!((lin.r - 0.2140).abs() < 1e-3);
    }

    // ==================== Misc ====================

    #[test]
    fn vec4_view() {
        let c = Colour::new(0.1, 0.2, 0.3, 0.4);
        let v = c.as_vec4();
        assert_eq!(v, Vec4f::new(0.1, 0.2, 0.3, 0.4));
        assert_eq!(Colour::from_vec4(v), c);
    }

    #[test]
    fn display_as_hex() {
        assert_eq!(Colour::red().to_string(), "#ff0000ff");
        assert_eq!(Colour::red().with_alpha(0.0).to_string(), "#ff000000");
    }
}
