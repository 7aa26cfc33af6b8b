//! Packed pixel and vertex formats: byte-lane colours and signed-normalised
//! integer pairs.
//!
//! Each type is `repr(C)` with one field per lane in memory order, so slices
//! of them can be uploaded or written out directly. The `to_u32`/`from_u32`
//! pairs use the little-endian lane contract: the first field occupies the
//! low byte.

use crate::num;
use serde::{Deserialize, Serialize};
use std::{fmt, fmt::Formatter};

/// Converts a `[0, 1]` float channel to a byte, clamping out-of-range input
/// and rounding to nearest.
fn unorm8(c: f32) -> u8 {
    (num::clamp(c, 0.0, 1.0) * 255.0).round() as u8
}

/// Converts a `[-1, 1]` float to a signed-normalised `i16`, clamping
/// out-of-range input and rounding to nearest.
fn snorm16(c: f32) -> i16 {
    (num::clamp(c, -1.0, 1.0) * 32767.0).round() as i16
}

/// An 8-bit-per-channel colour with lanes in `r, g, b, a` memory order.
///
/// # Examples
///
/// ```
/// use kuutio::packed::Rgba8;
///
/// let c = Rgba8::new(0x01, 0x02, 0x03, 0x04);
/// assert_eq!(c.to_u32(), 0x0403_0201);
/// assert_eq!(Rgba8::from_u32(0x0403_0201), c);
/// ```
#[repr(C)]
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Quantises float channels in `[0, 1]`, clamping out-of-range input.
    #[must_use]
    pub fn from_f32(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: unorm8(r),
            g: unorm8(g),
            b: unorm8(b),
            a: unorm8(a),
        }
    }

    /// The channels as floats in `[0, 1]`.
    #[must_use]
    pub fn to_f32(self) -> [f32; 4] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
            f32::from(self.a) / 255.0,
        ]
    }

    /// Packs the lanes into a `u32` with `r` in the low byte.
    #[must_use]
    pub const fn to_u32(self) -> u32 {
        self.r as u32 | (self.g as u32) << 8 | (self.b as u32) << 16 | (self.a as u32) << 24
    }

    /// Unpacks a `u32` with `r` in the low byte.
    #[must_use]
    pub const fn from_u32(packed: u32) -> Self {
        Self {
            r: packed as u8,
            g: (packed >> 8) as u8,
            b: (packed >> 16) as u8,
            a: (packed >> 24) as u8,
        }
    }

    /// Reorders the lanes into [`Bgra8`] memory order.
    #[must_use]
    pub const fn swizzle_bgra(self) -> Bgra8 {
        Bgra8 {
            b: self.b,
            g: self.g,
            r: self.r,
            a: self.a,
        }
    }
}

impl fmt::Display for Rgba8 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02x}{:02x}{:02x}{:02x}",
            self.r, self.g, self.b, self.a
        )
    }
}

/// An 8-bit-per-channel colour with lanes in `b, g, r, a` memory order, the
/// layout most swapchain surfaces expect.
#[repr(C)]
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bgra8 {
    pub b: u8,
    pub g: u8,
    pub r: u8,
    pub a: u8,
}

impl Bgra8 {
    pub const fn new(b: u8, g: u8, r: u8, a: u8) -> Self {
        Self { b, g, r, a }
    }

    /// Quantises float channels in `[0, 1]`, clamping out-of-range input.
    /// The arguments stay in `r, g, b, a` order; only the memory layout
    /// differs from [`Rgba8`].
    #[must_use]
    pub fn from_f32(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            b: unorm8(b),
            g: unorm8(g),
            r: unorm8(r),
            a: unorm8(a),
        }
    }

    /// The channels as floats in `[0, 1]`, in `r, g, b, a` order.
    #[must_use]
    pub fn to_f32(self) -> [f32; 4] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
            f32::from(self.a) / 255.0,
        ]
    }

    /// Packs the lanes into a `u32` with `b` in the low byte.
    #[must_use]
    pub const fn to_u32(self) -> u32 {
        self.b as u32 | (self.g as u32) << 8 | (self.r as u32) << 16 | (self.a as u32) << 24
    }

    /// Unpacks a `u32` with `b` in the low byte.
    #[must_use]
    pub const fn from_u32(packed: u32) -> Self {
        Self {
            b: packed as u8,
            g: (packed >> 8) as u8,
            r: (packed >> 16) as u8,
            a: (packed >> 24) as u8,
        }
    }

    /// Reorders the lanes into [`Rgba8`] memory order.
    #[must_use]
    pub const fn swizzle_rgba(self) -> Rgba8 {
        Rgba8 {
            r: self.r,
            g: self.g,
            b: self.b,
            a: self.a,
        }
    }
}

impl fmt::Display for Bgra8 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02x}{:02x}{:02x}{:02x}",
            self.r, self.g, self.b, self.a
        )
    }
}

/// A pair of signed-normalised 16-bit values in `[-1, 1]`, as used for packed
/// tangents and texture coordinates.
///
/// Decoding divides by 32767, except that `i16::MIN` maps to exactly `-1.0`
/// so both extremes are representable.
#[repr(C)]
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SNorm2 {
    pub x: i16,
    pub y: i16,
}

impl SNorm2 {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// Quantises a float pair in `[-1, 1]`, clamping out-of-range input and
    /// rounding to nearest.
    #[must_use]
    pub fn pack(x: f32, y: f32) -> Self {
        Self {
            x: snorm16(x),
            y: snorm16(y),
        }
    }

    /// The pair as floats in `[-1, 1]`.
    #[must_use]
    pub fn unpack(self) -> [f32; 2] {
        [Self::unpack_lane(self.x), Self::unpack_lane(self.y)]
    }

    fn unpack_lane(v: i16) -> f32 {
        if v == i16::MIN {
            -1.0
        } else {
            f32::from(v) / 32767.0
        }
    }

    /// Packs the lanes into a `u32` with `x` in the low half.
    #[must_use]
    pub const fn to_u32(self) -> u32 {
        self.x as u16 as u32 | (self.y as u16 as u32) << 16
    }

    /// Unpacks a `u32` with `x` in the low half.
    #[must_use]
    pub const fn from_u32(packed: u32) -> Self {
        Self {
            x: packed as u16 as i16,
            y: (packed >> 16) as u16 as i16,
        }
    }
}

impl fmt::Display for SNorm2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let [x, y] = self.unpack();
        write!(f, "snorm({x}, {y})")
    }
}
