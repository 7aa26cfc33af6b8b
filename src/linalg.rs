//! Vector value types and the affine transform used by the bounding volumes.
//!
//! The vector family is generic over the component type, so one struct per
//! shape category covers the float, double, int and unsigned variants via the
//! aliases below. Points and sizes are the same data as vectors and are
//! exposed as aliases rather than separate types.

use anyhow::{bail, Result};
use itertools::{Itertools, Product};
use num_traits::{Float, Num, NumCast, Signed, ToPrimitive};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::iter::Sum;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Range, Sub, SubAssign,
};
use std::{fmt, fmt::Formatter};
use tracing::warn;

pub type Vec2f = Vec2<f32>;
pub type Vec2d = Vec2<f64>;
pub type Vec2i = Vec2<i32>;
pub type Vec2u = Vec2<u32>;
pub type Vec3f = Vec3<f32>;
pub type Vec3d = Vec3<f64>;
pub type Vec3i = Vec3<i32>;
pub type Vec3u = Vec3<u32>;
pub type Vec4f = Vec4<f32>;
pub type Vec4d = Vec4<f64>;
pub type Vec4i = Vec4<i32>;
pub type Vec4u = Vec4<u32>;

/// A point is a vector measured from the origin.
pub type Point2<T> = Vec2<T>;
/// A point is a vector measured from the origin.
pub type Point3<T> = Vec3<T>;
/// A size is a vector of per-axis extents.
pub type Size2<T> = Vec2<T>;

/// A 2D vector, generic over the component type.
///
/// Equality is exact and component-wise; use [`Vec2::almost_eq`] for
/// tolerance-based comparison of float vectors. The struct is `repr(C)` with
/// fields in `x, y` order, so a slice of vectors can be handed to code that
/// expects a flat component array.
///
/// # Examples
///
/// ```
/// use kuutio::prelude::*;
///
/// let v1 = Vec2::new(3.0, 4.0);
/// let v2 = Vec2::new(1.0, 2.0);
/// assert_eq!(v1 + v2, Vec2::new(4.0, 6.0));
/// assert_eq!(v1.len(), 5.0);
/// ```
#[repr(C)]
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

/// A 3D vector, generic over the component type.
///
/// See [`Vec2`] for the conventions shared by the whole family. The struct is
/// `repr(C)` with fields in `x, y, z` order.
#[repr(C)]
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vec3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

/// A 4D vector, generic over the component type.
///
/// See [`Vec2`] for the conventions shared by the whole family. The struct is
/// `repr(C)` with fields in `x, y, z, w` order.
#[repr(C)]
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vec4<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

macro_rules! vec_common_impls {
    ($name:ident, $n:literal, [$($field:ident),+]) => {
        impl<T: Copy + Num> $name<T> {
            pub fn new($($field: T),+) -> Self {
                Self { $($field),+ }
            }

            /// Creates a vector with every component set to the given value.
            #[must_use]
            pub fn splat(v: T) -> Self {
                Self { $($field: v),+ }
            }

            /// The additive identity.
            #[must_use]
            pub fn zero() -> Self {
                Self::splat(T::zero())
            }

            /// A vector with every component set to one.
            #[must_use]
            pub fn one() -> Self {
                Self::splat(T::one())
            }

            /// Computes the dot product of two vectors.
            #[must_use]
            pub fn dot(self, rhs: Self) -> T {
                let mut acc = T::zero();
                $(acc = acc + self.$field * rhs.$field;)+
                acc
            }

            /// The squared length of the vector. Prefer this over
            /// [`len`](Self::len) when only comparing magnitudes.
            #[must_use]
            pub fn len_squared(self) -> T {
                self.dot(self)
            }

            /// Performs a component-wise multiplication of two vectors.
            #[must_use]
            pub fn component_wise(self, rhs: Self) -> Self {
                Self { $($field: self.$field * rhs.$field),+ }
            }

            /// Performs a component-wise division of two vectors.
            #[must_use]
            pub fn component_wise_div(self, rhs: Self) -> Self {
                Self { $($field: self.$field / rhs.$field),+ }
            }

            /// Copies the components into a caller-supplied slice in field
            /// order, failing if the destination is too small.
            pub fn write_to(self, dest: &mut [T]) -> Result<()> {
                if dest.len() < $n {
                    bail!(
                        "destination slice too small: {} < {}",
                        dest.len(),
                        $n
                    );
                }
                let mut i = 0;
                $(
                    dest[i] = self.$field;
                    #[allow(unused_assignments)]
                    { i += 1; }
                )+
                Ok(())
            }
        }

        impl<T: Copy + Num + PartialOrd> $name<T> {
            /// Component-wise minimum of two vectors.
            #[must_use]
            pub fn min(self, rhs: Self) -> Self {
                Self {
                    $($field: if rhs.$field < self.$field { rhs.$field } else { self.$field }),+
                }
            }

            /// Component-wise maximum of two vectors.
            #[must_use]
            pub fn max(self, rhs: Self) -> Self {
                Self {
                    $($field: if rhs.$field > self.$field { rhs.$field } else { self.$field }),+
                }
            }

            /// Bounds each component to the corresponding components of `min`
            /// and `max`.
            #[must_use]
            pub fn clamp(self, min: Self, max: Self) -> Self {
                self.max(min).min(max)
            }

            /// The smallest component.
            #[must_use]
            pub fn min_component(self) -> T {
                let mut acc = None;
                $(
                    acc = match acc {
                        Some(m) if m < self.$field => Some(m),
                        _ => Some(self.$field),
                    };
                )+
                acc.unwrap_or_else(T::zero)
            }

            /// The largest component.
            #[must_use]
            pub fn max_component(self) -> T {
                let mut acc = None;
                $(
                    acc = match acc {
                        Some(m) if m > self.$field => Some(m),
                        _ => Some(self.$field),
                    };
                )+
                acc.unwrap_or_else(T::zero)
            }
        }

        impl<T: Copy + Signed> $name<T> {
            /// Returns a new vector with the absolute value of each component.
            #[must_use]
            pub fn abs(self) -> Self {
                Self { $($field: self.$field.abs()),+ }
            }
        }

        impl<T: Copy + Float> $name<T> {
            /// The length of the vector.
            #[must_use]
            pub fn len(self) -> T {
                self.len_squared().sqrt()
            }

            /// The Euclidean distance between two points.
            #[must_use]
            pub fn dist(self, other: Self) -> T {
                (other - self).len()
            }

            /// The squared Euclidean distance between two points.
            #[must_use]
            pub fn dist_squared(self, other: Self) -> T {
                (other - self).len_squared()
            }

            /// Returns a normalised (unit) vector in the same direction.
            /// A zero-length input yields the zero vector.
            #[must_use]
            pub fn normed(self) -> Self {
                let len = self.len();
                if len == T::zero() {
                    Self::zero()
                } else {
                    self / len
                }
            }

            /// Linearly interpolates component-wise between this vector and
            /// `to`. `t` is not clamped.
            #[must_use]
            pub fn lerp(self, to: Self, t: T) -> Self {
                self + (to - self) * t
            }

            /// True if every component is zero or a normal float.
            #[must_use]
            pub fn is_finite(self) -> bool {
                true $(&& (self.$field.is_normal() || self.$field == T::zero()))+
            }
        }

        impl<T: Copy + ToPrimitive> $name<T> {
            /// Converts the component type, returning `None` when any
            /// component does not fit the target type.
            pub fn cast<U: NumCast>(self) -> Option<$name<U>> {
                Some($name { $($field: U::from(self.$field)?),+ })
            }
        }

        impl<T: Copy + Num> Add for $name<T> {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                Self { $($field: self.$field + rhs.$field),+ }
            }
        }

        impl<T: Copy + Num> AddAssign for $name<T> {
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl<T: Copy + Num> Sub for $name<T> {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self {
                Self { $($field: self.$field - rhs.$field),+ }
            }
        }

        impl<T: Copy + Num> SubAssign for $name<T> {
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl<T: Copy + Num> Mul<T> for $name<T> {
            type Output = Self;

            fn mul(self, rhs: T) -> Self {
                Self { $($field: self.$field * rhs),+ }
            }
        }

        impl<T: Copy + Num> MulAssign<T> for $name<T> {
            fn mul_assign(&mut self, rhs: T) {
                *self = *self * rhs;
            }
        }

        impl<T: Copy + Num> Div<T> for $name<T> {
            type Output = Self;

            fn div(self, rhs: T) -> Self {
                Self { $($field: self.$field / rhs),+ }
            }
        }

        impl<T: Copy + Num> DivAssign<T> for $name<T> {
            fn div_assign(&mut self, rhs: T) {
                *self = *self / rhs;
            }
        }

        impl<T: Copy + Signed> Neg for $name<T> {
            type Output = Self;

            fn neg(self) -> Self {
                Self { $($field: -self.$field),+ }
            }
        }

        impl<T: Copy + Num> Sum for $name<T> {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(Self::zero(), Self::add)
            }
        }

        impl Mul<$name<f32>> for f32 {
            type Output = $name<f32>;

            fn mul(self, rhs: $name<f32>) -> Self::Output {
                rhs * self
            }
        }

        impl Mul<$name<f64>> for f64 {
            type Output = $name<f64>;

            fn mul(self, rhs: $name<f64>) -> Self::Output {
                rhs * self
            }
        }

        impl<T: Copy> From<[T; $n]> for $name<T> {
            fn from(value: [T; $n]) -> Self {
                let mut it = value.into_iter();
                Self { $($field: it.next().unwrap()),+ }
            }
        }

        impl<T> From<$name<T>> for [T; $n] {
            fn from(value: $name<T>) -> Self {
                [$(value.$field),+]
            }
        }
    };
}

vec_common_impls!(Vec2, 2, [x, y]);
vec_common_impls!(Vec3, 3, [x, y, z]);
vec_common_impls!(Vec4, 4, [x, y, z, w]);

impl<T: Copy + Num> Vec2<T> {
    /// Computes the 2D cross product, the signed area of the parallelogram
    /// spanned by the two vectors.
    #[must_use]
    pub fn cross(self, rhs: Self) -> T {
        self.x * rhs.y - self.y * rhs.x
    }

    /// Appends a `z` component.
    #[must_use]
    pub fn extend(self, z: T) -> Vec3<T> {
        Vec3 {
            x: self.x,
            y: self.y,
            z,
        }
    }
}

impl<T: Copy + Num> Vec3<T> {
    /// Computes the 3D cross product of two vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// use kuutio::prelude::*;
    /// let x = Vec3::new(1.0, 0.0, 0.0);
    /// let y = Vec3::new(0.0, 1.0, 0.0);
    /// assert_eq!(x.cross(y), Vec3::new(0.0, 0.0, 1.0));
    /// ```
    #[must_use]
    pub fn cross(self, rhs: Self) -> Self {
        Self {
            x: self.y * rhs.z - self.z * rhs.y,
            y: self.z * rhs.x - self.x * rhs.z,
            z: self.x * rhs.y - self.y * rhs.x,
        }
    }

    /// Appends a `w` component.
    #[must_use]
    pub fn extend(self, w: T) -> Vec4<T> {
        Vec4 {
            x: self.x,
            y: self.y,
            z: self.z,
            w,
        }
    }

    /// Drops the `z` component.
    #[must_use]
    pub fn xy(self) -> Vec2<T> {
        Vec2 {
            x: self.x,
            y: self.y,
        }
    }
}

impl<T: Copy + Num> Vec4<T> {
    /// Drops the `w` component.
    #[must_use]
    pub fn xyz(self) -> Vec3<T> {
        Vec3 {
            x: self.x,
            y: self.y,
            z: self.z,
        }
    }
}

impl Vec2<i32> {
    /// Creates a Cartesian product of two coordinate ranges, from `start` to
    /// `end` (exclusive), iterating in row-major order.
    pub fn range(start: Vec2i, end: Vec2i) -> Product<Range<i32>, Range<i32>> {
        (start.x..end.x).cartesian_product(start.y..end.y)
    }

    /// Creates a Cartesian product of two coordinate ranges, from `(0, 0)` to
    /// the given `end` (exclusive).
    pub fn range_from_zero(end: impl Into<Vec2i>) -> Product<Range<i32>, Range<i32>> {
        Self::range(Vec2i::zero(), end.into())
    }
}

impl Vec2<f32> {
    /// Checks if the vector is approximately equal to another vector: the
    /// length of their difference is less than [`EPSILON`](crate::EPSILON).
    #[must_use]
    pub fn almost_eq(self, rhs: Self) -> bool {
        (self - rhs).len() < crate::EPSILON
    }

    /// Rounds each component to the nearest integer.
    #[must_use]
    pub fn as_vec2i_lossy(self) -> Vec2i {
        Vec2 {
            x: self.x.round() as i32,
            y: self.y.round() as i32,
        }
    }
}

impl Vec2<i32> {
    #[must_use]
    pub fn as_vec2f(self) -> Vec2f {
        Vec2 {
            x: self.x as f32,
            y: self.y as f32,
        }
    }
}

impl Vec3<f32> {
    /// Checks if the vector is approximately equal to another vector: the
    /// length of their difference is less than [`EPSILON`](crate::EPSILON).
    #[must_use]
    pub fn almost_eq(self, rhs: Self) -> bool {
        (self - rhs).len() < crate::EPSILON
    }

    /// Rounds each component to the nearest integer.
    #[must_use]
    pub fn as_vec3i_lossy(self) -> Vec3i {
        Vec3 {
            x: self.x.round() as i32,
            y: self.y.round() as i32,
            z: self.z.round() as i32,
        }
    }

    /// Widens each component to `f64`.
    #[must_use]
    pub fn as_vec3d(self) -> Vec3d {
        Vec3 {
            x: self.x as f64,
            y: self.y as f64,
            z: self.z as f64,
        }
    }

    /// Compares two vectors by squared length.
    ///
    /// Tries [`partial_cmp`](f32::partial_cmp) first; on NaN input falls back
    /// to [`total_cmp`](f32::total_cmp) and logs a warning, so the ordering is
    /// always deterministic.
    #[must_use]
    pub fn cmp_by_length(&self, other: &Vec3f) -> Ordering {
        let self_len = self.len_squared();
        let other_len = other.len_squared();
        self_len.partial_cmp(&other_len).unwrap_or_else(|| {
            warn!(
                "cmp_by_length(): partial_cmp() failed: {} vs. {}",
                self, other
            );
            self_len.total_cmp(&other_len)
        })
    }
}

impl Vec3<i32> {
    #[must_use]
    pub fn as_vec3f(self) -> Vec3f {
        Vec3 {
            x: self.x as f32,
            y: self.y as f32,
            z: self.z as f32,
        }
    }
}

impl Vec4<f32> {
    /// Checks if the vector is approximately equal to another vector: the
    /// length of their difference is less than [`EPSILON`](crate::EPSILON).
    #[must_use]
    pub fn almost_eq(self, rhs: Self) -> bool {
        (self - rhs).len() < crate::EPSILON
    }
}

macro_rules! vec_index_impls {
    ($name:ident, $n:literal, [$($idx:literal => $field:ident),+]) => {
        impl<T> Index<usize> for $name<T> {
            type Output = T;

            fn index(&self, index: usize) -> &T {
                match index {
                    $($idx => &self.$field,)+
                    _ => panic!(
                        concat!(stringify!($name), " index out of bounds: {}"),
                        index
                    ),
                }
            }
        }

        impl<T> IndexMut<usize> for $name<T> {
            fn index_mut(&mut self, index: usize) -> &mut T {
                match index {
                    $($idx => &mut self.$field,)+
                    _ => panic!(
                        concat!(stringify!($name), " index out of bounds: {}"),
                        index
                    ),
                }
            }
        }
    };
}

vec_index_impls!(Vec2, 2, [0 => x, 1 => y]);
vec_index_impls!(Vec3, 3, [0 => x, 1 => y, 2 => z]);
vec_index_impls!(Vec4, 4, [0 => x, 1 => y, 2 => z, 3 => w]);

impl<T: fmt::Display> fmt::Display for Vec2<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "vec({0:.2$}, {1:.2$})", self.x, self.y, p),
            None => write!(f, "vec({}, {})", self.x, self.y),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Vec3<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "vec({0:.3$}, {1:.3$}, {2:.3$})", self.x, self.y, self.z, p),
            None => write!(f, "vec({}, {}, {})", self.x, self.y, self.z),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Vec4<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(
                f,
                "vec({0:.4$}, {1:.4$}, {2:.4$}, {3:.4$})",
                self.x, self.y, self.z, self.w, p
            ),
            None => write!(f, "vec({}, {}, {}, {})", self.x, self.y, self.z, self.w),
        }
    }
}

/// An affine 3D transform stored as three basis columns and a translation.
///
/// Applying the transform maps a point `p` to
/// `x_axis * p.x + y_axis * p.y + z_axis * p.z + translation`. This covers
/// rotation, scale, shear and translation without carrying a full projective
/// matrix.
///
/// # Examples
///
/// ```
/// use kuutio::prelude::*;
/// use std::f32::consts::FRAC_PI_2;
///
/// let t = Affine3::rotate_z(FRAC_PI_2);
/// let p = t.apply_point(Vec3::new(1.0, 0.0, 0.0));
/// assert!(p.almost_eq(Vec3::new(0.0, 1.0, 0.0)));
/// ```
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Affine3 {
    pub x_axis: Vec3f,
    pub y_axis: Vec3f,
    pub z_axis: Vec3f,
    pub translation: Vec3f,
}

impl Affine3 {
    /// The identity transform.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            x_axis: Vec3::new(1.0, 0.0, 0.0),
            y_axis: Vec3::new(0.0, 1.0, 0.0),
            z_axis: Vec3::new(0.0, 0.0, 1.0),
            translation: Vec3::zero(),
        }
    }

    /// A pure translation.
    #[must_use]
    pub fn translation(offset: Vec3f) -> Self {
        Self {
            translation: offset,
            ..Self::identity()
        }
    }

    /// A per-axis scale about the origin.
    #[must_use]
    pub fn scale(factors: Vec3f) -> Self {
        Self {
            x_axis: Vec3::new(factors.x, 0.0, 0.0),
            y_axis: Vec3::new(0.0, factors.y, 0.0),
            z_axis: Vec3::new(0.0, 0.0, factors.z),
            translation: Vec3::zero(),
        }
    }

    /// A uniform scale about the origin.
    #[must_use]
    pub fn uniform_scale(factor: f32) -> Self {
        Self::scale(Vec3::splat(factor))
    }

    /// A rotation about the x-axis by the given angle in radians.
    #[must_use]
    pub fn rotate_x(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self {
            x_axis: Vec3::new(1.0, 0.0, 0.0),
            y_axis: Vec3::new(0.0, cos, sin),
            z_axis: Vec3::new(0.0, -sin, cos),
            translation: Vec3::zero(),
        }
    }

    /// A rotation about the y-axis by the given angle in radians.
    #[must_use]
    pub fn rotate_y(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self {
            x_axis: Vec3::new(cos, 0.0, -sin),
            y_axis: Vec3::new(0.0, 1.0, 0.0),
            z_axis: Vec3::new(sin, 0.0, cos),
            translation: Vec3::zero(),
        }
    }

    /// A rotation about the z-axis by the given angle in radians.
    #[must_use]
    pub fn rotate_z(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self {
            x_axis: Vec3::new(cos, sin, 0.0),
            y_axis: Vec3::new(-sin, cos, 0.0),
            z_axis: Vec3::new(0.0, 0.0, 1.0),
            translation: Vec3::zero(),
        }
    }

    /// Applies the transform to a point (translation included).
    #[must_use]
    pub fn apply_point(&self, p: Vec3f) -> Vec3f {
        self.apply_vec(p) + self.translation
    }

    /// Applies the linear part of the transform to a direction vector
    /// (translation ignored).
    #[must_use]
    pub fn apply_vec(&self, v: Vec3f) -> Vec3f {
        self.x_axis * v.x + self.y_axis * v.y + self.z_axis * v.z
    }

    /// Applies the absolute value of the linear part to a vector of
    /// non-negative extents. Used to bound a transformed axis-aligned box.
    #[must_use]
    pub fn abs_apply_vec(&self, v: Vec3f) -> Vec3f {
        self.x_axis.abs() * v.x + self.y_axis.abs() * v.y + self.z_axis.abs() * v.z
    }

    /// Composes two transforms; the result applies `other` first, then
    /// `self`.
    #[must_use]
    pub fn compose(&self, other: &Affine3) -> Self {
        Self {
            x_axis: self.apply_vec(other.x_axis),
            y_axis: self.apply_vec(other.y_axis),
            z_axis: self.apply_vec(other.z_axis),
            translation: self.apply_point(other.translation),
        }
    }
}

impl Default for Affine3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul<Affine3> for Affine3 {
    type Output = Affine3;

    fn mul(self, rhs: Affine3) -> Self::Output {
        self.compose(&rhs)
    }
}
