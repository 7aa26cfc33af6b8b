//! An axis-aligned rectangle stored as origin plus size.

use crate::linalg::{Point2, Size2, Vec2};
use num_traits::Num;
use serde::{Deserialize, Serialize};
use std::{fmt, fmt::Formatter};

/// An axis-aligned rectangle, generic over the coordinate type.
///
/// Stored as the top-left origin plus width and height; the edges derived from
/// those are `left = x`, `right = x + width` and so on. A rectangle with a
/// non-positive width or height is empty: it contains nothing and intersects
/// nothing.
///
/// # Examples
///
/// ```
/// use kuutio::prelude::*;
///
/// let r = Rect::new(0.0, 0.0, 4.0, 3.0);
/// assert_eq!(r.area(), 12.0);
/// assert!(r.contains_point(Vec2::new(4.0, 3.0))); // edges are inclusive
/// assert!(!r.contains_point(Vec2::new(4.1, 3.0)));
/// ```
#[repr(C)]
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect<T> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
}

pub type Rectf = Rect<f32>;
pub type Recti = Rect<i32>;

impl<T: Copy + Num + PartialOrd> Rect<T> {
    pub fn new(x: T, y: T, width: T, height: T) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds a rectangle spanning two corner points. The corners need not be
    /// ordered.
    #[must_use]
    pub fn from_min_max(a: Point2<T>, b: Point2<T>) -> Self {
        let min = a.min(b);
        let max = a.max(b);
        Self {
            x: min.x,
            y: min.y,
            width: max.x - min.x,
            height: max.y - min.y,
        }
    }

    /// Builds a rectangle from left/top/right/bottom edge coordinates.
    #[must_use]
    pub fn from_ltrb(left: T, top: T, right: T, bottom: T) -> Self {
        Self {
            x: left,
            y: top,
            width: right - left,
            height: bottom - top,
        }
    }

    #[must_use]
    pub fn left(&self) -> T {
        self.x
    }

    #[must_use]
    pub fn top(&self) -> T {
        self.y
    }

    #[must_use]
    pub fn right(&self) -> T {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> T {
        self.y + self.height
    }

    /// The top-left corner.
    #[must_use]
    pub fn min(&self) -> Point2<T> {
        Vec2 {
            x: self.x,
            y: self.y,
        }
    }

    /// The bottom-right corner.
    #[must_use]
    pub fn max(&self) -> Point2<T> {
        Vec2 {
            x: self.right(),
            y: self.bottom(),
        }
    }

    #[must_use]
    pub fn size(&self) -> Size2<T> {
        Vec2 {
            x: self.width,
            y: self.height,
        }
    }

    #[must_use]
    pub fn area(&self) -> T {
        self.width * self.height
    }

    /// The centre point. For integer coordinates the division truncates.
    #[must_use]
    pub fn centre(&self) -> Point2<T> {
        let two = T::one() + T::one();
        Vec2 {
            x: self.x + self.width / two,
            y: self.y + self.height / two,
        }
    }

    /// True if the width or height is non-positive. Empty rectangles contain
    /// no points and intersect nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= T::zero() || self.height <= T::zero()
    }

    /// Checks whether the point lies inside the rectangle. All four edges are
    /// inclusive.
    #[must_use]
    pub fn contains_point(&self, point: Point2<T>) -> bool {
        !self.is_empty()
            && point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    /// Checks whether `other` lies entirely inside this rectangle (edges
    /// inclusive). An empty `other` is never contained.
    #[must_use]
    pub fn contains_rect(&self, other: &Rect<T>) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && other.left() >= self.left()
            && other.right() <= self.right()
            && other.top() >= self.top()
            && other.bottom() <= self.bottom()
    }

    /// Checks whether the two rectangles overlap in a region of positive
    /// area. Touching edges do not count as an intersection.
    #[must_use]
    pub fn intersects(&self, other: &Rect<T>) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// The overlapping region of two rectangles, or `None` when they do not
    /// intersect.
    #[must_use]
    pub fn intersection(&self, other: &Rect<T>) -> Option<Rect<T>> {
        if !self.intersects(other) {
            return None;
        }
        Some(Self::from_min_max(
            self.min().max(other.min()),
            self.max().min(other.max()),
        ))
    }

    /// The smallest rectangle covering both inputs. An empty input is ignored
    /// rather than dragging its origin into the result.
    #[must_use]
    pub fn union(&self, other: &Rect<T>) -> Rect<T> {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        Self::from_min_max(self.min().min(other.min()), self.max().max(other.max()))
    }

    /// Moves the rectangle by the given offset without changing its size.
    #[must_use]
    pub fn translated(&self, offset: Vec2<T>) -> Rect<T> {
        Self {
            x: self.x + offset.x,
            y: self.y + offset.y,
            width: self.width,
            height: self.height,
        }
    }

    /// Grows the rectangle by the given margins on every side; `margin.x` is
    /// added to both the left and right edges, `margin.y` to top and bottom.
    #[must_use]
    pub fn inflated(&self, margin: Vec2<T>) -> Rect<T> {
        Self {
            x: self.x - margin.x,
            y: self.y - margin.y,
            width: self.width + margin.x + margin.x,
            height: self.height + margin.y + margin.y,
        }
    }
}

impl Rect<i32> {
    #[must_use]
    pub fn as_rectf(&self) -> Rectf {
        Rect {
            x: self.x as f32,
            y: self.y as f32,
            width: self.width as f32,
            height: self.height as f32,
        }
    }
}

impl Rect<f32> {
    /// Rounds each field to the nearest integer.
    #[must_use]
    pub fn as_recti_lossy(&self) -> Recti {
        Rect {
            x: self.x.round() as i32,
            y: self.y.round() as i32,
            width: self.width.round() as i32,
            height: self.height.round() as i32,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Rect<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rect({}, {}; {} x {})",
            self.x, self.y, self.width, self.height
        )
    }
}

impl<T: Copy + Num + PartialOrd> From<(Point2<T>, Size2<T>)> for Rect<T> {
    fn from((origin, size): (Point2<T>, Size2<T>)) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: size.x,
            height: size.y,
        }
    }
}
