//! Bounding volumes and the queries between them.
//!
//! [`BoundingBox`] and [`BoundingSphere`] support three families of queries:
//! tri-state containment ([`Containment`]), boolean intersection, and ray
//! casts returning the entry distance along the ray. [`Plane`] classification
//! reports which side of a plane a volume lies on ([`PlaneSide`]).
//!
//! All volumes use `f32` components. Inputs are not validated: a box with
//! `min > max` or a NaN coordinate produces meaningless (but memory-safe)
//! results.

use crate::linalg::{Affine3, Point3, Vec3, Vec3f};
use crate::EPSILON;
use serde::{Deserialize, Serialize};
use std::{fmt, fmt::Formatter};

/// How one volume relates to another.
///
/// `Contains` means the argument lies entirely inside the receiver;
/// `Intersects` covers partial overlap including boundary contact;
/// `Disjoint` means no shared points at all. Point queries compare
/// inclusively and only ever report `Contains` or `Disjoint`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Containment {
    Disjoint,
    Intersects,
    Contains,
}

/// Which side of a plane a volume lies on, relative to the plane normal.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaneSide {
    /// Entirely on the side the normal points away from.
    Back,
    /// Crossing or touching the plane.
    Intersecting,
    /// Entirely on the side the normal points towards.
    Front,
}

/// A half-line from an origin in a direction.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    pub origin: Point3<f32>,
    pub dir: Vec3f,
}

impl Ray {
    /// Creates a ray, normalising the direction. A zero direction stays zero
    /// and will never hit anything.
    #[must_use]
    pub fn new(origin: Point3<f32>, dir: Vec3f) -> Self {
        Self {
            origin,
            dir: dir.normed(),
        }
    }

    /// The point at parameter `t` along the ray.
    #[must_use]
    pub fn at(&self, t: f32) -> Point3<f32> {
        self.origin + self.dir * t
    }
}

/// An infinite plane in normal-distance form: points `p` on the plane satisfy
/// `normal . p == distance`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    pub normal: Vec3f,
    pub distance: f32,
}

impl Plane {
    /// Creates a plane, normalising the normal and rescaling the distance so
    /// the same geometric plane is described.
    #[must_use]
    pub fn new(normal: Vec3f, distance: f32) -> Self {
        let len = normal.len();
        if len == 0.0 {
            return Self {
                normal: Vec3::zero(),
                distance,
            };
        }
        Self {
            normal: normal / len,
            distance: distance / len,
        }
    }

    /// The plane through `point` with the given normal.
    #[must_use]
    pub fn from_point_normal(point: Point3<f32>, normal: Vec3f) -> Self {
        let normal = normal.normed();
        Self {
            normal,
            distance: normal.dot(point),
        }
    }

    /// The plane through three points, with the normal following the winding
    /// `a -> b -> c` (right-handed).
    #[must_use]
    pub fn from_points(a: Point3<f32>, b: Point3<f32>, c: Point3<f32>) -> Self {
        Self::from_point_normal(a, (b - a).cross(c - a))
    }

    /// The signed distance from the point to the plane: positive on the side
    /// the normal points towards.
    ///
    /// # Examples
    ///
    /// ```
    /// use kuutio::prelude::*;
    ///
    /// let ground = Plane::from_point_normal(Vec3::zero(), Vec3::new(0.0, 1.0, 0.0));
    /// assert_eq!(ground.signed_distance(Vec3::new(5.0, 3.0, -2.0)), 3.0);
    /// assert_eq!(ground.signed_distance(Vec3::new(0.0, -1.0, 0.0)), -1.0);
    /// ```
    #[must_use]
    pub fn signed_distance(&self, point: Point3<f32>) -> f32 {
        self.normal.dot(point) - self.distance
    }

    /// Classifies which side of the plane a point lies on, treating points
    /// within [`EPSILON`] of the plane as intersecting.
    #[must_use]
    pub fn classify_point(&self, point: Point3<f32>) -> PlaneSide {
        let d = self.signed_distance(point);
        if d > EPSILON {
            PlaneSide::Front
        } else if d < -EPSILON {
            PlaneSide::Back
        } else {
            PlaneSide::Intersecting
        }
    }

    /// The distance along the ray to the plane, or `None` when the ray is
    /// parallel to the plane or points away from it.
    #[must_use]
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f32> {
        let denom = self.normal.dot(ray.dir);
        if denom.abs() < EPSILON {
            return None;
        }
        let t = -self.signed_distance(ray.origin) / denom;
        if t < 0.0 {
            return None;
        }
        Some(t)
    }
}

/// An axis-aligned bounding box stored as its two extreme corners.
///
/// # Examples
///
/// ```
/// use kuutio::prelude::*;
///
/// let unit = BoundingBox::new(Vec3::zero(), Vec3::one());
/// assert_eq!(unit.centre(), Vec3::splat(0.5));
/// assert_eq!(
///     unit.contains_point(Vec3::splat(0.5)),
///     Containment::Contains
/// );
/// ```
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Point3<f32>,
    pub max: Point3<f32>,
}

impl BoundingBox {
    #[must_use]
    pub fn new(min: Point3<f32>, max: Point3<f32>) -> Self {
        Self { min, max }
    }

    /// A box centred on `centre` extending `half_extents` in each direction.
    #[must_use]
    pub fn from_centre_half_extents(centre: Point3<f32>, half_extents: Vec3f) -> Self {
        Self {
            min: centre - half_extents,
            max: centre + half_extents,
        }
    }

    /// The tightest box around a set of points, or `None` for an empty set.
    pub fn from_points(points: impl IntoIterator<Item = Point3<f32>>) -> Option<Self> {
        let mut it = points.into_iter();
        let first = it.next()?;
        let (min, max) = it.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Some(Self { min, max })
    }

    /// The tightest box around a sphere.
    #[must_use]
    pub fn from_sphere(sphere: &BoundingSphere) -> Self {
        let r = Vec3::splat(sphere.radius);
        Self {
            min: sphere.centre - r,
            max: sphere.centre + r,
        }
    }

    /// The smallest box covering both inputs.
    #[must_use]
    pub fn merged(&self, other: &BoundingBox) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    #[must_use]
    pub fn centre(&self) -> Point3<f32> {
        (self.min + self.max) * 0.5
    }

    #[must_use]
    pub fn size(&self) -> Vec3f {
        self.max - self.min
    }

    #[must_use]
    pub fn half_extents(&self) -> Vec3f {
        self.size() * 0.5
    }

    #[must_use]
    pub fn volume(&self) -> f32 {
        let size = self.size();
        size.x * size.y * size.z
    }

    /// The eight corners, in min-to-max binary counting order over `(x, y, z)`.
    #[must_use]
    pub fn corners(&self) -> [Point3<f32>; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            Vec3::new(lo.x, lo.y, lo.z),
            Vec3::new(hi.x, lo.y, lo.z),
            Vec3::new(lo.x, hi.y, lo.z),
            Vec3::new(hi.x, hi.y, lo.z),
            Vec3::new(lo.x, lo.y, hi.z),
            Vec3::new(hi.x, lo.y, hi.z),
            Vec3::new(lo.x, hi.y, hi.z),
            Vec3::new(hi.x, hi.y, hi.z),
        ]
    }

    /// Grows the box by the given margins in every direction.
    #[must_use]
    pub fn expanded(&self, margin: Vec3f) -> Self {
        Self {
            min: self.min - margin,
            max: self.max + margin,
        }
    }

    /// Moves the box by the given offset.
    #[must_use]
    pub fn translated(&self, offset: Vec3f) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// Where a point lies relative to the box. The comparison is inclusive
    /// on all axes, so a point on a face or corner is `Contains`.
    #[must_use]
    pub fn contains_point(&self, point: Point3<f32>) -> Containment {
        if point.x < self.min.x
            || point.x > self.max.x
            || point.y < self.min.y
            || point.y > self.max.y
            || point.z < self.min.z
            || point.z > self.max.z
        {
            return Containment::Disjoint;
        }
        Containment::Contains
    }

    /// Where another box lies relative to this box. Shared faces count as
    /// containment when `other` does not protrude.
    #[must_use]
    pub fn contains_box(&self, other: &BoundingBox) -> Containment {
        if !self.intersects_box(other) {
            return Containment::Disjoint;
        }
        if self.min.x <= other.min.x
            && other.max.x <= self.max.x
            && self.min.y <= other.min.y
            && other.max.y <= self.max.y
            && self.min.z <= other.min.z
            && other.max.z <= self.max.z
        {
            return Containment::Contains;
        }
        Containment::Intersects
    }

    /// Where a sphere lies relative to this box.
    #[must_use]
    pub fn contains_sphere(&self, sphere: &BoundingSphere) -> Containment {
        let nearest = sphere.centre.clamp(self.min, self.max);
        if sphere.centre.dist_squared(nearest) > sphere.radius * sphere.radius {
            return Containment::Disjoint;
        }
        let r = sphere.radius;
        let c = sphere.centre;
        if self.min.x + r <= c.x
            && c.x <= self.max.x - r
            && self.max.x - self.min.x > r
            && self.min.y + r <= c.y
            && c.y <= self.max.y - r
            && self.max.y - self.min.y > r
            && self.min.z + r <= c.z
            && c.z <= self.max.z - r
            && self.max.z - self.min.z > r
        {
            return Containment::Contains;
        }
        Containment::Intersects
    }

    /// Checks for overlap with another box. Touching faces count as
    /// intersecting.
    #[must_use]
    pub fn intersects_box(&self, other: &BoundingBox) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
            && self.min.z <= other.max.z
            && other.min.z <= self.max.z
    }

    /// Checks for overlap with a sphere, by clamping the sphere centre to the
    /// box and comparing the remaining distance to the radius.
    #[must_use]
    pub fn intersects_sphere(&self, sphere: &BoundingSphere) -> bool {
        let nearest = sphere.centre.clamp(self.min, self.max);
        sphere.centre.dist_squared(nearest) <= sphere.radius * sphere.radius
    }

    /// The distance along the ray to the box, or `None` on a miss.
    ///
    /// Uses the slab method: the ray is clipped against the three axis slabs
    /// and hits when the clipped interval is non-empty. A ray starting inside
    /// the box reports distance `0.0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use kuutio::prelude::*;
    ///
    /// let unit = BoundingBox::new(Vec3::zero(), Vec3::one());
    /// let hit = Ray::new(Vec3::new(-1.0, 0.5, 0.5), Vec3::new(1.0, 0.0, 0.0));
    /// assert_eq!(unit.intersect_ray(&hit), Some(1.0));
    ///
    /// let behind = Ray::new(Vec3::new(2.0, 0.5, 0.5), Vec3::new(1.0, 0.0, 0.0));
    /// assert_eq!(unit.intersect_ray(&behind), None);
    /// ```
    #[must_use]
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f32> {
        let mut t_near = 0.0f32;
        let mut t_far = f32::MAX;
        for axis in 0..3 {
            let origin = ray.origin[axis];
            let dir = ray.dir[axis];
            if dir.abs() < EPSILON {
                // Parallel to this slab: a miss unless the origin is inside it.
                if origin < self.min[axis] || origin > self.max[axis] {
                    return None;
                }
                continue;
            }
            let inv = 1.0 / dir;
            let mut t1 = (self.min[axis] - origin) * inv;
            let mut t2 = (self.max[axis] - origin) * inv;
            if t1 > t2 {
                std::mem::swap(&mut t1, &mut t2);
            }
            t_near = t_near.max(t1);
            t_far = t_far.min(t2);
            if t_near > t_far {
                return None;
            }
        }
        Some(t_near)
    }

    /// Which side of the plane the box lies on, tested against the two
    /// corners extreme along the plane normal.
    #[must_use]
    pub fn classify_plane(&self, plane: &Plane) -> PlaneSide {
        let mut nearest = self.max;
        let mut furthest = self.min;
        if plane.normal.x >= 0.0 {
            nearest.x = self.min.x;
            furthest.x = self.max.x;
        }
        if plane.normal.y >= 0.0 {
            nearest.y = self.min.y;
            furthest.y = self.max.y;
        }
        if plane.normal.z >= 0.0 {
            nearest.z = self.min.z;
            furthest.z = self.max.z;
        }
        if plane.signed_distance(nearest) > 0.0 {
            return PlaneSide::Front;
        }
        if plane.signed_distance(furthest) < 0.0 {
            return PlaneSide::Back;
        }
        PlaneSide::Intersecting
    }

    /// The tightest axis-aligned box around this box after applying the
    /// transform: the centre is transformed as a point and each basis column's
    /// absolute contribution is accumulated into the half-extents.
    #[must_use]
    pub fn transformed(&self, transform: &Affine3) -> Self {
        let centre = transform.apply_point(self.centre());
        let half_extents = transform.abs_apply_vec(self.half_extents());
        Self::from_centre_half_extents(centre, half_extents)
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "box(min: {}, max: {})", self.min, self.max)
    }
}

/// A bounding sphere: a centre point and a radius.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundingSphere {
    pub centre: Point3<f32>,
    pub radius: f32,
}

impl BoundingSphere {
    #[must_use]
    pub fn new(centre: Point3<f32>, radius: f32) -> Self {
        Self { centre, radius }
    }

    /// The tightest sphere around a box: centred on the box centre with
    /// radius reaching the corners.
    #[must_use]
    pub fn from_box(bounds: &BoundingBox) -> Self {
        Self {
            centre: bounds.centre(),
            radius: bounds.half_extents().len(),
        }
    }

    /// A sphere around a set of points, or `None` for an empty set. Centred
    /// on the centroid with radius reaching the furthest point; not minimal,
    /// but cheap and always enclosing.
    pub fn from_points(points: &[Point3<f32>]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        let centre = points.iter().copied().sum::<Vec3f>() / points.len() as f32;
        let radius = points
            .iter()
            .map(|p| p.dist(centre))
            .fold(0.0f32, f32::max);
        Some(Self { centre, radius })
    }

    /// The smallest sphere covering both inputs. When one sphere already
    /// contains the other, that sphere is returned unchanged.
    #[must_use]
    pub fn merged(&self, other: &BoundingSphere) -> Self {
        let diff = other.centre - self.centre;
        let dist = diff.len();
        if dist < EPSILON {
            // Concentric: the bigger radius wins.
            return Self {
                centre: self.centre,
                radius: self.radius.max(other.radius),
            };
        }
        if dist + other.radius <= self.radius {
            return *self;
        }
        if dist + self.radius <= other.radius {
            return *other;
        }
        let dir = diff / dist;
        let lo = (-self.radius).min(dist - other.radius);
        let hi = self.radius.max(dist + other.radius);
        let radius = (hi - lo) * 0.5;
        Self {
            centre: self.centre + dir * (lo + radius),
            radius,
        }
    }

    /// Moves the sphere by the given offset.
    #[must_use]
    pub fn translated(&self, offset: Vec3f) -> Self {
        Self {
            centre: self.centre + offset,
            radius: self.radius,
        }
    }

    /// Where a point lies relative to the sphere. The comparison is
    /// inclusive, so a point exactly on the surface is `Contains`.
    #[must_use]
    pub fn contains_point(&self, point: Point3<f32>) -> Containment {
        if self.centre.dist_squared(point) > self.radius * self.radius {
            Containment::Disjoint
        } else {
            Containment::Contains
        }
    }

    /// Where another sphere lies relative to this sphere.
    #[must_use]
    pub fn contains_sphere(&self, other: &BoundingSphere) -> Containment {
        let dist = self.centre.dist(other.centre);
        if self.radius + other.radius < dist {
            Containment::Disjoint
        } else if self.radius - other.radius < dist {
            Containment::Intersects
        } else {
            Containment::Contains
        }
    }

    /// Where a box lies relative to this sphere: contained only when all
    /// eight corners are within the radius.
    #[must_use]
    pub fn contains_box(&self, bounds: &BoundingBox) -> Containment {
        if !bounds.intersects_sphere(self) {
            return Containment::Disjoint;
        }
        let r_squared = self.radius * self.radius;
        for corner in bounds.corners() {
            if self.centre.dist_squared(corner) > r_squared {
                return Containment::Intersects;
            }
        }
        Containment::Contains
    }

    /// Checks for overlap with another sphere. Touching surfaces count as
    /// intersecting.
    #[must_use]
    pub fn intersects_sphere(&self, other: &BoundingSphere) -> bool {
        let r = self.radius + other.radius;
        self.centre.dist_squared(other.centre) <= r * r
    }

    /// Checks for overlap with a box.
    #[must_use]
    pub fn intersects_box(&self, bounds: &BoundingBox) -> bool {
        bounds.intersects_sphere(self)
    }

    /// The distance along the ray to the sphere, or `None` on a miss. A ray
    /// starting inside the sphere reports distance `0.0`.
    #[must_use]
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f32> {
        let m = ray.origin - self.centre;
        let b = m.dot(ray.dir);
        let c = m.len_squared() - self.radius * self.radius;
        // Origin outside and pointing away.
        if c > 0.0 && b > 0.0 {
            return None;
        }
        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return None;
        }
        let t = -b - discriminant.sqrt();
        Some(t.max(0.0))
    }

    /// Which side of the plane the sphere lies on.
    #[must_use]
    pub fn classify_plane(&self, plane: &Plane) -> PlaneSide {
        let d = plane.signed_distance(self.centre);
        if d > self.radius {
            PlaneSide::Front
        } else if d < -self.radius {
            PlaneSide::Back
        } else {
            PlaneSide::Intersecting
        }
    }
}

impl fmt::Display for BoundingSphere {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "sphere(centre: {}, radius: {})", self.centre, self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::float;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn unit_box() -> BoundingBox {
        BoundingBox::new(Vec3::zero(), Vec3::one())
    }

    // ==================== Ray and plane basics ====================

    #[test]
    fn ray_normalises_direction() {
        let ray = Ray::new(Vec3::zero(), Vec3::new(0.0, 0.0, 10.0));
        assert!(ray.dir.almost_eq(Vec3::new(0.0, 0.0, 1.0)));
        assert!(ray.at(2.0).almost_eq(Vec3::new(0.0, 0.0, 2.0)));
    }

    #[test]
    fn plane_new_rescales_distance() {
        // 2x + 0y + 0z = 4 is the same plane as x = 2.
        let plane = Plane::new(Vec3::new(2.0, 0.0, 0.0), 4.0);
        assert!(plane.normal.almost_eq(Vec3::new(1.0, 0.0, 0.0)));
        assert!(float::almost_eq(plane.distance, 2.0));
        assert!(float::almost_eq(
            plane.signed_distance(Vec3::new(2.0, 7.0, -3.0)),
            0.0
        ));
    }

    #[test]
    fn plane_from_points_winding() {
        let plane = Plane::from_points(
            Vec3::zero(),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        );
        assert!(plane.normal.almost_eq(Vec3::new(0.0, 0.0, 1.0)));
        assert_eq!(
            plane.classify_point(Vec3::new(0.3, 0.3, 5.0)),
            PlaneSide::Front
        );
        assert_eq!(
            plane.classify_point(Vec3::new(0.3, 0.3, -5.0)),
            PlaneSide::Back
        );
        assert_eq!(
            plane.classify_point(Vec3::new(0.3, 0.3, 0.0)),
            PlaneSide::Intersecting
        );
    }

    #[test]
    fn plane_ray_intersection() {
        let ground = Plane::from_point_normal(Vec3::zero(), Vec3::new(0.0, 1.0, 0.0));
        let down = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        assert_eq!(ground.intersect_ray(&down), Some(5.0));
        // Pointing away from the plane.
        let up = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(ground.intersect_ray(&up), None);
        // Parallel to the plane.
        let along = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(ground.intersect_ray(&along), None);
    }

    // ==================== Box construction and measures ====================

    #[test]
    fn box_from_points() {
        let points = [
            Vec3::new(1.0, 5.0, -2.0),
            Vec3::new(-1.0, 2.0, 3.0),
            Vec3::new(0.0, 7.0, 0.0),
        ];
        let bounds = BoundingBox::from_points(points).unwrap();
        assert_eq!(bounds.min, Vec3::new(-1.0, 2.0, -2.0));
        assert_eq!(bounds.max, Vec3::new(1.0, 7.0, 3.0));
        assert_eq!(BoundingBox::from_points([]), None);
    }

    #[test]
    fn box_measures() {
        let bounds = BoundingBox::new(Vec3::new(-1.0, -2.0, -3.0), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(bounds.centre(), Vec3::zero());
        assert_eq!(bounds.size(), Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(bounds.half_extents(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(bounds.volume(), 48.0);
        assert_eq!(bounds.corners().len(), 8);
    }

    #[test]
    fn box_merged_expanded_translated() {
        let a = unit_box();
        let b = BoundingBox::new(Vec3::splat(2.0), Vec3::splat(3.0));
        let merged = a.merged(&b);
        assert_eq!(merged.min, Vec3::zero());
        assert_eq!(merged.max, Vec3::splat(3.0));

        let grown = a.expanded(Vec3::splat(0.5));
        assert_eq!(grown.min, Vec3::splat(-0.5));
        assert_eq!(grown.max, Vec3::splat(1.5));

        let moved = a.translated(Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(moved.min, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn box_around_sphere_and_back() {
        let sphere = BoundingSphere::new(Vec3::splat(1.0), 2.0);
        let bounds = BoundingBox::from_sphere(&sphere);
        assert_eq!(bounds.min, Vec3::splat(-1.0));
        assert_eq!(bounds.max, Vec3::splat(3.0));
        let back = BoundingSphere::from_box(&bounds);
        assert!(back.centre.almost_eq(sphere.centre));
        // The sphere around a box reaches the corners, so it is larger.
        assert!(back.radius >= sphere.radius);
    }

    // ==================== Tri-state containment ====================

    #[test]
    fn box_contains_point_inclusive() {
        let bounds = unit_box();
        assert_eq!(
            bounds.contains_point(Vec3::splat(0.5)),
            Containment::Contains
        );
        // The comparison is inclusive: faces and corners are contained.
        assert_eq!(
            bounds.contains_point(Vec3::new(0.0, 0.5, 0.5)),
            Containment::Contains
        );
        assert_eq!(bounds.contains_point(Vec3::one()), Containment::Contains);
        assert_eq!(
            bounds.contains_point(Vec3::splat(2.0)),
            Containment::Disjoint
        );
        assert_eq!(
            bounds.contains_point(Vec3::new(0.5, 0.5, 1.1)),
            Containment::Disjoint
        );
    }

    #[test]
    fn box_contains_box_tri_state() {
        let outer = BoundingBox::new(Vec3::zero(), Vec3::splat(10.0));
        let inner = BoundingBox::new(Vec3::splat(1.0), Vec3::splat(2.0));
        let poking = BoundingBox::new(Vec3::splat(9.0), Vec3::splat(11.0));
        let outside = BoundingBox::new(Vec3::splat(20.0), Vec3::splat(21.0));
        assert_eq!(outer.contains_box(&inner), Containment::Contains);
        assert_eq!(outer.contains_box(&poking), Containment::Intersects);
        assert_eq!(outer.contains_box(&outside), Containment::Disjoint);
        // A box sharing a face but not protruding is still contained.
        let flush = BoundingBox::new(Vec3::zero(), Vec3::splat(5.0));
        assert_eq!(outer.contains_box(&flush), Containment::Contains);
    }

    #[test]
    fn box_contains_sphere_tri_state() {
        let bounds = BoundingBox::new(Vec3::zero(), Vec3::splat(10.0));
        let inside = BoundingSphere::new(Vec3::splat(5.0), 2.0);
        let poking = BoundingSphere::new(Vec3::new(9.5, 5.0, 5.0), 2.0);
        let outside = BoundingSphere::new(Vec3::splat(20.0), 2.0);
        assert_eq!(bounds.contains_sphere(&inside), Containment::Contains);
        assert_eq!(bounds.contains_sphere(&poking), Containment::Intersects);
        assert_eq!(bounds.contains_sphere(&outside), Containment::Disjoint);
    }

    #[test]
    fn sphere_contains_point_inclusive() {
        let sphere = BoundingSphere::new(Vec3::zero(), 2.0);
        assert_eq!(
            sphere.contains_point(Vec3::new(1.0, 0.0, 0.0)),
            Containment::Contains
        );
        // A point exactly on the surface is contained.
        assert_eq!(
            sphere.contains_point(Vec3::new(2.0, 0.0, 0.0)),
            Containment::Contains
        );
        assert_eq!(
            sphere.contains_point(Vec3::new(3.0, 0.0, 0.0)),
            Containment::Disjoint
        );
    }

    #[test]
    fn sphere_contains_sphere_tri_state() {
        let big = BoundingSphere::new(Vec3::zero(), 5.0);
        assert_eq!(
            big.contains_sphere(&BoundingSphere::new(Vec3::new(1.0, 0.0, 0.0), 2.0)),
            Containment::Contains
        );
        assert_eq!(
            big.contains_sphere(&BoundingSphere::new(Vec3::new(4.0, 0.0, 0.0), 2.0)),
            Containment::Intersects
        );
        assert_eq!(
            big.contains_sphere(&BoundingSphere::new(Vec3::new(10.0, 0.0, 0.0), 2.0)),
            Containment::Disjoint
        );
    }

    #[test]
    fn sphere_contains_box_tri_state() {
        let sphere = BoundingSphere::new(Vec3::zero(), 10.0);
        // Corners at distance sqrt(3) < 10.
        let inner = BoundingBox::new(Vec3::splat(-1.0), Vec3::splat(1.0));
        assert_eq!(sphere.contains_box(&inner), Containment::Contains);
        // Nearest face inside, corners outside.
        let poking = BoundingBox::new(Vec3::splat(5.0), Vec3::splat(9.0));
        assert_eq!(sphere.contains_box(&poking), Containment::Intersects);
        let outside = BoundingBox::new(Vec3::splat(20.0), Vec3::splat(21.0));
        assert_eq!(sphere.contains_box(&outside), Containment::Disjoint);
    }

    // ==================== Boolean intersection ====================

    #[test]
    fn boxes_touching_faces_intersect() {
        let a = unit_box();
        let touching = BoundingBox::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(2.0, 1.0, 1.0));
        let apart = BoundingBox::new(Vec3::splat(1.5), Vec3::splat(2.0));
        assert!(a.intersects_box(&touching));
        assert!(!a.intersects_box(&apart));
    }

    #[test]
    fn spheres_touching_surfaces_intersect() {
        let a = BoundingSphere::new(Vec3::zero(), 1.0);
        let touching = BoundingSphere::new(Vec3::new(2.0, 0.0, 0.0), 1.0);
        let apart = BoundingSphere::new(Vec3::new(2.1, 0.0, 0.0), 1.0);
        assert!(a.intersects_sphere(&touching));
        assert!(!a.intersects_sphere(&apart));
    }

    #[test]
    fn sphere_box_intersection() {
        let bounds = unit_box();
        assert!(bounds.intersects_sphere(&BoundingSphere::new(Vec3::splat(0.5), 0.1)));
        // Near a corner: centre at (2,2,2), corner at (1,1,1), distance sqrt(3).
        assert!(!bounds.intersects_sphere(&BoundingSphere::new(Vec3::splat(2.0), 1.7)));
        assert!(bounds.intersects_sphere(&BoundingSphere::new(Vec3::splat(2.0), 1.8)));
    }

    // ==================== Ray casts ====================

    #[test]
    fn ray_box_entry_distance() {
        let bounds = unit_box();
        let ray = Ray::new(Vec3::new(-1.0, 0.5, 0.5), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(bounds.intersect_ray(&ray), Some(1.0));
    }

    #[test]
    fn ray_box_behind_misses() {
        let bounds = unit_box();
        let ray = Ray::new(Vec3::new(2.0, 0.5, 0.5), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(bounds.intersect_ray(&ray), None);
    }

    #[test]
    fn ray_box_origin_inside_reports_zero() {
        let bounds = unit_box();
        let ray = Ray::new(Vec3::splat(0.5), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(bounds.intersect_ray(&ray), Some(0.0));
    }

    #[test]
    fn ray_box_parallel_axis() {
        let bounds = unit_box();
        // Parallel to the x slab, origin outside it.
        let miss = Ray::new(Vec3::new(2.0, -1.0, 0.5), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(bounds.intersect_ray(&miss), None);
        // Parallel to the x slab, origin inside it.
        let hit = Ray::new(Vec3::new(0.5, -1.0, 0.5), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(bounds.intersect_ray(&hit), Some(1.0));
    }

    #[test]
    fn ray_box_diagonal() {
        let bounds = unit_box();
        let ray = Ray::new(Vec3::splat(-1.0), Vec3::one());
        let t = bounds.intersect_ray(&ray).unwrap();
        assert!(bounds.contains_point(ray.at(t)) != Containment::Disjoint);
        assert!(float::almost_eq(t, 3.0f32.sqrt()));
    }

    #[test]
    fn ray_sphere_cases() {
        let sphere = BoundingSphere::new(Vec3::zero(), 1.0);
        let head_on = Ray::new(Vec3::new(-3.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(sphere.intersect_ray(&head_on), Some(2.0));
        // Starting inside.
        let inside = Ray::new(Vec3::zero(), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(sphere.intersect_ray(&inside), Some(0.0));
        // Pointing away.
        let away = Ray::new(Vec3::new(-3.0, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(sphere.intersect_ray(&away), None);
        // Grazing past.
        let off_axis = Ray::new(Vec3::new(-3.0, 2.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(sphere.intersect_ray(&off_axis), None);
    }

    // ==================== Plane classification ====================

    #[test]
    fn box_plane_classification() {
        let plane = Plane::from_point_normal(Vec3::zero(), Vec3::new(0.0, 1.0, 0.0));
        let above = BoundingBox::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(1.0, 2.0, 1.0));
        let below = BoundingBox::new(Vec3::new(0.0, -2.0, 0.0), Vec3::new(1.0, -1.0, 1.0));
        let across = BoundingBox::new(Vec3::new(0.0, -1.0, 0.0), Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(above.classify_plane(&plane), PlaneSide::Front);
        assert_eq!(below.classify_plane(&plane), PlaneSide::Back);
        assert_eq!(across.classify_plane(&plane), PlaneSide::Intersecting);
        // Touching the plane from above.
        let touching = BoundingBox::new(Vec3::zero(), Vec3::one());
        assert_eq!(touching.classify_plane(&plane), PlaneSide::Intersecting);
    }

    #[test]
    fn box_plane_classification_negative_normal() {
        let plane = Plane::from_point_normal(Vec3::zero(), Vec3::new(0.0, -1.0, 0.0));
        let above = BoundingBox::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(1.0, 2.0, 1.0));
        assert_eq!(above.classify_plane(&plane), PlaneSide::Back);
    }

    #[test]
    fn sphere_plane_classification() {
        let plane = Plane::from_point_normal(Vec3::zero(), Vec3::new(0.0, 1.0, 0.0));
        let front = BoundingSphere::new(Vec3::new(0.0, 3.0, 0.0), 1.0);
        let back = BoundingSphere::new(Vec3::new(0.0, -3.0, 0.0), 1.0);
        let touching = BoundingSphere::new(Vec3::new(0.0, 1.0, 0.0), 1.0);
        assert_eq!(front.classify_plane(&plane), PlaneSide::Front);
        assert_eq!(back.classify_plane(&plane), PlaneSide::Back);
        assert_eq!(touching.classify_plane(&plane), PlaneSide::Intersecting);
    }

    // ==================== Sphere merging ====================

    #[test]
    fn merged_sphere_covers_both() {
        let a = BoundingSphere::new(Vec3::new(-2.0, 0.0, 0.0), 1.0);
        let b = BoundingSphere::new(Vec3::new(2.0, 0.0, 0.0), 1.0);
        let merged = a.merged(&b);
        assert!(merged.centre.almost_eq(Vec3::zero()));
        assert!(float::almost_eq(merged.radius, 3.0));
    }

    #[test]
    fn merged_sphere_containment_short_circuits() {
        let big = BoundingSphere::new(Vec3::zero(), 10.0);
        let small = BoundingSphere::new(Vec3::new(1.0, 0.0, 0.0), 2.0);
        assert_eq!(big.merged(&small), big);
        assert_eq!(small.merged(&big), big);
    }

    #[test]
    fn merged_sphere_concentric() {
        let a = BoundingSphere::new(Vec3::splat(1.0), 2.0);
        let b = BoundingSphere::new(Vec3::splat(1.0), 5.0);
        let merged = a.merged(&b);
        assert_eq!(merged.centre, Vec3::splat(1.0));
        assert_eq!(merged.radius, 5.0);
    }

    // ==================== Transformed boxes ====================

    #[test]
    fn transformed_box_translation_and_scale() {
        let bounds = unit_box();
        let moved = bounds.transformed(&Affine3::translation(Vec3::new(1.0, 2.0, 3.0)));
        assert!(moved.min.almost_eq(Vec3::new(1.0, 2.0, 3.0)));
        assert!(moved.max.almost_eq(Vec3::new(2.0, 3.0, 4.0)));

        let scaled = bounds.transformed(&Affine3::uniform_scale(2.0));
        assert!(scaled.min.almost_eq(Vec3::zero()));
        assert!(scaled.max.almost_eq(Vec3::splat(2.0)));
    }

    #[test]
    fn transformed_box_rotation_bounds_all_corners() {
        use std::f32::consts::FRAC_PI_4;
        let bounds = BoundingBox::new(Vec3::splat(-1.0), Vec3::splat(1.0));
        let rotated = bounds.transformed(&Affine3::rotate_z(FRAC_PI_4));
        // A 45-degree rotation widens the x/y extents to sqrt(2).
        let expected = 2.0f32.sqrt();
        assert!(float::almost_eq(rotated.max.x, expected));
        assert!(float::almost_eq(rotated.max.y, expected));
        assert!(float::almost_eq(rotated.max.z, 1.0));
        // Every transformed corner must lie within the new bounds.
        let t = Affine3::rotate_z(FRAC_PI_4);
        for corner in bounds.corners() {
            let p = t.apply_point(corner);
            assert_ne!(rotated.contains_point(p), Containment::Disjoint);
        }
    }

    // ==================== Consistency between query families ====================

    #[test]
    fn tri_state_agrees_with_boolean_queries() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut random_vec = |range: std::ops::Range<f32>| {
            Vec3::new(
                rng.gen_range(range.clone()),
                rng.gen_range(range.clone()),
                rng.gen_range(range),
            )
        };
        for _ in 0..200 {
            let a = BoundingBox::from_points([random_vec(-5.0..5.0), random_vec(-5.0..5.0)])
                .unwrap();
            let b = BoundingBox::from_points([random_vec(-5.0..5.0), random_vec(-5.0..5.0)])
                .unwrap();
            let sphere = BoundingSphere::new(random_vec(-5.0..5.0), 2.0);

            assert_eq!(
                a.contains_box(&b) != Containment::Disjoint,
                a.intersects_box(&b)
            );
            assert_eq!(
                a.contains_sphere(&sphere) != Containment::Disjoint,
                a.intersects_sphere(&sphere)
            );
            assert_eq!(
                sphere.contains_box(&a) != Containment::Disjoint,
                sphere.intersects_box(&a)
            );
        }
    }
}
