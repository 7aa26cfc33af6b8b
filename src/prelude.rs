#[allow(unused_imports)]
pub use itertools::Itertools;
#[allow(unused_imports)]
pub use num_traits;

#[allow(unused_imports)]
pub use anyhow::{anyhow, bail, Context, Result};
#[allow(unused_imports)]
pub use tracing::{error, info, warn};

#[allow(unused_imports)]
pub use crate::{
    bounds::{BoundingBox, BoundingSphere, Containment, Plane, PlaneSide, Ray},
    colour::Colour,
    float,
    half::Half,
    linalg,
    linalg::{
        Affine3, Point2, Point3, Size2, Vec2, Vec2d, Vec2f, Vec2i, Vec2u, Vec3, Vec3d, Vec3f,
        Vec3i, Vec3u, Vec4, Vec4d, Vec4f, Vec4i, Vec4u,
    },
    num,
    packed::{Bgra8, Rgba8, SNorm2},
    rect::{Rect, Rectf, Recti},
    EPSILON,
};
