//! Plain-old-data geometry and colour value types for graphics-adjacent code.
//!
//! Everything in this crate is a stack-allocated, copyable value with no
//! ownership relationships: vectors, rectangles, bounding volumes, colours and
//! packed-colour codecs, plus the scalar helpers they are built from. All
//! operations are pure, synchronous and safe to call from any thread.
//!
//! Geometric invariants (box `min <= max`, non-negative radii) are deliberately
//! NOT validated: invalid inputs produce mathematically well-defined but
//! possibly meaningless outputs rather than errors. The exceptions are indexing
//! into a fixed-size vector (panics on out-of-range access) and copying
//! components into an undersized caller-supplied slice (returns an error).

pub mod bounds;
pub mod colour;
pub mod float;
pub mod half;
pub mod linalg;
pub mod num;
pub mod packed;
pub mod prelude;
pub mod rect;

/// Tolerance used for approximate float comparisons throughout the crate.
pub const EPSILON: f32 = 1e-5;
