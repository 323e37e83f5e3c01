//! Math types for glint.
//!
//! Vectors, points and colors all share `glam::DVec3`; the aliases only
//! document intent. Random sampling helpers take an explicit RNG handle so
//! renders can be reproduced from a seed.

pub use glam::DVec3;

mod interval;
mod sampling;

pub use interval::Interval;
pub use sampling::{
    random_color, random_color_range, random_f64, random_f64_range, random_in_unit_disk,
    random_in_unit_sphere, random_unit_vector,
};

/// A direction or displacement in 3D space.
pub type Vec3 = DVec3;

/// A position in 3D space.
pub type Point3 = DVec3;

/// Linear RGB color. Channels are unbounded during accumulation.
pub type Color = DVec3;

/// Components below this magnitude count as zero.
pub const NEAR_ZERO_EPSILON: f64 = 1e-8;

/// Returns true if every component of `v` is within `NEAR_ZERO_EPSILON` of zero.
#[inline]
pub fn near_zero(v: Vec3) -> bool {
    v.abs().max_element() < NEAR_ZERO_EPSILON
}
