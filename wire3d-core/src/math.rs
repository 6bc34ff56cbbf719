//! Vector and matrix primitives
//!
//! Matrices follow a row-as-basis convention: row `i` of a [`Mat3`] is the
//! image of basis vector `i`, so applying a matrix to `v` computes
//! `v.x * row0 + v.y * row1 + v.z * row2` (the transpose of the usual
//! column-vector product). The matrix generators in [`crate::transform`] are
//! written against this convention and must stay in sync with it.
use nalgebra::{Matrix3, Point2, Vector3};
use std::fmt;
use std::str::FromStr;

use crate::error::RenderError;

/// A point or direction in model space
pub type Vec3 = Vector3<f32>;

/// A linear transform in row-as-basis form
pub type Mat3 = Matrix3<f32>;

/// An integer terminal cell coordinate (`x` = column, `y` = row)
pub type ScreenPoint = Point2<i32>;

/// Multiply every component of `v` by `k`
pub fn scale(v: Vec3, k: f32) -> Vec3 {
    Vec3::new(v.x * k, v.y * k, v.z * k)
}

/// Component-wise sum
pub fn add(a: Vec3, b: Vec3) -> Vec3 {
    Vec3::new(a.x + b.x, a.y + b.y, a.z + b.z)
}

/// Apply `m` to `v` treating the rows of `m` as the basis vectors
pub fn apply_matrix(v: Vec3, m: &Mat3) -> Vec3 {
    let row = |i: usize| Vec3::new(m[(i, 0)], m[(i, 1)], m[(i, 2)]);

    add(scale(row(0), v.x), add(scale(row(1), v.y), scale(row(2), v.z)))
}

/// Coordinate axis a rotation is taken about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}

impl FromStr for Axis {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            "z" => Ok(Axis::Z),
            other => Err(RenderError::InvalidArgument(format!(
                "unknown rotation axis '{}' (expected x, y or z)",
                other
            ))),
        }
    }
}
