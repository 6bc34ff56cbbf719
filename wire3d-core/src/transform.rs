//! Matrix generators and the per-vertex transform pipeline
use crate::error::{RenderError, Result};
use crate::geometry::Mesh;
use crate::math::{apply_matrix, Axis, Mat3};

/// Largest coordinate magnitude a transformed mesh may reach
pub const MAX_COORDINATE: f32 = 1.0e6;

/// Transform builder for the row-as-basis matrices used by the pipeline
pub struct Transform;

impl Transform {
    /// Diagonal scale matrix
    pub fn scale_matrix(x: f32, y: f32, z: f32) -> Mat3 {
        Mat3::from_diagonal(&nalgebra::Vector3::new(x, y, z))
    }

    /// Rotation of `theta` degrees about `axis`
    pub fn rotation_matrix(theta: f32, axis: Axis) -> Mat3 {
        let (s, c) = theta.to_radians().sin_cos();

        #[rustfmt::skip]
        let m = match axis {
            Axis::X => Mat3::new(
                1.0, 0.0, 0.0,
                0.0,   c,  -s,
                0.0,   s,   c,
            ),
            Axis::Y => Mat3::new(
                  c, 0.0,   s,
                0.0, 1.0, 0.0,
                 -s, 0.0,   c,
            ),
            Axis::Z => Mat3::new(
                  c,  -s, 0.0,
                  s,   c, 0.0,
                0.0, 0.0, 1.0,
            ),
        };
        m
    }

    /// Identity with `a` and `b` in row 0, columns 1 and 2
    pub fn shear_matrix(a: f32, b: f32) -> Mat3 {
        let mut m = Mat3::identity();
        m[(0, 1)] = a;
        m[(0, 2)] = b;
        m
    }
}

/// Replace every vertex of `mesh` with its image under `matrix`
///
/// Edges and tag are kept. Applying a small rotation once per tick composes
/// into a continuous animation; float drift accumulates across calls.
pub fn apply_matrix_to_mesh(mesh: Mesh, matrix: &Mat3) -> Mesh {
    mesh.map_vertices(|v| apply_matrix(v, matrix))
}

/// Like [`apply_matrix_to_mesh`], but rejects results that are non-finite or
/// exceed [`MAX_COORDINATE`]
pub fn checked_apply(mesh: &Mesh, matrix: &Mat3) -> Result<Mesh> {
    let next = mesh.transformed(matrix);
    let magnitude = next.bounds_magnitude();
    if !magnitude.is_finite() || magnitude > MAX_COORDINATE {
        return Err(RenderError::NumericOverflow(format!(
            "mesh {} would reach coordinate magnitude {}",
            mesh.tag(),
            magnitude
        )));
    }
    Ok(next)
}

impl Mesh {
    /// Transformed copy, leaving `self` untouched
    pub fn transformed(&self, matrix: &Mat3) -> Mesh {
        apply_matrix_to_mesh(self.clone(), matrix)
    }
}

/// One rotation step applied every tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spin {
    pub axis: Axis,
    /// Degrees per tick; negative values rotate in reverse
    pub degrees: f32,
}

impl Spin {
    pub fn new(axis: Axis, degrees: f32) -> Self {
        Self { axis, degrees }
    }

    pub fn matrix(&self) -> Mat3 {
        Transform::rotation_matrix(self.degrees, self.axis)
    }

    pub fn reversed(&self) -> Self {
        Self::new(self.axis, -self.degrees)
    }
}
