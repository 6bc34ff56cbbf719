//! Perspective projection onto the terminal grid
use crate::error::{RenderError, Result};
use crate::math::{ScreenPoint, Vec3};

/// Focal length used when none is configured
pub const DEFAULT_FOCAL_LENGTH: f32 = 160.0;

/// Simple perspective-divide projector
///
/// Each screen axis is `coord * f / (f + depth)`, truncated toward zero, then
/// shifted by the viewport offset. The horizontal (column) coordinate comes
/// from the point's `y`, the vertical (row) coordinate from its `x`; depth is
/// always `z`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    pub focal_length: f32,
}

impl Projector {
    pub fn new(focal_length: f32) -> Self {
        Self { focal_length }
    }

    /// Project a model-space point to a screen cell
    pub fn project(&self, point: &Vec3, offset: ScreenPoint) -> Result<ScreenPoint> {
        let column = self.distance_from_middle(point.y, point.z)?;
        let row = self.distance_from_middle(point.x, point.z)?;

        match (column.checked_add(offset.x), row.checked_add(offset.y)) {
            (Some(x), Some(y)) => Ok(ScreenPoint::new(x, y)),
            _ => Err(RenderError::NumericOverflow(format!(
                "projected point ({}, {}) cannot be offset by ({}, {})",
                column, row, offset.x, offset.y
            ))),
        }
    }

    /// Project, rejecting points further than `extent` cells from the middle
    ///
    /// Points just in front of the focal plane land arbitrarily far away;
    /// bounding them keeps the lines drawn to them short.
    pub fn project_within(
        &self,
        point: &Vec3,
        offset: ScreenPoint,
        extent: i32,
    ) -> Result<ScreenPoint> {
        let projected = self.project(point, offset)?;
        let (dx, dy) = (
            (projected.x as i64 - offset.x as i64).abs(),
            (projected.y as i64 - offset.y as i64).abs(),
        );
        if dx > extent as i64 || dy > extent as i64 {
            return Err(RenderError::NumericOverflow(format!(
                "point at depth {} projects {} cells from the middle (limit {})",
                point.z,
                dx.max(dy),
                extent
            )));
        }
        Ok(projected)
    }

    fn distance_from_middle(&self, coord: f32, depth: f32) -> Result<i32> {
        let down = self.focal_length + depth;
        if down == 0.0 {
            return Err(RenderError::DivisionByZero(format!(
                "depth {} cancels focal length {}",
                depth, self.focal_length
            )));
        }

        let ratio = (coord * self.focal_length / down).trunc();
        if !ratio.is_finite() || ratio < i32::MIN as f32 || ratio > i32::MAX as f32 {
            return Err(RenderError::NumericOverflow(format!(
                "coordinate {} at depth {} projects outside the integer grid",
                coord, depth
            )));
        }

        Ok(ratio as i32)
    }
}

impl Default for Projector {
    fn default() -> Self {
        Self::new(DEFAULT_FOCAL_LENGTH)
    }
}
