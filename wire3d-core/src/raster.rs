//! Line rasterization
use crate::math::ScreenPoint;
use crate::surface::Surface;

/// Glyph used for wireframe edges
pub const EDGE_GLYPH: char = '#';

/// Points of a digital differential analyzer line, endpoints inclusive
///
/// Takes `max(|dx|, |dy|)` equal steps and truncates each intermediate
/// position to integer coordinates. A zero-length line yields its single
/// point.
#[derive(Debug, Clone)]
pub struct LinePoints {
    x: f32,
    y: f32,
    x_inc: f32,
    y_inc: f32,
    remaining: u32,
}

impl LinePoints {
    pub fn new(p0: ScreenPoint, p1: ScreenPoint) -> Self {
        let dx = p1.x as i64 - p0.x as i64;
        let dy = p1.y as i64 - p0.y as i64;
        let steps = dx.abs().max(dy.abs());

        let (x_inc, y_inc) = if steps == 0 {
            (0.0, 0.0)
        } else {
            (dx as f32 / steps as f32, dy as f32 / steps as f32)
        };

        Self {
            x: p0.x as f32,
            y: p0.y as f32,
            x_inc,
            y_inc,
            remaining: steps.min(u32::MAX as i64 - 1) as u32 + 1,
        }
    }
}

impl Iterator for LinePoints {
    type Item = ScreenPoint;

    fn next(&mut self) -> Option<ScreenPoint> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let point = ScreenPoint::new(self.x as i32, self.y as i32);
        self.x += self.x_inc;
        self.y += self.y_inc;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for LinePoints {}

/// Plot every point from `p0` to `p1` inclusive; returns the number plotted
///
/// No viewport clipping happens here, the surface rejects what it cannot
/// show.
pub fn draw_line<S: Surface + ?Sized>(
    surface: &mut S,
    p0: ScreenPoint,
    p1: ScreenPoint,
    glyph: char,
    color: Option<u8>,
) -> usize {
    let mut plotted = 0;
    for point in LinePoints::new(p0, p1) {
        surface.plot(point.x, point.y, glyph, color);
        plotted += 1;
    }
    plotted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::CharBuffer;

    fn points(p0: (i32, i32), p1: (i32, i32)) -> Vec<(i32, i32)> {
        LinePoints::new(ScreenPoint::new(p0.0, p0.1), ScreenPoint::new(p1.0, p1.1))
            .map(|p| (p.x, p.y))
            .collect()
    }

    #[test]
    fn test_single_point_line() {
        assert_eq!(points((3, 7), (3, 7)), vec![(3, 7)]);
    }

    #[test]
    fn test_horizontal_line() {
        assert_eq!(
            points((0, 0), (4, 0)),
            vec![(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]
        );
    }

    #[test]
    fn test_reverse_and_vertical_lines() {
        assert_eq!(points((0, 3), (0, 0)), vec![(0, 3), (0, 2), (0, 1), (0, 0)]);
        assert_eq!(points((2, 2), (-1, -1)).len(), 4);
    }

    #[test]
    fn test_shallow_slope_truncates() {
        // y advances by 0.5 per step and is truncated
        assert_eq!(
            points((0, 0), (4, 2)),
            vec![(0, 0), (1, 0), (2, 1), (3, 1), (4, 2)]
        );
    }

    #[test]
    fn test_length_is_steps_plus_one() {
        let line = LinePoints::new(ScreenPoint::new(-5, 2), ScreenPoint::new(7, -1));
        assert_eq!(line.len(), 13);
    }

    #[test]
    fn test_draw_line_plots_on_surface() {
        let mut buffer = CharBuffer::new(8, 8);
        let plotted = draw_line(
            &mut buffer,
            ScreenPoint::new(1, 1),
            ScreenPoint::new(1, 1),
            EDGE_GLYPH,
            None,
        );
        assert_eq!(plotted, 1);
        assert_eq!(buffer.occupied(), vec![(1, 1)]);

        buffer.clear();
        draw_line(
            &mut buffer,
            ScreenPoint::new(6, 0),
            ScreenPoint::new(10, 0),
            EDGE_GLYPH,
            None,
        );
        // Two points land on the grid, the rest are the surface's to reject
        assert_eq!(buffer.occupied().len(), 2);
        assert_eq!(buffer.rejected(), 3);
    }
}
