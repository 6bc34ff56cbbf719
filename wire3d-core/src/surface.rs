//! The display surface frames are composed onto
use crate::error::Result;

/// Color pair used for glyphs written without an explicit color
pub const DEFAULT_COLOR: u8 = 0;
/// Color pair for ordinary wireframe edges
pub const BASE_COLOR: u8 = 1;
/// Color pair for the currently highlighted mesh
pub const HIGHLIGHT_COLOR: u8 = 2;
/// Color pair for vertex marks and their labels
pub const VERTEX_COLOR: u8 = 3;

/// A character grid the compositor plots into
///
/// Implementations own clipping: plots outside the grid must be rejected or
/// clamped, never cause a panic.
pub trait Surface {
    fn clear(&mut self);

    fn plot(&mut self, x: i32, y: i32, glyph: char, color: Option<u8>);

    /// Current size as `(width, height)` in cells
    fn dimensions(&self) -> (u16, u16);

    fn present(&mut self) -> Result<()>;
}

/// One character cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub color: u8,
}

impl Cell {
    pub const BLANK: Cell = Cell {
        glyph: ' ',
        color: DEFAULT_COLOR,
    };
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

/// In-memory character grid
///
/// Out-of-bounds plots are dropped and counted in [`CharBuffer::rejected`].
#[derive(Debug, Clone)]
pub struct CharBuffer {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    rejected: usize,
    presented: usize,
}

impl CharBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; width * height],
            rejected: 0,
            presented: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Resize the grid, blanking it if the size changed
    pub fn resize(&mut self, width: usize, height: usize) {
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.cells = vec![Cell::BLANK; width * height];
        }
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Rows of cells, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks(0) panics, and a zero-width grid has no rows anyway
        self.cells.chunks(self.width.max(1)).take(self.height)
    }

    /// Coordinates of every non-blank cell
    pub fn occupied(&self) -> Vec<(i32, i32)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.glyph != ' ')
            .map(|(idx, _)| ((idx % self.width) as i32, (idx / self.width) as i32))
            .collect()
    }

    /// Plots dropped since the last clear
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    /// Number of frames presented
    pub fn presented(&self) -> usize {
        self.presented
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }
}

impl Surface for CharBuffer {
    fn clear(&mut self) {
        self.cells.fill(Cell::BLANK);
        self.rejected = 0;
    }

    fn plot(&mut self, x: i32, y: i32, glyph: char, color: Option<u8>) {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = Cell {
                    glyph,
                    color: color.unwrap_or(DEFAULT_COLOR),
                }
            }
            None => self.rejected += 1,
        }
    }

    fn dimensions(&self) -> (u16, u16) {
        (
            self.width.min(u16::MAX as usize) as u16,
            self.height.min(u16::MAX as usize) as u16,
        )
    }

    fn present(&mut self) -> Result<()> {
        self.presented += 1;
        Ok(())
    }
}
