//! Crossterm-backed display surface
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal, QueueableCommand,
};
use std::io::{self, Write};
use wire3d_core::surface::{BASE_COLOR, HIGHLIGHT_COLOR, VERTEX_COLOR};
use wire3d_core::{CharBuffer, Surface};

/// Map a color pair to a terminal color
pub fn pair_color(pair: u8) -> Color {
    match pair {
        BASE_COLOR => Color::White,
        HIGHLIGHT_COLOR => Color::Cyan,
        VERTEX_COLOR => Color::Yellow,
        _ => Color::Reset,
    }
}

/// Surface that buffers a frame in memory and writes it out on `present`
pub struct TerminalSurface<W: Write> {
    buffer: CharBuffer,
    writer: W,
    /// Re-query the terminal size on every clear
    track_terminal: bool,
    status: Option<String>,
}

impl<W: Write> TerminalSurface<W> {
    /// Surface sized to the current terminal
    pub fn new(writer: W) -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        let mut surface = Self::with_size(writer, width as usize, height as usize);
        surface.track_terminal = true;
        Ok(surface)
    }

    /// Surface of a fixed size, independent of any terminal
    pub fn with_size(writer: W, width: usize, height: usize) -> Self {
        Self {
            buffer: CharBuffer::new(width, height),
            writer,
            track_terminal: false,
            status: None,
        }
    }

    /// Text drawn over the top row of every frame
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
    }

    pub fn buffer(&self) -> &CharBuffer {
        &self.buffer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn draw(&mut self) -> io::Result<()> {
        let mut current = None;

        for (y, row) in self.buffer.rows().enumerate() {
            self.writer.queue(cursor::MoveTo(0, y as u16))?;
            for cell in row {
                // Only emit color changes
                if current != Some(cell.color) {
                    self.writer.queue(SetForegroundColor(pair_color(cell.color)))?;
                    current = Some(cell.color);
                }
                self.writer.queue(Print(cell.glyph))?;
            }
        }

        if let Some(status) = &self.status {
            let status: String = status.chars().take(self.buffer.width()).collect();
            self.writer
                .queue(cursor::MoveTo(0, 0))?
                .queue(SetForegroundColor(Color::Yellow))?
                .queue(Print(status))?;
        }

        self.writer.queue(ResetColor)?;
        self.writer.flush()
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn clear(&mut self) {
        if self.track_terminal {
            match terminal::size() {
                Ok((width, height)) => self.buffer.resize(width as usize, height as usize),
                Err(e) => log::debug!("Keeping previous size, terminal size failed: {}", e),
            }
        }
        self.buffer.clear();
    }

    fn plot(&mut self, x: i32, y: i32, glyph: char, color: Option<u8>) {
        self.buffer.plot(x, y, glyph, color);
    }

    fn dimensions(&self) -> (u16, u16) {
        self.buffer.dimensions()
    }

    fn present(&mut self) -> wire3d_core::Result<()> {
        self.draw()?;
        Ok(())
    }
}
