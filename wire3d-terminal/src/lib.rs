//! Terminal front end: config, logging, crossterm surface and input
use crossterm::{cursor, execute, terminal};
use std::io::stdout;
use std::thread;
use wire3d_core::{Animation, AnimationConfig, KeyInbox, Mesh, StopToken};

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod renderer;

pub use error::AppError;
pub use renderer::TerminalSurface;

/// Runs an animation full-screen until it ends or a key is pressed
pub struct TerminalApp {
    animation: Animation,
}

impl TerminalApp {
    pub fn new(meshes: Vec<Mesh>, config: AnimationConfig) -> Result<Self, AppError> {
        Ok(Self {
            animation: Animation::new(meshes, config)?,
        })
    }

    /// Set up the terminal, animate, and restore it; returns frames drawn
    pub fn run(self) -> Result<u64, AppError> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(self) -> Result<u64, AppError> {
        let stop = StopToken::new();
        let inbox = KeyInbox::new();
        let mut animation = self.animation;

        let render = {
            let stop = stop.clone();
            let inbox = inbox.clone();
            thread::spawn(move || -> wire3d_core::Result<u64> {
                let mut surface = TerminalSurface::new(stdout())?;
                surface.set_status("wire3d | press any key to quit");
                animation.run(&mut surface, &stop, &inbox)
            })
        };

        let polled = input::wait_for_key(&render, &stop, &inbox);
        if polled.is_err() {
            // Make sure the render thread ends before reporting
            stop.cancel();
        }

        let frames = render.join().map_err(|_| AppError::RenderThread)??;
        polled?;
        Ok(frames)
    }
}
