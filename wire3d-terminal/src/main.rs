//! wire3d - spinning wireframe meshes in the terminal
//!
//! Press any key to quit early; otherwise the animation ends after the
//! configured duration.

use clap::Parser;
use wire3d_terminal::cli::Cli;
use wire3d_terminal::config::AppConfig;
use wire3d_terminal::{logging, AppError, TerminalApp};

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = cli.apply(AppConfig::load_from(cli.config.as_deref())?);
    logging::init(&config.logging)?;

    // Reject bad shapes, axes and timings before touching the terminal
    let meshes = config.meshes()?;
    let animation = config.animation_config()?;
    log::info!(
        "Loaded {} meshes, {} spins, {:?} per tick",
        meshes.len(),
        animation.spins.len(),
        animation.tick
    );

    let frames = TerminalApp::new(meshes, animation)?.run()?;

    println!("Rendered {} frames", frames);
    Ok(())
}
