//! Frame composition and the fixed-rate animation loop
use std::thread;
use std::time::{Duration, Instant};

use log::{debug, info, warn};

use crate::control::{KeyInbox, StopToken};
use crate::error::{RenderError, Result};
use crate::geometry::Mesh;
use crate::math::{Axis, Mat3, ScreenPoint};
use crate::projection::{Projector, DEFAULT_FOCAL_LENGTH};
use crate::raster::{draw_line, EDGE_GLYPH};
use crate::surface::{Surface, BASE_COLOR, HIGHLIGHT_COLOR, VERTEX_COLOR};
use crate::transform::{checked_apply, Spin};

/// Glyph marking a projected vertex
pub const VERTEX_GLYPH: char = 'o';

/// Vertices projecting further than this many viewports from the middle are
/// skipped
pub const VIEWPORT_MARGIN: i32 = 4;

/// Timing and motion parameters of an animation
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationConfig {
    /// Delay between ticks
    pub tick: Duration,
    /// Total running time before the loop stops on its own
    pub duration: Duration,
    /// How long each mesh keeps the highlight color
    pub highlight_period: Duration,
    pub focal_length: f32,
    /// Rotation steps applied in order every tick
    pub spins: Vec<Spin>,
}

impl AnimationConfig {
    /// Ticks until the loop stops: `duration / tick`
    pub fn total_ticks(&self) -> u64 {
        if self.tick.is_zero() {
            return 0;
        }
        (self.duration.as_nanos() / self.tick.as_nanos()) as u64
    }

    /// Ticks between highlight advances, at least one
    pub fn highlight_every(&self) -> u64 {
        if self.tick.is_zero() {
            return 1;
        }
        ((self.highlight_period.as_nanos() / self.tick.as_nanos()) as u64).max(1)
    }

    pub fn validate(&self) -> Result<()> {
        if self.tick.is_zero() {
            return Err(RenderError::InvalidArgument(
                "tick delay must be greater than zero".to_string(),
            ));
        }
        if !self.focal_length.is_finite() || self.focal_length <= 0.0 {
            return Err(RenderError::InvalidArgument(format!(
                "focal length must be positive, got {}",
                self.focal_length
            )));
        }
        if let Some(spin) = self.spins.iter().find(|s| !s.degrees.is_finite()) {
            return Err(RenderError::InvalidArgument(format!(
                "spin about {} has non-finite angle {}",
                spin.axis, spin.degrees
            )));
        }
        Ok(())
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(50),
            duration: Duration::from_secs(10),
            highlight_period: Duration::from_secs(2),
            focal_length: DEFAULT_FOCAL_LENGTH,
            spins: vec![Spin::new(Axis::Y, 3.0), Spin::new(Axis::X, -2.0)],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    Running,
    Stopped,
}

/// What happened while composing one frame
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameStats {
    pub points_plotted: usize,
    pub vertices_skipped: usize,
    pub edges_skipped: usize,
    /// Meshes whose transform was rejected this tick
    pub meshes_frozen: usize,
}

/// Owns the meshes and drives them through transform, projection and
/// rasterization once per tick
pub struct Animation {
    config: AnimationConfig,
    projector: Projector,
    step: Vec<Mat3>,
    meshes: Vec<Mesh>,
    frame: u64,
    active: usize,
    state: AnimationState,
    /// Set once a frame has had to skip vertices
    skip_warned: bool,
}

impl Animation {
    /// Take ownership of `meshes`, tagging each with its position
    pub fn new(meshes: Vec<Mesh>, config: AnimationConfig) -> Result<Self> {
        config.validate()?;

        let meshes = meshes
            .into_iter()
            .enumerate()
            .map(|(i, mesh)| mesh.with_tag(i))
            .collect();

        Ok(Self {
            projector: Projector::new(config.focal_length),
            step: config.spins.iter().map(Spin::matrix).collect(),
            config,
            meshes,
            frame: 0,
            active: 0,
            state: AnimationState::Running,
            skip_warned: false,
        })
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// Ticks completed so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    /// Tag of the mesh currently drawn in the highlight color
    pub fn active_mesh(&self) -> usize {
        self.active
    }

    /// Advance every mesh by one tick of rotation
    ///
    /// A mesh whose result would overflow keeps its previous state. Returns
    /// the number of meshes frozen this way.
    pub fn advance(&mut self) -> usize {
        let mut frozen = 0;
        let step = &self.step;

        self.meshes = self
            .meshes
            .iter()
            .map(|mesh| {
                let next = step
                    .iter()
                    .try_fold(mesh.clone(), |acc, m| checked_apply(&acc, m));
                match next {
                    Ok(next) => next,
                    Err(e) => {
                        warn!("Keeping mesh {} in place: {}", mesh.tag(), e);
                        frozen += 1;
                        mesh.clone()
                    }
                }
            })
            .collect();

        frozen
    }

    fn advance_highlight(&mut self) {
        if !self.meshes.is_empty() {
            self.active = (self.active + 1) % self.meshes.len();
        }
    }

    fn color_for(&self, mesh: &Mesh) -> u8 {
        if mesh.tag() == self.active {
            HIGHLIGHT_COLOR
        } else {
            BASE_COLOR
        }
    }

    /// Project and draw every mesh onto `surface` without touching state
    pub fn compose<S: Surface + ?Sized>(&self, surface: &mut S) -> FrameStats {
        let (width, height) = surface.dimensions();
        let offset = ScreenPoint::new(i32::from(width) / 2, i32::from(height) / 2);
        let extent = i32::from(width.max(height)).max(1) * VIEWPORT_MARGIN;
        let mut stats = FrameStats::default();

        for mesh in &self.meshes {
            let projected: Vec<Option<ScreenPoint>> = mesh
                .placed_vertices()
                .enumerate()
                .map(|(i, vertex)| match self.projector.project_within(&vertex, offset, extent) {
                    Ok(point) => Some(point),
                    Err(e) => {
                        debug!("Mesh {} vertex {} not projected: {}", mesh.tag(), i, e);
                        stats.vertices_skipped += 1;
                        None
                    }
                })
                .collect();

            let color = Some(self.color_for(mesh));
            for &[a, b] in mesh.edges() {
                match (projected[a], projected[b]) {
                    (Some(p0), Some(p1)) => {
                        stats.points_plotted += draw_line(surface, p0, p1, EDGE_GLYPH, color);
                    }
                    _ => stats.edges_skipped += 1,
                }
            }

            for (i, point) in projected.iter().enumerate() {
                if let Some(point) = point {
                    surface.plot(point.x, point.y, VERTEX_GLYPH, Some(VERTEX_COLOR));
                    for (k, digit) in i.to_string().chars().enumerate() {
                        surface.plot(point.x + k as i32, point.y - 1, digit, Some(VERTEX_COLOR));
                    }
                    stats.points_plotted += 1;
                }
            }
        }

        stats
    }

    /// Run one tick: clear, transform, rotate highlight, draw, present
    ///
    /// Stops the animation once the tick count reaches the configured total.
    /// Only a failing `present` is returned as an error; per-vertex failures
    /// are counted in the stats.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<FrameStats> {
        if self.state == AnimationState::Stopped {
            return Ok(FrameStats::default());
        }

        surface.clear();
        let frozen = self.advance();

        self.frame += 1;
        if self.frame % self.config.highlight_every() == 0 {
            self.advance_highlight();
        }

        let mut stats = self.compose(surface);
        stats.meshes_frozen = frozen;
        self.report_skips(&stats);
        surface.present()?;

        if self.frame >= self.config.total_ticks() {
            self.stop();
        }
        Ok(stats)
    }

    /// Warn about the first frame that skips vertices, then only debug-log
    fn report_skips(&mut self, stats: &FrameStats) {
        if stats.vertices_skipped == 0 {
            return;
        }
        if self.skip_warned {
            debug!(
                "Frame {}: skipped {} vertices and {} edges",
                self.frame, stats.vertices_skipped, stats.edges_skipped
            );
        } else {
            warn!(
                "Frame {}: skipped {} vertices and {} edges (further skips logged at debug)",
                self.frame, stats.vertices_skipped, stats.edges_skipped
            );
            self.skip_warned = true;
        }
    }

    /// Enter the stopped state and release the meshes
    pub fn stop(&mut self) {
        if self.state == AnimationState::Running {
            info!("Animation stopped after {} ticks", self.frame);
        }
        self.state = AnimationState::Stopped;
        self.meshes.clear();
    }

    /// Tick at the configured rate until the duration elapses or `stop` is
    /// cancelled; returns the number of ticks run
    pub fn run<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        stop: &StopToken,
        inbox: &KeyInbox,
    ) -> Result<u64> {
        info!(
            "Animating {} meshes for {} ticks of {:?}",
            self.meshes.len(),
            self.config.total_ticks(),
            self.config.tick
        );

        while self.state == AnimationState::Running {
            if let Some(key) = inbox.take() {
                debug!("Key {:?} received at frame {}", key, self.frame);
            }
            if stop.is_cancelled() || self.frame >= self.config.total_ticks() {
                self.stop();
                break;
            }

            let frame_start = Instant::now();
            if let Err(e) = self.tick(surface) {
                self.stop();
                return Err(e);
            }

            if self.state == AnimationState::Running {
                let elapsed = frame_start.elapsed();
                if elapsed < self.config.tick {
                    thread::sleep(self.config.tick - elapsed);
                }
            }
        }

        Ok(self.frame)
    }
}
