//! wire3d core library - wireframe transform, projection and rasterization
//!
//! This library holds everything that does not touch a real terminal: the
//! vector/matrix math, procedural meshes, the perspective projector, the line
//! rasterizer and the frame compositor that drives them against any
//! [`Surface`].

pub mod animation;
pub mod control;
pub mod error;
pub mod geometry;
pub mod math;
pub mod projection;
pub mod raster;
pub mod surface;
pub mod transform;

// Re-export commonly used types
pub use animation::{Animation, AnimationConfig, AnimationState, FrameStats};
pub use control::{KeyInbox, StopToken};
pub use error::{RenderError, Result};
pub use geometry::{Edge, Mesh, Shape};
pub use math::{Axis, Mat3, ScreenPoint, Vec3};
pub use projection::Projector;
pub use raster::{draw_line, LinePoints};
pub use surface::{Cell, CharBuffer, Surface};
pub use transform::{apply_matrix_to_mesh, Spin, Transform};
