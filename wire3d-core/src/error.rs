//! Error types shared by the rendering pipeline
use thiserror::Error;

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, RenderError>;

/// Errors that can occur while building or rendering a frame
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// Rejected construction-time argument (unknown axis, unknown shape, ...)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Edge ({a}, {b}) references a vertex outside 0..{vertex_count}")]
    InvalidEdge {
        a: usize,
        b: usize,
        vertex_count: usize,
    },

    /// Perspective divide with `focal_length + depth == 0`
    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    /// Coordinates grew past what can be projected or stored
    #[error("Numeric overflow: {0}")]
    NumericOverflow(String),

    #[error("Surface error: {0}")]
    Surface(String),
}

impl From<std::io::Error> for RenderError {
    fn from(err: std::io::Error) -> Self {
        RenderError::Surface(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = RenderError::InvalidEdge {
            a: 0,
            b: 9,
            vertex_count: 8,
        };
        assert_eq!(
            err.to_string(),
            "Edge (0, 9) references a vertex outside 0..8"
        );

        let err = RenderError::InvalidArgument("unknown axis 'w'".to_string());
        assert!(err.to_string().contains("unknown axis"));
    }

    #[test]
    fn test_io_error_maps_to_surface() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: RenderError = io.into();
        assert!(matches!(err, RenderError::Surface(msg) if msg.contains("pipe closed")));
    }
}
