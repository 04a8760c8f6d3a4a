//! Error types for opening and presenting the drawing window.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while running a drawing session.
#[derive(Error, Debug)]
pub enum Error {
    /// The event loop could not be created or failed while running,
    /// usually because no display is available.
    #[cfg(feature = "winit")]
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    /// The window could not be created.
    #[cfg(feature = "winit")]
    #[error("window creation error: {0}")]
    Os(#[from] winit::error::OsError),

    /// The pixel buffer backing the window failed.
    #[cfg(feature = "winit")]
    #[error("surface error: {0}")]
    Buffer(#[from] softbuffer::SoftBufferError),

    /// A canvas cannot have a zero sized side.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_dimensions_display() {
        let err = Error::InvalidDimensions {
            width: 0,
            height: 800,
        };
        assert_eq!(err.to_string(), "invalid dimensions: 0x800");
    }
}
