use thiserror::Error;

/// Errors that can occur when using the pasteboard.
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// The source file could not be read as an image.
    #[error("Cannot decode image: {0}")]
    Decode(String),

    /// The image could not be encoded for the pasteboard.
    #[error("Cannot encode image: {0}")]
    Encode(String),

    /// An error occurred in the underlying platform implementation.
    #[error("Platform error: {0}")]
    PlatformError(String),

    /// The requested content type is not supported on this platform.
    #[error("Not supported: {0}")]
    NotSupported(String),
}

/// Result alias for pasteboard operations.
pub type Result<T, E = ClipboardError> = std::result::Result<T, E>;
