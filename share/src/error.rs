use std::path::PathBuf;

use thiserror::Error;

use crate::{Destination, FailureKind};

/// Errors that can occur while dispatching a share request.
#[derive(Error, Debug)]
pub enum ShareError {
    /// No installed app can handle the share and browser fallback was not requested.
    #[error("{0} is not installed")]
    AppNotInstalled(Destination),

    /// The host passed arguments of the wrong shape.
    #[error("Invalid arguments: {0}")]
    Argument(String),

    /// The host asked for a method this plugin does not implement.
    #[error("Unsupported method: {0}")]
    UnsupportedMethod(String),

    /// A media path does not exist or could not be shared with other apps.
    #[error("Cannot share media {}: {reason}", path.display())]
    MediaResolution {
        /// The path the caller supplied.
        path: PathBuf,
        /// Why it could not be resolved.
        reason: String,
    },

    /// A media file could not be read as an image.
    #[error("Invalid image path {}: {reason}", path.display())]
    Image {
        /// The path the caller supplied.
        path: PathBuf,
        /// Decoder message.
        reason: String,
    },

    /// A media file was read but could not be encoded for the pasteboard.
    #[error("Unable to get image data: {0}")]
    ImageData(String),

    /// A constructed URL failed to parse.
    #[error("Invalid URL {url}: {source}")]
    Url {
        /// The string that failed to parse.
        url: String,
        /// Parser error.
        #[source]
        source: url::ParseError,
    },

    /// The platform refused to launch an activity or URL.
    #[error("Launch failed: {0}")]
    Launch(String),
}

impl ShareError {
    /// The wire code reported to the host for this error.
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::AppNotInstalled(_) => FailureKind::AppNotInstalled,
            Self::Argument(_) => FailureKind::ArgumentError,
            Self::UnsupportedMethod(_) => FailureKind::UnsupportedMethod,
            Self::MediaResolution { .. } => FailureKind::MediaResolutionError,
            Self::Image { .. } => FailureKind::ImageError,
            Self::ImageData(_) => FailureKind::ImageDataError,
            Self::Url { .. } => FailureKind::UrlError,
            Self::Launch(_) => FailureKind::LaunchError,
        }
    }

    pub(crate) fn media(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::MediaResolution {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = ShareError> = std::result::Result<T, E>;
