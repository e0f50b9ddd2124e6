use serde::{Deserialize, Serialize};

use crate::ShareError;

/// Where a successful share was handed off to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LaunchTarget {
    /// The destination's installed app.
    #[serde(rename = "native-app")]
    NativeApp,
    /// The system browser, at the destination's web share page.
    #[serde(rename = "browser")]
    Browser,
}

/// Failure codes reported to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FailureKind {
    /// No handler and no (or declined) browser fallback.
    AppNotInstalled,
    /// Malformed arguments from the host.
    ArgumentError,
    /// Unknown method name.
    UnsupportedMethod,
    /// A media path was unreadable as an image.
    ImageError,
    /// A media file could not be encoded.
    ImageDataError,
    /// A constructed URL failed to parse.
    UrlError,
    /// A media path could not be resolved to a shareable handle.
    MediaResolutionError,
    /// The platform refused a launch it had resolved.
    LaunchError,
}

impl FailureKind {
    /// The wire code, e.g. `APP_NOT_INSTALLED`.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::AppNotInstalled => "APP_NOT_INSTALLED",
            Self::ArgumentError => "ARGUMENT_ERROR",
            Self::UnsupportedMethod => "UNSUPPORTED_METHOD",
            Self::ImageError => "IMAGE_ERROR",
            Self::ImageDataError => "IMAGE_DATA_ERROR",
            Self::UrlError => "URL_ERROR",
            Self::MediaResolutionError => "MEDIA_RESOLUTION_ERROR",
            Self::LaunchError => "LAUNCH_ERROR",
        }
    }
}

/// The single result of a share request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ShareOutcome {
    /// The share was handed to an app or the browser.
    Launched {
        /// Which one.
        target: LaunchTarget,
    },
    /// The share could not be started.
    Failed {
        /// Failure code.
        #[serde(rename = "code")]
        kind: FailureKind,
        /// Human readable detail.
        message: String,
    },
}

impl ShareOutcome {
    /// Whether the request launched something.
    #[must_use]
    pub const fn is_launched(&self) -> bool {
        matches!(self, Self::Launched { .. })
    }

    /// The failure code, if the request failed.
    #[must_use]
    pub const fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Self::Launched { .. } => None,
            Self::Failed { kind, .. } => Some(*kind),
        }
    }
}

impl From<ShareError> for ShareOutcome {
    fn from(error: ShareError) -> Self {
        Self::Failed {
            kind: error.kind(),
            message: error.to_string(),
        }
    }
}

impl From<Result<LaunchTarget, ShareError>> for ShareOutcome {
    fn from(result: Result<LaunchTarget, ShareError>) -> Self {
        match result {
            Ok(target) => Self::Launched { target },
            Err(error) => error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Destination;
    use serde_json::json;

    #[test]
    fn launched_serializes_with_target() {
        let outcome = ShareOutcome::Launched {
            target: LaunchTarget::NativeApp,
        };
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({ "status": "launched", "target": "native-app" })
        );
    }

    #[test]
    fn failure_uses_wire_code() {
        let outcome = ShareOutcome::from(ShareError::AppNotInstalled(Destination::Reddit));
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({
                "status": "failed",
                "code": "APP_NOT_INSTALLED",
                "message": "Reddit is not installed",
            })
        );
    }

    #[test]
    fn serde_codes_match_code_strings() {
        let kinds = [
            FailureKind::AppNotInstalled,
            FailureKind::ArgumentError,
            FailureKind::UnsupportedMethod,
            FailureKind::ImageError,
            FailureKind::ImageDataError,
            FailureKind::UrlError,
            FailureKind::MediaResolutionError,
            FailureKind::LaunchError,
        ];
        for kind in kinds {
            assert_eq!(serde_json::to_value(kind).unwrap(), json!(kind.code()));
        }
    }
}
