//! The seam between the dispatcher and an operating system.

use std::path::{Path, PathBuf};

use url::Url;

use crate::{DestinationProfile, MediaKind, Result};

/// A local file made readable by other apps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaHandle {
    /// The path the caller supplied.
    pub path: PathBuf,
    /// Platform URI for the file (`content://` on Android, `file://` elsewhere).
    pub uri: String,
}

/// How media reaches the target app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaTransport {
    /// Media handles travel inside the share intent.
    Attach,
    /// App schemes cannot carry files; the first image is handed over on the
    /// pasteboard and the user pastes it.
    Pasteboard,
}

/// Everything the launch step needs.
#[derive(Debug, Clone)]
pub struct SharePayload<'a> {
    /// Static profile of the destination.
    pub profile: &'static DestinationProfile,
    /// Text content, if any.
    pub content: Option<&'a str>,
    /// Resolved media, in request order.
    pub media: &'a [MediaHandle],
    /// MIME hint for the payload.
    pub kind: MediaKind,
}

/// OS facilities the dispatcher relies on.
///
/// Implementations must not retry: every method is a single attempt.
pub trait Platform {
    /// How media is conveyed on this platform.
    fn media_transport(&self) -> MediaTransport;

    /// Grant other apps read access to `path` and return its handle.
    ///
    /// The file is known to exist when this is called.
    ///
    /// # Errors
    /// Returns [`crate::ShareError::MediaResolution`] if the file cannot be shared.
    fn grant_media(&self, path: &Path) -> Result<MediaHandle>;

    /// Whether an installed app can take this payload.
    ///
    /// # Errors
    /// Returns an error if the payload cannot be expressed on this platform.
    fn has_handler(&self, payload: &SharePayload<'_>) -> Result<bool>;

    /// Hand the payload to the installed app without waiting for it.
    ///
    /// # Errors
    /// Returns [`crate::ShareError::Launch`] if the OS refuses the launch.
    fn launch_app(&self, payload: &SharePayload<'_>) -> Result<()>;

    /// Open `url` in the system browser.
    ///
    /// # Errors
    /// Returns [`crate::ShareError::Launch`] if no browser accepts the URL.
    fn open_browser(&self, url: &Url) -> Result<()>;
}

impl<P: Platform + ?Sized> Platform for &P {
    fn media_transport(&self) -> MediaTransport {
        (**self).media_transport()
    }

    fn grant_media(&self, path: &Path) -> Result<MediaHandle> {
        (**self).grant_media(path)
    }

    fn has_handler(&self, payload: &SharePayload<'_>) -> Result<bool> {
        (**self).has_handler(payload)
    }

    fn launch_app(&self, payload: &SharePayload<'_>) -> Result<()> {
        (**self).launch_app(payload)
    }

    fn open_browser(&self, url: &Url) -> Result<()> {
        (**self).open_browser(url)
    }
}

/// `file://` URL for a path, used where no permission grant exists.
#[cfg(not(target_os = "android"))]
pub(crate) fn file_uri(path: &Path) -> Result<String> {
    let absolute = path
        .canonicalize()
        .map_err(|e| crate::ShareError::media(path, e))?;
    Url::from_file_path(&absolute)
        .map(String::from)
        .map_err(|()| crate::ShareError::media(path, "not an absolute path"))
}
