//! Desktop backend (macOS, Windows, Linux).
//!
//! Social apps on desktop do not register share handlers, so every request
//! goes to the web fallback or fails as not installed.

use std::path::Path;

use url::Url;

use crate::platform::file_uri;
use crate::{MediaHandle, MediaTransport, Platform, Result, ShareError, SharePayload};

/// Share backend for desktop operating systems.
#[derive(Debug, Clone, Copy, Default)]
pub struct DesktopPlatform;

impl Platform for DesktopPlatform {
    fn media_transport(&self) -> MediaTransport {
        MediaTransport::Attach
    }

    fn grant_media(&self, path: &Path) -> Result<MediaHandle> {
        Ok(MediaHandle {
            path: path.to_path_buf(),
            uri: file_uri(path)?,
        })
    }

    fn has_handler(&self, payload: &SharePayload<'_>) -> Result<bool> {
        log::debug!("no desktop handler for {}", payload.profile.destination);
        Ok(false)
    }

    fn launch_app(&self, payload: &SharePayload<'_>) -> Result<()> {
        Err(ShareError::Launch(format!(
            "{} has no desktop app",
            payload.profile.destination
        )))
    }

    fn open_browser(&self, url: &Url) -> Result<()> {
        webbrowser::open(url.as_str()).map_err(|e| ShareError::Launch(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grants_file_urls() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a b.png");
        std::fs::write(&path, b"x").unwrap();

        let handle = DesktopPlatform.grant_media(&path).unwrap();
        assert!(handle.uri.starts_with("file://"), "{}", handle.uri);
        assert!(handle.uri.ends_with("/a%20b.png"), "{}", handle.uri);
    }

    #[test]
    fn never_resolves_a_handler() {
        let payload = SharePayload {
            profile: crate::Destination::Facebook.profile(),
            content: Some("x"),
            media: &[],
            kind: crate::MediaKind::Text,
        };
        assert!(!DesktopPlatform.has_handler(&payload).unwrap());
    }
}
