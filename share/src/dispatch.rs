//! The share dispatcher: one table-driven path for every destination.

use std::path::{Path, PathBuf};

use socialkit_clipboard::{ClipboardError, PasteImage, Pasteboard};

use crate::links::web_fallback_url;
use crate::{
    LaunchTarget, MediaHandle, MediaKind, MediaTransport, Platform, Result, ShareError,
    ShareOutcome, SharePayload, ShareRequest,
};

/// Turns share requests into launches on a [`Platform`].
///
/// Holds no mutable state; concurrent calls are independent.
#[derive(Debug, Clone)]
pub struct Dispatcher<P, B> {
    platform: P,
    pasteboard: B,
}

impl<P, B> Dispatcher<P, B> {
    /// Create a dispatcher over a platform and the pasteboard used for image handoff.
    pub const fn new(platform: P, pasteboard: B) -> Self {
        Self {
            platform,
            pasteboard,
        }
    }

    /// The underlying platform.
    pub const fn platform(&self) -> &P {
        &self.platform
    }

    /// The pasteboard used for image handoff.
    pub const fn pasteboard(&self) -> &B {
        &self.pasteboard
    }
}

impl<P: Platform, B: Pasteboard> Dispatcher<P, B> {
    /// Dispatch a request and fold the result into an outcome.
    ///
    /// Success is reported as soon as the OS accepts the launch; the target
    /// app's own completion is never awaited.
    pub fn dispatch(&self, request: &ShareRequest) -> ShareOutcome {
        let result = self.try_dispatch(request);
        if let Err(e) = &result {
            log::debug!(
                "share to {} failed ({}): {e}",
                request.destination,
                e.kind().code()
            );
        }
        result.into()
    }

    /// Dispatch a request, keeping the detailed error.
    ///
    /// # Errors
    /// - [`ShareError::MediaResolution`] if a media path is missing or cannot be shared.
    /// - [`ShareError::Image`] / [`ShareError::ImageData`] if pasteboard handoff
    ///   is needed and the first media file is not a usable image.
    /// - [`ShareError::AppNotInstalled`] if no app handles the share and the
    ///   browser fallback was not requested.
    /// - [`ShareError::Url`] or [`ShareError::Launch`] from the launch itself.
    pub fn try_dispatch(&self, request: &ShareRequest) -> Result<LaunchTarget> {
        let profile = request.destination.profile();
        let media = self.resolve_media(&request.media)?;
        let handoff = self.prepare_handoff(&request.media)?;

        let payload = SharePayload {
            profile,
            content: request.content.as_deref(),
            media: &media,
            kind: MediaKind::infer(&request.media),
        };
        log::debug!(
            "sharing to {} as {} with {} media file(s)",
            request.destination,
            payload.kind.mime_type(),
            media.len()
        );

        if self.platform.has_handler(&payload)? {
            self.launch_native(&payload, handoff.as_ref())?;
            log::info!("launched {} app", request.destination);
            return Ok(LaunchTarget::NativeApp);
        }

        if !request.open_browser_on_failure {
            return Err(ShareError::AppNotInstalled(request.destination));
        }

        let url = web_fallback_url(profile, payload.content, media.first())?;
        self.platform.open_browser(&url)?;
        log::info!("{} not installed, opened {url}", request.destination);
        Ok(LaunchTarget::Browser)
    }

    fn resolve_media(&self, paths: &[PathBuf]) -> Result<Vec<MediaHandle>> {
        if let Some(missing) = paths.iter().find(|path| !path.is_file()) {
            return Err(ShareError::media(missing, "file does not exist"));
        }
        paths
            .iter()
            .map(|path| self.platform.grant_media(path))
            .collect()
    }

    fn prepare_handoff(&self, paths: &[PathBuf]) -> Result<Option<PasteImage>> {
        if self.platform.media_transport() != MediaTransport::Pasteboard {
            return Ok(None);
        }
        let Some(first) = paths.first() else {
            return Ok(None);
        };
        if paths.len() > 1 {
            log::warn!(
                "pasteboard handoff carries one image, dropping {} more",
                paths.len() - 1
            );
        }
        load_image(first).map(Some)
    }

    fn launch_native(
        &self,
        payload: &SharePayload<'_>,
        handoff: Option<&PasteImage>,
    ) -> Result<()> {
        if let Some(image) = handoff {
            if let Err(e) = self.pasteboard.set_image(image) {
                log::warn!("could not place image on the pasteboard: {e}");
            }
        }
        self.platform.launch_app(payload)
    }
}

fn load_image(path: &Path) -> Result<PasteImage> {
    PasteImage::open(path).map_err(|e| match e {
        ClipboardError::Encode(reason) => ShareError::ImageData(reason),
        other => ShareError::Image {
            path: path.to_path_buf(),
            reason: other.to_string(),
        },
    })
}
