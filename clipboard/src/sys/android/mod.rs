//! Android pasteboard.
//!
//! `ClipData` only carries images as content URIs, and Android shares attach
//! media to the intent instead, so image handoff is unsupported here.

use crate::{ClipboardError, PasteImage, Pasteboard, Result};

/// The Android primary clip.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemPasteboard;

impl Pasteboard for SystemPasteboard {
    fn set_image(&self, image: &PasteImage) -> Result<()> {
        log::warn!(
            "dropping {} byte image: the Android clipboard holds no raw images",
            image.png.len()
        );
        Err(ClipboardError::NotSupported(
            "raw images on the Android clipboard".into(),
        ))
    }
}
