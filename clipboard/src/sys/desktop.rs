use arboard::Clipboard;

use crate::{ClipboardError, PasteImage, Pasteboard, Result};

/// The desktop system clipboard.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemPasteboard;

/// Borrow the decoded pixels in arboard's layout.
fn image_data(image: &PasteImage) -> arboard::ImageData<'_> {
    arboard::ImageData {
        width: image.image.width,
        height: image.image.height,
        bytes: image.image.bytes.as_ref().into(),
    }
}

impl Pasteboard for SystemPasteboard {
    fn set_image(&self, image: &PasteImage) -> Result<()> {
        let mut clipboard =
            Clipboard::new().map_err(|e| ClipboardError::PlatformError(e.to_string()))?;
        clipboard
            .set_image(image_data(image))
            .map_err(|e| ClipboardError::PlatformError(e.to_string()))?;
        log::debug!(
            "placed {}x{} image on the clipboard",
            image.image.width,
            image.image.height
        );
        Ok(())
    }
}
