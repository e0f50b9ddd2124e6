//! Pasteboard handoff.
//!
//! App URL schemes cannot carry files, so images are placed on the system
//! pasteboard for the user to paste inside the target app. The pasteboard is
//! passed around as a [`Pasteboard`] value rather than reached through globals.

#![warn(missing_docs)]

mod error;
/// Platform-specific implementations.
pub mod sys;

use std::borrow::Cow;
use std::io::Cursor;
use std::path::Path;

use image::ImageFormat;

pub use error::{ClipboardError, Result};
pub use sys::SystemPasteboard;

/// Image data containing width, height, and raw RGBA bytes.
#[derive(Debug, Clone)]
pub struct ImageData {
    /// Width of the image in pixels.
    pub width: usize,
    /// Height of the image in pixels.
    pub height: usize,
    /// Raw RGBA bytes of the image.
    pub bytes: Cow<'static, [u8]>,
}

/// An image ready for the pasteboard, kept both as pixels and as PNG.
#[derive(Debug, Clone)]
pub struct PasteImage {
    /// Decoded RGBA pixels.
    pub image: ImageData,
    /// PNG encoding of the same pixels.
    pub png: Vec<u8>,
}

impl PasteImage {
    /// Decode the image at `path` and encode it as PNG.
    ///
    /// # Errors
    /// Returns [`ClipboardError::Decode`] if the file is missing or not an
    /// image, and [`ClipboardError::Encode`] if PNG encoding fails.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let decoded =
            image::open(path.as_ref()).map_err(|e| ClipboardError::Decode(e.to_string()))?;

        let mut png = Vec::new();
        decoded
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .map_err(|e| ClipboardError::Encode(e.to_string()))?;

        let rgba = decoded.into_rgba8();
        Ok(Self {
            image: ImageData {
                width: rgba.width() as usize,
                height: rgba.height() as usize,
                bytes: Cow::Owned(rgba.into_raw()),
            },
            png,
        })
    }
}

/// A writable pasteboard.
pub trait Pasteboard {
    /// Replace the pasteboard contents with an image.
    ///
    /// # Errors
    /// Returns an error if the platform pasteboard rejects the write or
    /// cannot hold images.
    fn set_image(&self, image: &PasteImage) -> Result<()>;
}

impl<P: Pasteboard + ?Sized> Pasteboard for &P {
    fn set_image(&self, image: &PasteImage) -> Result<()> {
        (**self).set_image(image)
    }
}
