//! iOS pasteboard implementation using `UIPasteboard`.

use objc2::rc::autoreleasepool;
use objc2::runtime::AnyObject;
use objc2::{class, msg_send};
use objc2_foundation::{NSData, NSString};

use crate::{ClipboardError, PasteImage, Pasteboard, Result};

const PNG_TYPE: &str = "public.png";

/// `UIPasteboard.generalPasteboard`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemPasteboard;

fn general_pasteboard() -> Result<*mut AnyObject> {
    let board: *mut AnyObject = unsafe { msg_send![class!(UIPasteboard), generalPasteboard] };
    if board.is_null() {
        return Err(ClipboardError::PlatformError(
            "generalPasteboard returned nil".into(),
        ));
    }
    Ok(board)
}

impl Pasteboard for SystemPasteboard {
    fn set_image(&self, image: &PasteImage) -> Result<()> {
        autoreleasepool(|_| {
            let board = general_pasteboard()?;
            let data = NSData::with_bytes(&image.png);
            let kind = NSString::from_str(PNG_TYPE);
            let _: () = unsafe { msg_send![board, setData: &*data, forPasteboardType: &*kind] };
            log::debug!("placed {} byte PNG on the pasteboard", image.png.len());
            Ok(())
        })
    }
}
