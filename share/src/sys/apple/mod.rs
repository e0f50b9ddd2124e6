//! iOS backend: app URL schemes through `UIApplication`.
//!
//! `UIApplication` is main-thread only; call the dispatcher from the main
//! thread.

use std::path::Path;

use block2::RcBlock;
use objc2::rc::autoreleasepool;
use objc2::runtime::{AnyObject, Bool};
use objc2::{class, msg_send};
use objc2_foundation::{NSDictionary, NSString, NSURL};
use url::Url;

use crate::platform::file_uri;
use crate::{MediaHandle, MediaTransport, Platform, Result, ShareError, SharePayload, links};

/// Share backend for iOS.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApplePlatform;

impl ApplePlatform {
    /// Create the backend.
    pub const fn new() -> Self {
        Self
    }
}

fn shared_application() -> Result<*mut AnyObject> {
    let app: *mut AnyObject = unsafe { msg_send![class!(UIApplication), sharedApplication] };
    if app.is_null() {
        return Err(ShareError::Launch("sharedApplication returned nil".into()));
    }
    Ok(app)
}

fn ns_url(url: &Url) -> Result<objc2::rc::Retained<NSURL>> {
    let text = NSString::from_str(url.as_str());
    NSURL::URLWithString(&text).ok_or_else(|| ShareError::Launch(format!("NSURL rejected {url}")))
}

fn can_open(url: &Url) -> Result<bool> {
    autoreleasepool(|_| {
        let app = shared_application()?;
        let url = ns_url(url)?;
        let can: bool = unsafe { msg_send![app, canOpenURL: &*url] };
        Ok(can)
    })
}

/// Ask the OS to open `url`. The completion only reports; nothing waits on it.
fn open(url: &Url) -> Result<()> {
    autoreleasepool(|_| {
        let app = shared_application()?;
        let ns = ns_url(url)?;
        let options = NSDictionary::<AnyObject, AnyObject>::new();
        let target = url.to_string();
        let completion = RcBlock::new(move |success: Bool| {
            if success.as_bool() {
                log::debug!("opened {target}");
            } else {
                log::warn!("system declined to open {target}");
            }
        });
        let _: () = unsafe {
            msg_send![app, openURL: &*ns, options: &*options, completionHandler: &*completion]
        };
        Ok(())
    })
}

fn scheme_url(payload: &SharePayload<'_>) -> Result<Url> {
    links::app_scheme_url(payload.profile, payload.content, !payload.media.is_empty())
}

impl Platform for ApplePlatform {
    fn media_transport(&self) -> MediaTransport {
        MediaTransport::Pasteboard
    }

    fn grant_media(&self, path: &Path) -> Result<MediaHandle> {
        Ok(MediaHandle {
            path: path.to_path_buf(),
            uri: file_uri(path)?,
        })
    }

    fn has_handler(&self, payload: &SharePayload<'_>) -> Result<bool> {
        can_open(&scheme_url(payload)?)
    }

    fn launch_app(&self, payload: &SharePayload<'_>) -> Result<()> {
        open(&scheme_url(payload)?)
    }

    fn open_browser(&self, url: &Url) -> Result<()> {
        open(url)
    }
}
