//! Share text and media to social apps.
//!
//! Every destination (Facebook, Twitter, LinkedIn, WhatsApp, Reddit,
//! Telegram, Instagram) goes through the same path: resolve the media, ask
//! the [`Platform`] whether the destination's app can take the payload, launch
//! it, and otherwise fall back to the destination's web share page when the
//! caller asked for it.
//!
//! ```no_run
//! use socialkit_share::{Destination, ShareRequest};
//!
//! let outcome = socialkit_share::share(
//!     &ShareRequest::new(Destination::Twitter)
//!         .content("hello world")
//!         .open_browser(true),
//! );
//! println!("{outcome:?}");
//! ```
//!
//! Hosts that speak method calls (`shareToTwitter` with an argument map) use
//! [`handle_method_call`] or [`handle_json`].

#![warn(missing_docs)]

mod bridge;
mod destination;
mod dispatch;
mod error;
pub mod links;
mod outcome;
mod platform;
mod request;
/// Platform-specific implementations.
pub mod sys;

pub use bridge::{MethodCall, encode_outcome, handle_json, handle_method_call};
pub use destination::{Destination, DestinationProfile};
pub use dispatch::Dispatcher;
pub use error::{Result, ShareError};
pub use outcome::{FailureKind, LaunchTarget, ShareOutcome};
pub use platform::{MediaHandle, MediaTransport, Platform, SharePayload};
pub use request::{MediaKind, ShareRequest};
pub use socialkit_clipboard::{PasteImage, Pasteboard, SystemPasteboard};
pub use sys::SystemPlatform;

#[cfg(not(target_os = "android"))]
impl Dispatcher<SystemPlatform, SystemPasteboard> {
    /// Dispatcher over the current OS and its system pasteboard.
    #[must_use]
    pub fn system() -> Self {
        Self::new(SystemPlatform::default(), SystemPasteboard)
    }
}

/// Share with the system dispatcher.
#[cfg(not(target_os = "android"))]
pub fn share(request: &ShareRequest) -> ShareOutcome {
    Dispatcher::system().dispatch(request)
}

/// Share from an Android `Context`.
///
/// # Errors
/// Fails only if the context cannot be bound; dispatch failures are reported
/// in the returned outcome.
#[cfg(target_os = "android")]
pub fn share_with_context(
    env: &mut jni::JNIEnv,
    context: &jni::objects::JObject,
    request: &ShareRequest,
) -> Result<ShareOutcome> {
    let platform = SystemPlatform::from_context(env, context)?;
    Ok(Dispatcher::new(platform, SystemPasteboard).dispatch(request))
}
