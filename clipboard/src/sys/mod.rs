//! Platform-specific pasteboard backends.

#[cfg(not(any(target_os = "android", target_os = "ios")))]
/// Desktop platform backend.
pub mod desktop;
#[cfg(not(any(target_os = "android", target_os = "ios")))]
pub use desktop::*;

#[cfg(target_os = "android")]
/// Android platform backend.
pub mod android;
#[cfg(target_os = "android")]
pub use android::*;

#[cfg(target_os = "ios")]
/// iOS platform backend.
pub mod apple;
#[cfg(target_os = "ios")]
pub use apple::*;
