//! # Socialkit
//!
//! Share text and media to social apps (Facebook, Twitter, LinkedIn,
//! WhatsApp, Reddit, Telegram, Instagram) from Rust, on Android, iOS and
//! desktop, with a web fallback when the app is not installed.
//!
//! ## Features
//!
//! - `share`: the share dispatcher and host method-call bridge (default).
//! - `clipboard`: pasteboard image handoff.
//!
//! Use the `full` feature to enable everything.
//!
//! ## Example
//!
//! ```toml
//! [dependencies]
//! socialkit = { version = "0.1", features = ["share"] }
//! ```
//!
//! ```rust,no_run
//! # #[cfg(not(target_os = "android"))]
//! # {
//! use socialkit::share::{Destination, ShareRequest};
//!
//! let outcome = socialkit::share::share(
//!     &ShareRequest::new(Destination::WhatsApp)
//!         .content("See you at 8")
//!         .open_browser(true),
//! );
//! if !outcome.is_launched() {
//!     eprintln!("{outcome:?}");
//! }
//! # }
//! ```

#[cfg(feature = "share")]
pub use socialkit_share as share;

#[cfg(feature = "clipboard")]
pub use socialkit_clipboard as clipboard;
