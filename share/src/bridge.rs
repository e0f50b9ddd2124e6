//! Host method-call bridge.
//!
//! Hosts talk to the plugin with a method name (`shareToTwitter`, ...) and a
//! flat argument map:
//!
//! | key             | type                          | default |
//! |-----------------|-------------------------------|---------|
//! | `content`       | string                        | none    |
//! | `media`         | string or array of strings    | none    |
//! | `isOpenBrowser` | bool                          | `false` |

use std::path::PathBuf;

use serde::Deserialize;
use serde_json::Value;
use socialkit_clipboard::Pasteboard;

use crate::{Destination, Dispatcher, Platform, Result, ShareError, ShareOutcome, ShareRequest};

/// A call received from the host layer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MethodCall {
    /// Method name, e.g. `shareToFacebook`.
    pub method: String,
    /// Argument map; `null` is treated as empty.
    #[serde(default)]
    pub arguments: Value,
}

impl MethodCall {
    /// Create a call.
    pub fn new(method: impl Into<String>, arguments: Value) -> Self {
        Self {
            method: method.into(),
            arguments,
        }
    }

    /// Parse the call into a share request.
    ///
    /// # Errors
    /// Returns [`ShareError::UnsupportedMethod`] for unknown methods and
    /// [`ShareError::Argument`] when an argument has the wrong type.
    pub fn to_request(&self) -> Result<ShareRequest> {
        let destination = Destination::from_method(&self.method)
            .ok_or_else(|| ShareError::UnsupportedMethod(self.method.clone()))?;

        let arguments = match &self.arguments {
            Value::Null => ShareArguments::default(),
            Value::Object(_) => ShareArguments::deserialize(&self.arguments)
                .map_err(|e| ShareError::Argument(e.to_string()))?,
            other => {
                return Err(ShareError::Argument(format!(
                    "expected an argument map, got {other}"
                )));
            }
        };

        Ok(ShareRequest {
            destination,
            content: arguments.content,
            media: arguments.media.map(MediaArgument::into_paths).unwrap_or_default(),
            open_browser_on_failure: arguments.is_open_browser.unwrap_or(false),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ShareArguments {
    content: Option<String>,
    media: Option<MediaArgument>,
    is_open_browser: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MediaArgument {
    One(PathBuf),
    Many(Vec<PathBuf>),
}

impl MediaArgument {
    fn into_paths(self) -> Vec<PathBuf> {
        match self {
            Self::One(path) => vec![path],
            Self::Many(paths) => paths,
        }
    }
}

/// Handle one host call. Every failure comes back as [`ShareOutcome::Failed`].
pub fn handle_method_call<P: Platform, B: Pasteboard>(
    dispatcher: &Dispatcher<P, B>,
    call: &MethodCall,
) -> ShareOutcome {
    match call.to_request() {
        Ok(request) => dispatcher.dispatch(&request),
        Err(e) => {
            log::warn!("rejected host call {}: {e}", call.method);
            e.into()
        }
    }
}

/// Handle a host call whose arguments arrive as JSON text, returning the
/// outcome as JSON text.
pub fn handle_json<P: Platform, B: Pasteboard>(
    dispatcher: &Dispatcher<P, B>,
    method: &str,
    arguments: &str,
) -> String {
    let outcome = match serde_json::from_str::<Value>(arguments) {
        Ok(arguments) => handle_method_call(dispatcher, &MethodCall::new(method, arguments)),
        Err(e) => ShareError::Argument(format!("arguments are not valid JSON: {e}")).into(),
    };
    encode_outcome(&outcome)
}

/// Serialize an outcome for the host.
#[must_use]
pub fn encode_outcome(outcome: &ShareOutcome) -> String {
    serde_json::to_string(outcome).unwrap_or_else(|e| {
        log::error!("failed to encode share outcome: {e}");
        String::from(r#"{"status":"failed","code":"ARGUMENT_ERROR","message":"unencodable outcome"}"#)
    })
}
