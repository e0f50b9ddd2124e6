//! Android JNI harness for socialkit.
//!
//! This crate is only compiled for Android targets.
//! To build: cargo ndk -t arm64-v8a build -p socialkit-test-android
//!
//! `MainActivity.kt` declares:
//!
//! ```kotlin
//! external fun shareWith(context: Context, method: String, argumentsJson: String): String
//! ```

#![cfg(target_os = "android")]
#![allow(non_snake_case)]

use jni::JNIEnv;
use jni::objects::{JClass, JObject, JString};
use jni::sys::jstring;
use socialkit_clipboard::SystemPasteboard;
use socialkit_share::{Dispatcher, ShareError, SystemPlatform, encode_outcome, handle_json};

fn init_logger() {
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(log::LevelFilter::Debug)
            .with_tag("socialkit"),
    );
}

fn read_string(env: &mut JNIEnv, value: &JString) -> Result<String, ShareError> {
    env.get_string(value)
        .map(Into::into)
        .map_err(|e| ShareError::Argument(format!("JNI error get_string: {e}")))
}

fn bind(
    env: &mut JNIEnv,
    context: &JObject,
) -> Result<Dispatcher<SystemPlatform, SystemPasteboard>, ShareError> {
    let platform = SystemPlatform::from_context(env, context)?;
    Ok(Dispatcher::new(platform, SystemPasteboard))
}

fn share_json(env: &mut JNIEnv, context: &JObject, method: &JString, arguments: &JString) -> String {
    let prepared = read_string(env, method).and_then(|method| {
        let arguments = read_string(env, arguments)?;
        Ok((bind(env, context)?, method, arguments))
    });

    match prepared {
        Ok((dispatcher, method, arguments)) => handle_json(&dispatcher, &method, &arguments),
        Err(e) => {
            log::error!("share bridge setup failed: {e}");
            encode_outcome(&e.into())
        }
    }
}

/// Dispatch a `shareTo*` call. Returns the outcome as JSON.
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_socialkit_test_MainActivity_shareWith(
    mut env: JNIEnv,
    _class: JClass,
    context: JObject,
    method: JString,
    arguments_json: JString,
) -> jstring {
    init_logger();
    let result = share_json(&mut env, &context, &method, &arguments_json);
    match env.new_string(result) {
        Ok(value) => value.into_raw(),
        Err(e) => {
            log::error!("JNI error new_string: {e}");
            std::ptr::null_mut()
        }
    }
}
