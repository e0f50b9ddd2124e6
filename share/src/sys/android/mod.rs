//! Android backend: share intents pinned to the destination's package.

use std::path::Path;
use std::sync::Arc;

use jni::objects::{GlobalRef, JClass, JObject, JValue};
use jni::sys::jint;
use jni::{JNIEnv, JavaVM};
use url::Url;

use crate::{MediaHandle, MediaTransport, Platform, Result, ShareError, SharePayload};

const ACTION_SEND: &str = "android.intent.action.SEND";
const ACTION_SEND_MULTIPLE: &str = "android.intent.action.SEND_MULTIPLE";
const ACTION_VIEW: &str = "android.intent.action.VIEW";
const EXTRA_TEXT: &str = "android.intent.extra.TEXT";
const EXTRA_STREAM: &str = "android.intent.extra.STREAM";

/// `Intent.FLAG_GRANT_READ_URI_PERMISSION`.
const FLAG_GRANT_READ_URI_PERMISSION: jint = 0x0000_0001;
/// `Intent.FLAG_ACTIVITY_NEW_TASK`.
const FLAG_ACTIVITY_NEW_TASK: jint = 0x1000_0000;

const INTENT_CLASS: &str = "android/content/Intent";
const FILE_PROVIDER_CLASS: &str = "androidx.core.content.FileProvider";
const FILE_PROVIDER_SUFFIX: &str = ".fileprovider";

/// Share backend bound to an Android `Context`.
///
/// Each call attaches the current thread to the JVM, so the platform can be
/// used from any thread.
#[derive(Clone, Debug)]
pub struct AndroidPlatform {
    vm: Arc<JavaVM>,
    context: GlobalRef,
    authority: Option<String>,
}

impl AndroidPlatform {
    /// Bind to `context` (an `Activity` or the application context).
    ///
    /// # Errors
    /// Returns [`ShareError::Launch`] if the JVM or a global reference cannot
    /// be obtained.
    pub fn from_context(env: &mut JNIEnv, context: &JObject) -> Result<Self> {
        let vm = env
            .get_java_vm()
            .map_err(|e| ShareError::Launch(format!("JNI error get_java_vm: {e}")))?;
        let context = env
            .new_global_ref(context)
            .map_err(|e| ShareError::Launch(format!("JNI error new_global_ref: {e}")))?;
        Ok(Self {
            vm: Arc::new(vm),
            context,
            authority: None,
        })
    }

    /// Use a custom `FileProvider` authority instead of `<package>.fileprovider`.
    #[must_use]
    pub fn with_file_provider_authority(mut self, authority: impl Into<String>) -> Self {
        self.authority = Some(authority.into());
        self
    }

    /// Run `f` with an attached env. A pending Java exception is cleared and
    /// its description becomes the error message.
    fn with_env<T>(
        &self,
        on_error: impl Fn(String) -> ShareError,
        f: impl FnOnce(&mut JNIEnv, &JObject) -> jni::errors::Result<T>,
    ) -> Result<T> {
        let mut env = self
            .vm
            .attach_current_thread()
            .map_err(|e| on_error(format!("JNI error attach_current_thread: {e}")))?;
        f(&mut env, self.context.as_obj()).map_err(|e| {
            let detail = take_exception(&mut env).unwrap_or_else(|| e.to_string());
            log::error!("JNI call failed: {detail}");
            on_error(detail)
        })
    }

    fn authority(&self, env: &mut JNIEnv, context: &JObject) -> jni::errors::Result<String> {
        if let Some(authority) = &self.authority {
            return Ok(authority.clone());
        }
        let package = env
            .call_method(context, "getPackageName", "()Ljava/lang/String;", &[])?
            .l()?;
        let package: String = env.get_string((&package).into())?.into();
        Ok(package + FILE_PROVIDER_SUFFIX)
    }
}

impl Platform for AndroidPlatform {
    fn media_transport(&self) -> MediaTransport {
        MediaTransport::Attach
    }

    fn grant_media(&self, path: &Path) -> Result<MediaHandle> {
        let path_str = path
            .to_str()
            .ok_or_else(|| ShareError::media(path, "path is not valid UTF-8"))?;

        let uri = self.with_env(
            |detail| ShareError::media(path, detail),
            |env, context| {
                let authority = self.authority(env, context)?;
                let authority = env.new_string(authority)?;
                let path = env.new_string(path_str)?;
                let file = env.new_object("java/io/File", "(Ljava/lang/String;)V", &[
                    JValue::Object(&path),
                ])?;

                let provider = load_class(env, context, FILE_PROVIDER_CLASS)?;
                let uri = env
                    .call_static_method(
                        provider,
                        "getUriForFile",
                        "(Landroid/content/Context;Ljava/lang/String;Ljava/io/File;)Landroid/net/Uri;",
                        &[
                            JValue::Object(context),
                            JValue::Object(&authority),
                            JValue::Object(&file),
                        ],
                    )?
                    .l()?;
                java_to_string(env, &uri)
            },
        )?;

        log::debug!("granted {} as {uri}", path.display());
        Ok(MediaHandle {
            path: path.to_path_buf(),
            uri,
        })
    }

    fn has_handler(&self, payload: &SharePayload<'_>) -> Result<bool> {
        self.with_env(ShareError::Launch, |env, context| {
            let intent = share_intent(env, payload)?;
            let manager = env
                .call_method(
                    context,
                    "getPackageManager",
                    "()Landroid/content/pm/PackageManager;",
                    &[],
                )?
                .l()?;
            let component = env
                .call_method(
                    &intent,
                    "resolveActivity",
                    "(Landroid/content/pm/PackageManager;)Landroid/content/ComponentName;",
                    &[JValue::Object(&manager)],
                )?
                .l()?;
            Ok(!component.is_null())
        })
    }

    fn launch_app(&self, payload: &SharePayload<'_>) -> Result<()> {
        self.with_env(ShareError::Launch, |env, context| {
            let intent = share_intent(env, payload)?;
            add_flags(env, &intent, FLAG_ACTIVITY_NEW_TASK)?;
            start_activity(env, context, &intent)
        })
    }

    fn open_browser(&self, url: &Url) -> Result<()> {
        self.with_env(ShareError::Launch, |env, context| {
            let action = env.new_string(ACTION_VIEW)?;
            let uri = parse_uri(env, url.as_str())?;
            let intent = env.new_object(
                INTENT_CLASS,
                "(Ljava/lang/String;Landroid/net/Uri;)V",
                &[JValue::Object(&action), JValue::Object(&uri)],
            )?;
            env.call_method(
                &intent,
                "setFlags",
                "(I)Landroid/content/Intent;",
                &[JValue::Int(FLAG_ACTIVITY_NEW_TASK)],
            )?;
            start_activity(env, context, &intent)
        })
    }
}

/// `ACTION_SEND` (or `ACTION_SEND_MULTIPLE`) intent for the payload, pinned
/// to the destination's package.
fn share_intent<'local>(
    env: &mut JNIEnv<'local>,
    payload: &SharePayload<'_>,
) -> jni::errors::Result<JObject<'local>> {
    let action = if payload.media.len() > 1 {
        ACTION_SEND_MULTIPLE
    } else {
        ACTION_SEND
    };
    let action = env.new_string(action)?;
    let intent = env.new_object(INTENT_CLASS, "(Ljava/lang/String;)V", &[JValue::Object(
        &action,
    )])?;

    let mime = env.new_string(payload.kind.mime_type())?;
    env.call_method(
        &intent,
        "setType",
        "(Ljava/lang/String;)Landroid/content/Intent;",
        &[JValue::Object(&mime)],
    )?;

    if let Some(content) = payload.content {
        let key = env.new_string(EXTRA_TEXT)?;
        let value = env.new_string(content)?;
        env.call_method(
            &intent,
            "putExtra",
            "(Ljava/lang/String;Ljava/lang/String;)Landroid/content/Intent;",
            &[JValue::Object(&key), JValue::Object(&value)],
        )?;
    }

    match payload.media {
        [] => {}
        [single] => {
            let key = env.new_string(EXTRA_STREAM)?;
            let uri = parse_uri(env, &single.uri)?;
            env.call_method(
                &intent,
                "putExtra",
                "(Ljava/lang/String;Landroid/os/Parcelable;)Landroid/content/Intent;",
                &[JValue::Object(&key), JValue::Object(&uri)],
            )?;
        }
        many => {
            let list = env.new_object("java/util/ArrayList", "()V", &[])?;
            for handle in many {
                let uri = parse_uri(env, &handle.uri)?;
                env.call_method(&list, "add", "(Ljava/lang/Object;)Z", &[JValue::Object(&uri)])?;
                env.delete_local_ref(uri)?;
            }
            let key = env.new_string(EXTRA_STREAM)?;
            env.call_method(
                &intent,
                "putParcelableArrayListExtra",
                "(Ljava/lang/String;Ljava/util/ArrayList;)Landroid/content/Intent;",
                &[JValue::Object(&key), JValue::Object(&list)],
            )?;
        }
    }
    if !payload.media.is_empty() {
        add_flags(env, &intent, FLAG_GRANT_READ_URI_PERMISSION)?;
    }

    let package = env.new_string(payload.profile.android_package)?;
    env.call_method(
        &intent,
        "setPackage",
        "(Ljava/lang/String;)Landroid/content/Intent;",
        &[JValue::Object(&package)],
    )?;
    Ok(intent)
}

fn add_flags(env: &mut JNIEnv, intent: &JObject, flags: jint) -> jni::errors::Result<()> {
    env.call_method(
        intent,
        "addFlags",
        "(I)Landroid/content/Intent;",
        &[JValue::Int(flags)],
    )?;
    Ok(())
}

fn start_activity(env: &mut JNIEnv, context: &JObject, intent: &JObject) -> jni::errors::Result<()> {
    env.call_method(
        context,
        "startActivity",
        "(Landroid/content/Intent;)V",
        &[JValue::Object(intent)],
    )?;
    Ok(())
}

fn parse_uri<'local>(env: &mut JNIEnv<'local>, uri: &str) -> jni::errors::Result<JObject<'local>> {
    let uri = env.new_string(uri)?;
    env.call_static_method(
        "android/net/Uri",
        "parse",
        "(Ljava/lang/String;)Landroid/net/Uri;",
        &[JValue::Object(&uri)],
    )?
    .l()
}

/// Load an app class through the context's class loader; `find_class` only
/// sees system classes on native threads.
fn load_class<'local>(
    env: &mut JNIEnv<'local>,
    context: &JObject,
    name: &str,
) -> jni::errors::Result<JClass<'local>> {
    let loader = env
        .call_method(context, "getClassLoader", "()Ljava/lang/ClassLoader;", &[])?
        .l()?;
    let name = env.new_string(name)?;
    let class = env
        .call_method(
            &loader,
            "loadClass",
            "(Ljava/lang/String;)Ljava/lang/Class;",
            &[JValue::Object(&name)],
        )?
        .l()?;
    Ok(class.into())
}

fn java_to_string(env: &mut JNIEnv, object: &JObject) -> jni::errors::Result<String> {
    let text = env
        .call_method(object, "toString", "()Ljava/lang/String;", &[])?
        .l()?;
    Ok(env.get_string((&text).into())?.into())
}

fn take_exception(env: &mut JNIEnv) -> Option<String> {
    if !env.exception_check().unwrap_or(false) {
        return None;
    }
    let throwable = env.exception_occurred().ok()?;
    env.exception_clear().ok()?;
    java_to_string(env, &throwable).ok()
}
