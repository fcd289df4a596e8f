// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Android host via JNI.
//
// Every call resolves the hosting Activity from `ndk_context`, walks to its
// `Window` and decor `View`, and invokes the SDK method directly. Nothing is
// cached on the Rust side; all window state lives in the view hierarchy.
//
// The visibility-change listener is a small Java class,
// `com.fullscreen.bridge.VisibilityForwarder`, that calls back into
// `FullScreenNative.nativeOnSystemUiVisibilityChange`. See
// `ANDROID-INTEGRATION.md` for the Java glue.

#![cfg(target_os = "android")]

use jni::objects::{JObject, JString, JValue};
use jni::JNIEnv;

use fullscreen_core::error::{FullscreenError, Result};
use fullscreen_core::{ApiLevel, DisplaySize, SystemUiFlags, WindowFlags};

use crate::traits::*;

/// JNI name of the Java listener that forwards visibility changes to Rust.
pub const VISIBILITY_FORWARDER_CLASS: &str = "com/fullscreen/bridge/VisibilityForwarder";

const LISTENER_SIG: &str = "(Landroid/view/View$OnSystemUiVisibilityChangeListener;)V";

// ---------------------------------------------------------------------------
// JNI bootstrap helpers
// ---------------------------------------------------------------------------

/// Run `f` with an attached [`JNIEnv`] and the hosting Activity.
///
/// A Java exception thrown inside `f` is cleared and its `getMessage()` text
/// becomes the `FullscreenError::Platform` message, so the hybrid layer sees
/// the same text the SDK produced.
fn with_activity<T>(
    context: &str,
    f: impl FnOnce(&mut JNIEnv<'_>, &JObject<'_>) -> jni::errors::Result<T>,
) -> Result<T> {
    let ctx = ndk_context::android_context();
    // SAFETY: `ctx.vm()` is the `JavaVM*` registered by the NDK glue and is
    // valid for the lifetime of the process.
    let vm = unsafe { jni::JavaVM::from_raw(ctx.vm().cast()) }
        .map_err(|e| jni_err("failed to obtain JavaVM", e))?;
    let mut env = vm
        .attach_current_thread()
        .map_err(|e| jni_err("failed to attach JNI thread", e))?;

    let ptr = ctx.context();
    if ptr.is_null() {
        return Err(FullscreenError::Platform(
            "Android context is null, activity not initialised".into(),
        ));
    }
    // SAFETY: the NDK guarantees this is a valid global reference to the
    // hosting Activity.
    let activity = unsafe { JObject::from_raw(ptr.cast()) };

    match f(&mut env, &activity) {
        Ok(value) => Ok(value),
        Err(jni::errors::Error::JavaException) => {
            Err(FullscreenError::Platform(take_exception(&mut env, context)))
        }
        Err(e) => Err(jni_err(context, e)),
    }
}

/// Clear the pending Java exception and return its message.
fn take_exception(env: &mut JNIEnv<'_>, context: &str) -> String {
    let fallback = format!("{context}: Java exception");
    let throwable = match env.exception_occurred() {
        Ok(t) if !t.is_null() => t,
        _ => return fallback,
    };
    let _ = env.exception_clear();

    let message = match env
        .call_method(&throwable, "getMessage", "()Ljava/lang/String;", &[])
        .and_then(|v| v.l())
    {
        Ok(obj) if !obj.is_null() => JString::from(obj),
        _ => return fallback,
    };
    match env.get_string(&message) {
        Ok(s) => s.into(),
        Err(_) => fallback,
    }
}

/// Convenience: map any `jni::errors::Error` into `FullscreenError::Platform`.
fn jni_err(context: &str, e: jni::errors::Error) -> FullscreenError {
    FullscreenError::Platform(format!("{context}: {e}"))
}

fn window<'local>(
    env: &mut JNIEnv<'local>,
    activity: &JObject<'_>,
) -> jni::errors::Result<JObject<'local>> {
    env.call_method(activity, "getWindow", "()Landroid/view/Window;", &[])?
        .l()
}

fn decor_view<'local>(
    env: &mut JNIEnv<'local>,
    activity: &JObject<'_>,
) -> jni::errors::Result<JObject<'local>> {
    let window = window(env, activity)?;
    env.call_method(&window, "getDecorView", "()Landroid/view/View;", &[])?
        .l()
}

// ---------------------------------------------------------------------------
// Host struct
// ---------------------------------------------------------------------------

/// Android implementation of the system-UI host.
///
/// Zero-sized; the first JNI call happens lazily when a trait method runs.
pub struct AndroidHost;

impl AndroidHost {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AndroidHost {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemUiHost for AndroidHost {
    fn platform_name(&self) -> &str {
        "Android"
    }
}

// ---------------------------------------------------------------------------
// NativeDisplay — Build.VERSION, Display.getRealSize
// ---------------------------------------------------------------------------

impl NativeDisplay for AndroidHost {
    fn api_level(&self) -> ApiLevel {
        let level = with_activity("Build.VERSION.SDK_INT", |env, _| {
            env.get_static_field("android/os/Build$VERSION", "SDK_INT", "I")?
                .i()
        });
        match level {
            Ok(sdk) => ApiLevel(u32::try_from(sdk).unwrap_or(0)),
            Err(e) => {
                tracing::warn!(error = %e, "Android: could not read SDK_INT, assuming 0");
                ApiLevel(0)
            }
        }
    }

    fn real_display_size(&self) -> Result<DisplaySize> {
        with_activity("Display.getRealSize", |env, activity| {
            let decor = decor_view(env, activity)?;
            let display = env
                .call_method(&decor, "getDisplay", "()Landroid/view/Display;", &[])?
                .l()?;
            if display.is_null() {
                // Same failure the SDK would raise dereferencing a detached view.
                env.throw_new(
                    "java/lang/NullPointerException",
                    "decor view is not attached to a display",
                )?;
                return Err(jni::errors::Error::JavaException);
            }

            let point = env.new_object("android/graphics/Point", "()V", &[])?;
            env.call_method(
                &display,
                "getRealSize",
                "(Landroid/graphics/Point;)V",
                &[JValue::Object(&point)],
            )?;
            let width = env.get_field(&point, "x", "I")?.i()?;
            let height = env.get_field(&point, "y", "I")?.i()?;

            tracing::debug!(width, height, "Android: real display size");
            Ok(DisplaySize { width, height })
        })
    }
}

// ---------------------------------------------------------------------------
// NativeWindow — Window.addFlags / Window.clearFlags
// ---------------------------------------------------------------------------

impl NativeWindow for AndroidHost {
    fn add_window_flags(&self, flags: WindowFlags) -> Result<()> {
        with_activity("Window.addFlags", |env, activity| {
            let window = window(env, activity)?;
            env.call_method(&window, "addFlags", "(I)V", &[JValue::Int(flags.bits())])?;
            Ok(())
        })
    }

    fn clear_window_flags(&self, flags: WindowFlags) -> Result<()> {
        with_activity("Window.clearFlags", |env, activity| {
            let window = window(env, activity)?;
            env.call_method(&window, "clearFlags", "(I)V", &[JValue::Int(flags.bits())])?;
            Ok(())
        })
    }
}

// ---------------------------------------------------------------------------
// NativeDecorView — View.setSystemUiVisibility and its listener
// ---------------------------------------------------------------------------

impl NativeDecorView for AndroidHost {
    fn set_system_ui_visibility(&self, flags: SystemUiFlags) -> Result<()> {
        with_activity("View.setSystemUiVisibility", |env, activity| {
            let decor = decor_view(env, activity)?;
            env.call_method(
                &decor,
                "setSystemUiVisibility",
                "(I)V",
                &[JValue::Int(flags.bits())],
            )?;
            Ok(())
        })
    }

    fn set_visibility_listener(&self, installed: bool) -> Result<()> {
        with_activity("View.setOnSystemUiVisibilityChangeListener", |env, activity| {
            let decor = decor_view(env, activity)?;
            let listener = if installed {
                env.new_object(VISIBILITY_FORWARDER_CLASS, "()V", &[])?
            } else {
                JObject::null()
            };
            env.call_method(
                &decor,
                "setOnSystemUiVisibilityChangeListener",
                LISTENER_SIG,
                &[JValue::Object(&listener)],
            )?;
            Ok(())
        })
    }
}
