// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// JNI exports called by `com.fullscreen.bridge.FullScreenNative`.
//
// The library is loaded with `System.loadLibrary`, so no NativeActivity glue
// registers the VM and Activity with `ndk_context`. `nativeInit(Activity)`
// does that once and must precede every other call; until then the other
// exports refuse to touch the host.
//
// One dispatcher lives for the whole process. `nativeConfigure` may install a
// custom `BridgeConfig`, but only before the first dispatch creates it.
//
// Every export runs inside `catch_unwind`; a panic becomes a thrown
// `RuntimeException` instead of unwinding across the FFI boundary.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::OnceLock;

use jni::JNIEnv;
use jni::objects::{GlobalRef, JClass, JObject, JString};
use jni::sys::{JNI_FALSE, JNI_TRUE, jboolean, jint, jstring};

use fullscreen_core::BridgeConfig;
use fullscreen_core::error::{FullscreenError, Result};

use crate::dispatcher::ActionDispatcher;

const RUNTIME_EXCEPTION: &str = "java/lang/RuntimeException";
const ILLEGAL_ARGUMENT: &str = "java/lang/IllegalArgumentException";
const ILLEGAL_STATE: &str = "java/lang/IllegalStateException";

/// Global reference to the Activity handed to `ndk_context`. Held for the
/// life of the process so the raw pointer stays valid.
static ACTIVITY: OnceLock<GlobalRef> = OnceLock::new();

static DISPATCHER: OnceLock<ActionDispatcher> = OnceLock::new();

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Register the VM and `activity` with `ndk_context`. Returns false when a
/// context was already registered.
fn init_context(env: &mut JNIEnv<'_>, activity: &JObject<'_>) -> Result<bool> {
    if ACTIVITY.get().is_some() {
        return Ok(false);
    }
    if activity.is_null() {
        return Err(FullscreenError::InvalidArgument("activity is null".into()));
    }

    let vm = env
        .get_java_vm()
        .map_err(|e| FullscreenError::Platform(format!("GetJavaVM: {e}")))?;
    let global = env
        .new_global_ref(activity)
        .map_err(|e| FullscreenError::Platform(format!("NewGlobalRef: {e}")))?;
    let activity_ptr = global.as_obj().as_raw();

    if ACTIVITY.set(global).is_err() {
        return Ok(false);
    }
    // SAFETY: the VM pointer comes from the running JVM and the Activity
    // pointer is a global reference kept alive by `ACTIVITY` forever.
    // `ACTIVITY.set` succeeding guarantees this runs at most once.
    unsafe {
        ndk_context::initialize_android_context(
            vm.get_java_vm_pointer().cast(),
            activity_ptr.cast(),
        );
    }
    Ok(true)
}

fn ensure_initialized() -> Result<()> {
    if ACTIVITY.get().is_some() {
        Ok(())
    } else {
        Err(FullscreenError::Platform(
            "FullScreenNative.nativeInit(Activity) has not been called".into(),
        ))
    }
}

fn dispatcher() -> Result<&'static ActionDispatcher> {
    ensure_initialized()?;
    Ok(DISPATCHER.get_or_init(|| {
        crate::init_tracing();
        ActionDispatcher::new(fullscreen_bridge::platform_host())
    }))
}

fn read_string(env: &mut JNIEnv<'_>, value: &JString<'_>) -> Result<String> {
    if value.is_null() {
        return Ok(String::new());
    }
    env.get_string(value)
        .map(String::from)
        .map_err(|e| FullscreenError::Platform(format!("GetStringUTFChars: {e}")))
}

fn throw(env: &mut JNIEnv<'_>, class: &str, message: &str) {
    tracing::warn!(message, "JNI call failed, raising {class}");
    let _ = env.throw_new(class, message);
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "panic in fullscreen plugin".to_string()
    }
}

/// Run an export body, converting a panic into a `RuntimeException` and
/// returning `fallback`.
fn guarded<T>(env: &mut JNIEnv<'_>, fallback: T, body: impl FnOnce(&mut JNIEnv<'_>) -> T) -> T {
    match panic::catch_unwind(AssertUnwindSafe(|| body(&mut *env))) {
        Ok(value) => value,
        Err(payload) => {
            let message = panic_message(&*payload);
            throw(env, RUNTIME_EXCEPTION, &message);
            fallback
        }
    }
}

// ---------------------------------------------------------------------------
// Exports
// ---------------------------------------------------------------------------

/// `boolean nativeInit(Activity activity)`
///
/// Returns false when already initialised; the first Activity stays in use.
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_fullscreen_bridge_FullScreenNative_nativeInit<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    activity: JObject<'local>,
) -> jboolean {
    guarded(&mut env, JNI_FALSE, |env| match init_context(env, &activity) {
        Ok(true) => {
            crate::init_tracing();
            tracing::info!("fullscreen plugin attached to activity");
            JNI_TRUE
        }
        Ok(false) => {
            tracing::debug!("nativeInit called again, keeping existing context");
            JNI_FALSE
        }
        Err(e) => {
            throw(env, ILLEGAL_ARGUMENT, &e.to_string());
            JNI_FALSE
        }
    })
}

/// `String nativeExecute(String action, String argsJson)`
///
/// Returns the outcome JSON. Malformed arguments raise
/// `IllegalArgumentException`; a call before `nativeInit` raises
/// `IllegalStateException`. Both return null.
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_fullscreen_bridge_FullScreenNative_nativeExecute<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    action: JString<'local>,
    args_json: JString<'local>,
) -> jstring {
    guarded(&mut env, std::ptr::null_mut(), |env| {
        let dispatcher = match dispatcher() {
            Ok(dispatcher) => dispatcher,
            Err(e) => {
                throw(env, ILLEGAL_STATE, &e.to_string());
                return std::ptr::null_mut();
            }
        };

        let outcome = read_string(env, &action).and_then(|action| {
            let args = read_string(env, &args_json)?;
            dispatcher.execute_json(&action, &args)?.to_json()
        });
        let json = match outcome {
            Ok(json) => json,
            Err(e) => {
                throw(env, ILLEGAL_ARGUMENT, &e.to_string());
                return std::ptr::null_mut();
            }
        };

        match env.new_string(json) {
            Ok(s) => s.into_raw(),
            Err(e) => {
                throw(env, RUNTIME_EXCEPTION, &format!("NewStringUTF: {e}"));
                std::ptr::null_mut()
            }
        }
    })
}

/// `void nativeOnSystemUiVisibilityChange(int visibility)`
///
/// Ignored before `nativeInit`; no listener can be installed until then.
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_fullscreen_bridge_FullScreenNative_nativeOnSystemUiVisibilityChange<
    'local,
>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    visibility: jint,
) {
    guarded(&mut env, (), |_| {
        if let Ok(dispatcher) = dispatcher() {
            dispatcher.on_system_ui_visibility_change(visibility);
        }
    })
}

/// `boolean nativeConfigure(String configJson)`
///
/// Call after `nativeInit` and before the first `nativeExecute`. Returns false
/// when the dispatcher already exists; the config is then ignored. Malformed
/// JSON raises `IllegalArgumentException`.
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_fullscreen_bridge_FullScreenNative_nativeConfigure<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    config_json: JString<'local>,
) -> jboolean {
    guarded(&mut env, JNI_FALSE, |env| {
        if let Err(e) = ensure_initialized() {
            throw(env, ILLEGAL_STATE, &e.to_string());
            return JNI_FALSE;
        }

        let config = match read_string(env, &config_json)
            .and_then(|json| BridgeConfig::from_json(&json))
        {
            Ok(config) => config,
            Err(e) => {
                throw(env, ILLEGAL_ARGUMENT, &e.to_string());
                return JNI_FALSE;
            }
        };

        let fresh = ActionDispatcher::with_config(fullscreen_bridge::platform_host(), config);
        if DISPATCHER.set(fresh).is_ok() {
            tracing::info!("fullscreen dispatcher configured");
            JNI_TRUE
        } else {
            tracing::warn!("nativeConfigure called after first dispatch, config ignored");
            JNI_FALSE
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panic_message_reads_str_and_string_payloads() {
        let payload = panic::catch_unwind(|| panic!("android context was not initialized"))
            .unwrap_err();
        assert_eq!(panic_message(&*payload), "android context was not initialized");

        let payload = panic::catch_unwind(|| panic!("{} {}", "formatted", 1)).unwrap_err();
        assert_eq!(panic_message(&*payload), "formatted 1");
    }

    #[test]
    fn exports_refuse_to_dispatch_before_init() {
        let err = dispatcher().unwrap_err();
        assert!(err.to_string().contains("nativeInit"));
    }
}
