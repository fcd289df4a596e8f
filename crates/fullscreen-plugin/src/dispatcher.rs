// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Action dispatcher.
//
// Translates `(action, args)` from the hybrid layer into calls on the
// system-UI host and reports exactly one outcome per handled action on the
// callback. Every flag-applying action first removes the sticky-immersive
// listener, so only `immersiveMode(true)` ever leaves one installed.

use serde_json::Value;

use fullscreen_bridge::SystemUiHost;
use fullscreen_bridge::traits::{NativeDecorView, NativeDisplay, NativeWindow};
use fullscreen_core::action::sticky_arg;
use fullscreen_core::error::{FullscreenError, Result};
use fullscreen_core::{
    Action, BridgeConfig, Outcome, Payload, Request, Response, SystemUiFlags, WindowFlags,
};

use crate::callback::{CallbackContext, CollectingCallback};
use crate::reassert::ReassertionSlot;

/// Whether the dispatcher recognised the action name.
///
/// `NotHandled` is a silent signal: nothing was sent on the callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Handled,
    NotHandled,
}

pub struct ActionDispatcher {
    host: Box<dyn SystemUiHost>,
    config: BridgeConfig,
    reassertion: ReassertionSlot,
}

impl ActionDispatcher {
    pub fn new(host: Box<dyn SystemUiHost>) -> Self {
        Self::with_config(host, BridgeConfig::default())
    }

    pub fn with_config(host: Box<dyn SystemUiHost>, config: BridgeConfig) -> Self {
        tracing::debug!(
            platform = host.platform_name(),
            api = %host.api_level(),
            "action dispatcher created"
        );
        Self {
            host,
            config,
            reassertion: ReassertionSlot::new(),
        }
    }

    /// Flag set the sticky listener re-applies, if one is installed.
    pub fn reassertion(&self) -> Option<SystemUiFlags> {
        self.reassertion.current()
    }

    // -----------------------------------------------------------------------
    // Entry points
    // -----------------------------------------------------------------------

    /// Run `action` and send its responses on `callback`.
    pub fn execute(
        &self,
        action: &str,
        args: &[Value],
        callback: &mut dyn CallbackContext,
    ) -> Dispatch {
        let Some(action) = Action::from_name(action) else {
            tracing::debug!(action, "unrecognised action, not handled");
            return Dispatch::NotHandled;
        };
        tracing::debug!(%action, args = args.len(), "dispatching action");

        if let Err(e) = self.run(action, args, callback) {
            tracing::warn!(%action, error = %e, "action failed");
            callback.error(&e.to_string());
        }
        Dispatch::Handled
    }

    pub fn dispatch(&self, request: &Request) -> Outcome {
        let mut callback = CollectingCallback::new();
        let handled = self.execute(&request.action, &request.args, &mut callback);
        Outcome {
            handled: handled == Dispatch::Handled,
            responses: callback.into_responses(),
        }
    }

    /// JNI-shaped entry: `args_json` is the serialised argument array. An
    /// empty string means no arguments.
    pub fn execute_json(&self, action: &str, args_json: &str) -> Result<Outcome> {
        let args: Vec<Value> = if args_json.trim().is_empty() {
            Vec::new()
        } else {
            serde_json::from_str(args_json)?
        };
        Ok(self.dispatch(&Request::new(action, args)))
    }

    fn run(
        &self,
        action: Action,
        args: &[Value],
        callback: &mut dyn CallbackContext,
    ) -> Result<()> {
        match action {
            Action::IsSupported => callback.success_with(Payload::Bool(self.is_supported())),
            Action::IsImmersiveModeSupported => {
                callback.success_with(Payload::Bool(self.is_immersive_mode_supported()))
            }
            Action::ImmersiveWidth => callback.success_with(Payload::Int(self.immersive_width()?)),
            Action::ImmersiveHeight => {
                callback.success_with(Payload::Int(self.immersive_height()?))
            }
            Action::HideSystemUi => {
                self.hide_system_ui()?;
                callback.success();
            }
            Action::ShowSystemUi => {
                self.show_system_ui()?;
                callback.success_with(Payload::Bool(true));
                if self.config.legacy_show_ack {
                    callback.success();
                }
            }
            Action::ShowUnderSystemUi => {
                self.show_under_system_ui()?;
                callback.success();
            }
            Action::ImmersiveMode => {
                let sticky = sticky_arg(args, self.config.default_sticky)?;
                self.immersive_mode(sticky)?;
                callback.success();
            }
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn is_supported(&self) -> bool {
        self.host.api_level().at_least(self.config.min_supported_api)
    }

    pub fn is_immersive_mode_supported(&self) -> bool {
        self.host.api_level().at_least(self.config.min_immersive_api)
    }

    /// Screen width in immersive mode: the real display width, unmodified.
    pub fn immersive_width(&self) -> Result<i32> {
        Ok(self.host.real_display_size()?.width)
    }

    pub fn immersive_height(&self) -> Result<i32> {
        Ok(self.host.real_display_size()?.height)
    }

    // -----------------------------------------------------------------------
    // Flag-applying actions
    // -----------------------------------------------------------------------

    /// Hide system UI until the user interacts.
    pub fn hide_system_ui(&self) -> Result<()> {
        self.require(self.is_supported())?;
        self.clear_listener()?;
        self.apply(SystemUiFlags::hidden())
    }

    /// Drop translucent bars and make system UI visible again.
    pub fn show_system_ui(&self) -> Result<()> {
        self.require(self.is_supported())?;
        self.host.clear_window_flags(WindowFlags::translucent_bars())?;
        self.clear_listener()?;
        self.apply(SystemUiFlags::VISIBLE)
    }

    /// Make the bars translucent and extend content underneath them.
    pub fn show_under_system_ui(&self) -> Result<()> {
        self.require(self.is_supported())?;
        self.host.add_window_flags(WindowFlags::TRANSLUCENT_NAVIGATION)?;
        self.host.add_window_flags(WindowFlags::TRANSLUCENT_STATUS)?;
        self.clear_listener()?;
        self.apply(SystemUiFlags::under_system_ui())
    }

    /// Hide system UI and keep it hidden. With `sticky`, a listener re-applies
    /// the same flags whenever the platform reports a visibility change.
    pub fn immersive_mode(&self, sticky: bool) -> Result<()> {
        self.require(self.is_immersive_mode_supported())?;

        let flags = SystemUiFlags::immersive(sticky);
        self.clear_listener()?;
        self.apply(flags)?;

        if sticky {
            self.reassertion.replace(Some(flags));
            if let Err(e) = self.host.set_visibility_listener(true) {
                self.reassertion.replace(None);
                return Err(e);
            }
            tracing::info!(%flags, "sticky immersive reassertion installed");
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Platform callback
    // -----------------------------------------------------------------------

    /// Called by the host whenever system UI visibility changes.
    ///
    /// Re-applies the flags captured by `immersiveMode(true)`; does nothing
    /// when no reassertion is installed. Failures are logged only.
    pub fn on_system_ui_visibility_change(&self, visibility: i32) {
        let Some(flags) = self.reassertion.current() else {
            tracing::trace!(visibility, "visibility change ignored, no reassertion");
            return;
        };
        tracing::debug!(visibility, %flags, "reasserting immersive flags");
        if let Err(e) = self.host.set_system_ui_visibility(flags) {
            tracing::warn!(error = %e, %flags, "immersive reassertion failed");
        }
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    fn require(&self, supported: bool) -> Result<()> {
        if supported {
            Ok(())
        } else {
            tracing::warn!(
                platform = self.host.platform_name(),
                api = %self.host.api_level(),
                "action refused, platform release too old"
            );
            Err(FullscreenError::UnsupportedPlatform)
        }
    }

    fn clear_listener(&self) -> Result<()> {
        self.host.set_visibility_listener(false)?;
        if let Some(previous) = self.reassertion.replace(None) {
            tracing::info!(flags = %previous, "sticky immersive reassertion removed");
        }
        Ok(())
    }

    fn apply(&self, flags: SystemUiFlags) -> Result<()> {
        self.host.set_system_ui_visibility(flags)?;
        tracing::info!(%flags, "system UI visibility applied");
        Ok(())
    }
}

impl std::fmt::Debug for ActionDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionDispatcher")
            .field("platform", &self.host.platform_name())
            .field("config", &self.config)
            .field("reassertion", &self.reassertion.current())
            .finish()
    }
}
