// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-agnostic trait definitions for the host window system.
//
// Each trait mirrors one platform object: the display, the activity window,
// and the decor view. All methods are expected to be called on the host's UI
// thread.

use fullscreen_core::error::Result;
use fullscreen_core::{ApiLevel, DisplaySize, SystemUiFlags, WindowFlags};

/// Everything the dispatcher needs from the host, grouped into one object.
pub trait SystemUiHost: NativeDisplay + NativeWindow + NativeDecorView + Send + Sync {
    /// Human-readable platform name (e.g. "Android").
    fn platform_name(&self) -> &str;
}

/// OS release and physical display queries.
pub trait NativeDisplay {
    /// The running OS release. Never fails; hosts without one report 0.
    fn api_level(&self) -> ApiLevel;

    /// Full display size including areas covered by system decorations.
    fn real_display_size(&self) -> Result<DisplaySize>;
}

/// Activity window flags (`Window.addFlags` / `Window.clearFlags`).
pub trait NativeWindow {
    fn add_window_flags(&self, flags: WindowFlags) -> Result<()>;

    fn clear_window_flags(&self, flags: WindowFlags) -> Result<()>;
}

/// Decor view visibility state and its change listener.
pub trait NativeDecorView {
    /// Replace the decor view's system-UI visibility with `flags`.
    fn set_system_ui_visibility(&self, flags: SystemUiFlags) -> Result<()>;

    /// Install (`true`) or remove (`false`) the visibility-change listener.
    ///
    /// An installed listener forwards every change back into the process;
    /// installing always replaces any previous listener.
    fn set_visibility_listener(&self, installed: bool) -> Result<()>;
}
