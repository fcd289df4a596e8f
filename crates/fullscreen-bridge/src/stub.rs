// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stub host for desktop/CI builds where there are no system bars.
//
// Reports API level 0 so every version-gated action is refused before it
// reaches the host. Direct calls fail with `FullscreenError::Platform`.

use fullscreen_core::error::{FullscreenError, Result};
use fullscreen_core::{ApiLevel, DisplaySize, SystemUiFlags, WindowFlags};

use crate::traits::*;

const UNAVAILABLE: &str = "system UI control is not available on this platform";

/// No-op host returned on non-Android platforms.
pub struct StubHost;

impl SystemUiHost for StubHost {
    fn platform_name(&self) -> &str {
        "Desktop (stub)"
    }
}

impl NativeDisplay for StubHost {
    fn api_level(&self) -> ApiLevel {
        ApiLevel(0)
    }

    fn real_display_size(&self) -> Result<DisplaySize> {
        tracing::warn!("NativeDisplay::real_display_size called on stub host");
        Err(FullscreenError::Platform(UNAVAILABLE.into()))
    }
}

impl NativeWindow for StubHost {
    fn add_window_flags(&self, _flags: WindowFlags) -> Result<()> {
        tracing::warn!("NativeWindow::add_window_flags called on stub host");
        Err(FullscreenError::Platform(UNAVAILABLE.into()))
    }

    fn clear_window_flags(&self, _flags: WindowFlags) -> Result<()> {
        tracing::warn!("NativeWindow::clear_window_flags called on stub host");
        Err(FullscreenError::Platform(UNAVAILABLE.into()))
    }
}

impl NativeDecorView for StubHost {
    fn set_system_ui_visibility(&self, _flags: SystemUiFlags) -> Result<()> {
        tracing::warn!("NativeDecorView::set_system_ui_visibility called on stub host");
        Err(FullscreenError::Platform(UNAVAILABLE.into()))
    }

    fn set_visibility_listener(&self, _installed: bool) -> Result<()> {
        tracing::warn!("NativeDecorView::set_visibility_listener called on stub host");
        Err(FullscreenError::Platform(UNAVAILABLE.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_is_below_every_gate() {
        assert!(!StubHost.api_level().at_least(ApiLevel::ICE_CREAM_SANDWICH));
    }

    #[test]
    fn stub_display_query_fails_with_platform_error() {
        let err = StubHost.real_display_size().unwrap_err();
        assert!(matches!(err, FullscreenError::Platform(_)));
    }

    #[test]
    fn stub_refuses_listener_changes() {
        assert!(matches!(
            StubHost.set_visibility_listener(false),
            Err(FullscreenError::Platform(_))
        ));
    }

    #[test]
    fn platform_host_is_the_stub_off_android() {
        assert_eq!(crate::platform_host().platform_name(), "Desktop (stub)");
    }
}
