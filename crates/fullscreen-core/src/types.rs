// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types: platform API levels, system-UI visibility flags, window
// flags, and the real display size.

use serde::{Deserialize, Serialize};
use std::ops::BitOr;

// ---------------------------------------------------------------------------
// API level
// ---------------------------------------------------------------------------

/// Android SDK release number (`Build.VERSION.SDK_INT`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ApiLevel(pub u32);

impl ApiLevel {
    /// Android 4.0, the first release with `setSystemUiVisibility` flags
    /// for hiding the navigation bar.
    pub const ICE_CREAM_SANDWICH: ApiLevel = ApiLevel(14);
    /// Android 4.4, the first release with immersive mode and translucent bars.
    pub const KITKAT: ApiLevel = ApiLevel(19);

    /// Whether this release is at least `minimum`.
    pub fn at_least(self, minimum: ApiLevel) -> bool {
        self >= minimum
    }
}

impl std::fmt::Display for ApiLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "API {}", self.0)
    }
}

// ---------------------------------------------------------------------------
// System UI visibility flags (View.SYSTEM_UI_FLAG_*)
// ---------------------------------------------------------------------------

/// A set of `View.SYSTEM_UI_FLAG_*` bits passed to `setSystemUiVisibility`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SystemUiFlags(pub i32);

impl SystemUiFlags {
    pub const VISIBLE: SystemUiFlags = SystemUiFlags(0x0000_0000);
    pub const HIDE_NAVIGATION: SystemUiFlags = SystemUiFlags(0x0000_0002);
    pub const FULLSCREEN: SystemUiFlags = SystemUiFlags(0x0000_0004);
    pub const LAYOUT_STABLE: SystemUiFlags = SystemUiFlags(0x0000_0100);
    pub const LAYOUT_HIDE_NAVIGATION: SystemUiFlags = SystemUiFlags(0x0000_0200);
    pub const LAYOUT_FULLSCREEN: SystemUiFlags = SystemUiFlags(0x0000_0400);
    pub const IMMERSIVE: SystemUiFlags = SystemUiFlags(0x0000_0800);
    pub const IMMERSIVE_STICKY: SystemUiFlags = SystemUiFlags(0x0000_1000);

    /// Raw bits as handed to the platform.
    pub const fn bits(self) -> i32 {
        self.0
    }

    /// Whether every bit of `other` is set in `self`.
    pub const fn contains(self, other: SystemUiFlags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Hide the navigation and status bars until the user interacts.
    pub fn hidden() -> Self {
        Self::HIDE_NAVIGATION | Self::FULLSCREEN
    }

    /// Lay content out underneath the (still visible) system bars.
    pub fn under_system_ui() -> Self {
        Self::LAYOUT_STABLE | Self::LAYOUT_HIDE_NAVIGATION | Self::LAYOUT_FULLSCREEN
    }

    /// Full immersive set: layout under the bars, hide them, and pick the
    /// sticky or plain immersive behaviour for edge swipes.
    pub fn immersive(sticky: bool) -> Self {
        let immersive = if sticky {
            Self::IMMERSIVE_STICKY
        } else {
            Self::IMMERSIVE
        };
        Self::under_system_ui() | Self::hidden() | immersive
    }
}

impl BitOr for SystemUiFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::fmt::Display for SystemUiFlags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#06x}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Window flags (WindowManager.LayoutParams.FLAG_*)
// ---------------------------------------------------------------------------

/// A set of `WindowManager.LayoutParams.FLAG_*` bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct WindowFlags(pub i32);

impl WindowFlags {
    pub const TRANSLUCENT_STATUS: WindowFlags = WindowFlags(0x0400_0000);
    pub const TRANSLUCENT_NAVIGATION: WindowFlags = WindowFlags(0x0800_0000);

    pub const fn bits(self) -> i32 {
        self.0
    }

    pub const fn contains(self, other: WindowFlags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Both translucent bars.
    pub fn translucent_bars() -> Self {
        Self::TRANSLUCENT_NAVIGATION | Self::TRANSLUCENT_STATUS
    }
}

impl BitOr for WindowFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::fmt::Display for WindowFlags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

/// Real size of the display in pixels, including areas normally covered by
/// system decorations (`Display.getRealSize`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySize {
    pub width: i32,
    pub height: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_gates_are_inclusive() {
        assert!(ApiLevel(14).at_least(ApiLevel::ICE_CREAM_SANDWICH));
        assert!(!ApiLevel(13).at_least(ApiLevel::ICE_CREAM_SANDWICH));
        assert!(ApiLevel(19).at_least(ApiLevel::KITKAT));
        assert!(!ApiLevel(18).at_least(ApiLevel::KITKAT));
    }

    #[test]
    fn hidden_set_matches_platform_bits() {
        assert_eq!(SystemUiFlags::hidden().bits(), 0x0006);
    }

    #[test]
    fn under_system_ui_set_matches_platform_bits() {
        assert_eq!(SystemUiFlags::under_system_ui().bits(), 0x0700);
    }

    #[test]
    fn immersive_sets_pick_exactly_one_immersive_bit() {
        let sticky = SystemUiFlags::immersive(true);
        assert_eq!(sticky.bits(), 0x1706);
        assert!(sticky.contains(SystemUiFlags::IMMERSIVE_STICKY));
        assert!(!sticky.contains(SystemUiFlags::IMMERSIVE));

        let plain = SystemUiFlags::immersive(false);
        assert_eq!(plain.bits(), 0x0F06);
        assert!(plain.contains(SystemUiFlags::IMMERSIVE));
        assert!(!plain.contains(SystemUiFlags::IMMERSIVE_STICKY));
    }

    #[test]
    fn translucent_bars_cover_status_and_navigation() {
        let flags = WindowFlags::translucent_bars();
        assert!(flags.contains(WindowFlags::TRANSLUCENT_STATUS));
        assert!(flags.contains(WindowFlags::TRANSLUCENT_NAVIGATION));
        assert_eq!(flags.bits(), 0x0C00_0000);
    }

    #[test]
    fn flags_display_as_hex() {
        assert_eq!(SystemUiFlags::hidden().to_string(), "0x0006");
    }
}
