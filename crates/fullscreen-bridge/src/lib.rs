// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

//! Native host bridge for system-UI visibility control.
//!
//! Defines the [`traits::SystemUiHost`] abstraction over the platform's
//! window, decor view, and display, and selects the implementation for the
//! target operating system.

pub mod traits;

#[cfg(target_os = "android")]
pub mod android;

#[cfg(not(target_os = "android"))]
pub mod stub;

pub use traits::SystemUiHost;

/// Returns the host implementation for the target operating system.
pub fn platform_host() -> Box<dyn SystemUiHost> {
    #[cfg(target_os = "android")]
    {
        // Android: window and decor-view calls go through `jni-rs`.
        Box::new(android::AndroidHost::new())
    }
    #[cfg(not(target_os = "android"))]
    {
        // Desktop/CI: no system bars to control.
        Box::new(stub::StubHost)
    }
}
