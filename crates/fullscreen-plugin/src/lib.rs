// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Fullscreen plugin — maps the hybrid layer's action vocabulary onto the
// native system-UI host.

pub mod callback;
pub mod dispatcher;
pub mod reassert;

#[cfg(target_os = "android")]
mod android;

pub use callback::{CallbackContext, CollectingCallback};
pub use dispatcher::{ActionDispatcher, Dispatch};
pub use reassert::ReassertionSlot;

/// Install the process-wide `tracing` subscriber.
///
/// Filter comes from `RUST_LOG`, defaulting to `info`. Calling this more than
/// once is harmless; later calls leave the first subscriber in place.
pub fn init_tracing() {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("fullscreen plugin logging initialised");
    }
}
