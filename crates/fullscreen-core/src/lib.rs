// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Fullscreen bridge — core types, flag sets, wire format, and error definitions
// shared across all crates.

pub mod action;
pub mod config;
pub mod error;
pub mod types;

pub use action::{Action, Outcome, Payload, Request, Response};
pub use config::BridgeConfig;
pub use error::FullscreenError;
pub use types::*;
