// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for the fullscreen bridge.

use thiserror::Error;

/// Top-level error type for all bridge operations.
#[derive(Debug, Error)]
pub enum FullscreenError {
    /// The running OS release is below the minimum an action requires.
    #[error("Not supported")]
    UnsupportedPlatform,

    /// Raised while querying or applying window/display configuration.
    /// Carries the underlying platform message verbatim.
    #[error("{0}")]
    Platform(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, FullscreenError>;
