// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Bridge configuration.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::ApiLevel;

/// Settings that tune the dispatcher. Missing JSON fields take defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Minimum API level for `isSupported` and the non-immersive actions.
    pub min_supported_api: ApiLevel,
    /// Minimum API level for `isImmersiveModeSupported` and `immersiveMode`.
    pub min_immersive_api: ApiLevel,
    /// `sticky` value used when `immersiveMode` is called without arguments.
    pub default_sticky: bool,
    /// Send `showSystemUI`'s `true` result followed by a second, void success,
    /// for JavaScript callers written against the two-message behaviour.
    pub legacy_show_ack: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            min_supported_api: ApiLevel::ICE_CREAM_SANDWICH,
            min_immersive_api: ApiLevel::KITKAT,
            default_sticky: true,
            legacy_show_ack: false,
        }
    }
}

impl BridgeConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_platform_gates() {
        let config = BridgeConfig::default();
        assert_eq!(config.min_supported_api, ApiLevel(14));
        assert_eq!(config.min_immersive_api, ApiLevel(19));
        assert!(config.default_sticky);
        assert!(!config.legacy_show_ack);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = BridgeConfig::from_json(r#"{"legacy_show_ack": true}"#).unwrap();
        assert!(config.legacy_show_ack);
        assert_eq!(config.min_immersive_api, ApiLevel::KITKAT);
    }

    #[test]
    fn api_gates_read_as_plain_numbers() {
        let config = BridgeConfig::from_json(r#"{"min_immersive_api": 21}"#).unwrap();
        assert_eq!(config.min_immersive_api, ApiLevel(21));
        assert_eq!(config.min_supported_api, ApiLevel::ICE_CREAM_SANDWICH);
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        let err = BridgeConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, crate::FullscreenError::Serialization(_)));
    }
}
