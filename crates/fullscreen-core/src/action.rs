// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Action vocabulary and the JSON wire format exchanged with the hybrid layer.
//
// A request is an action name plus a JSON array of arguments. A dispatch
// produces an `Outcome`: whether the action was recognised, and the ordered
// responses that were sent on its callback.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{FullscreenError, Result};

/// Every action the hybrid layer may invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    IsSupported,
    IsImmersiveModeSupported,
    ImmersiveWidth,
    ImmersiveHeight,
    HideSystemUi,
    ShowSystemUi,
    ShowUnderSystemUi,
    ImmersiveMode,
}

impl Action {
    pub const ALL: [Action; 8] = [
        Action::IsSupported,
        Action::IsImmersiveModeSupported,
        Action::ImmersiveWidth,
        Action::ImmersiveHeight,
        Action::HideSystemUi,
        Action::ShowSystemUi,
        Action::ShowUnderSystemUi,
        Action::ImmersiveMode,
    ];

    /// Resolve a wire name. Names are case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.name() == name)
    }

    /// Wire name used by the JavaScript layer.
    pub fn name(self) -> &'static str {
        match self {
            Action::IsSupported => "isSupported",
            Action::IsImmersiveModeSupported => "isImmersiveModeSupported",
            Action::ImmersiveWidth => "immersiveWidth",
            Action::ImmersiveHeight => "immersiveHeight",
            Action::HideSystemUi => "hideSystemUI",
            Action::ShowSystemUi => "showSystemUI",
            Action::ShowUnderSystemUi => "showUnderSystemUI",
            Action::ImmersiveMode => "immersiveMode",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Read the optional `sticky` argument of `immersiveMode`.
///
/// Accepts a JSON boolean or the strings `"true"` / `"false"` in any case,
/// the same coercion a JSON array applies when asked for a boolean. An absent
/// argument yields `default`.
pub fn sticky_arg(args: &[Value], default: bool) -> Result<bool> {
    match args.first() {
        None => Ok(default),
        Some(Value::Bool(sticky)) => Ok(*sticky),
        Some(Value::String(s)) if s.eq_ignore_ascii_case("true") => Ok(true),
        Some(Value::String(s)) if s.eq_ignore_ascii_case("false") => Ok(false),
        Some(other) => Err(FullscreenError::InvalidArgument(format!(
            "JSONArray[0] is not a boolean: {other}"
        ))),
    }
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// A request from the hybrid layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub action: String,
    #[serde(default)]
    pub args: Vec<Value>,
}

impl Request {
    pub fn new(action: impl Into<String>, args: Vec<Value>) -> Self {
        Self {
            action: action.into(),
            args,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Scalar payload carried by a success response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Payload {
    Bool(bool),
    Int(i32),
}

/// One message sent back over the callback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Response {
    Ok {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        payload: Option<Payload>,
    },
    Error {
        message: String,
    },
}

impl Response {
    pub fn success() -> Self {
        Response::Ok { payload: None }
    }

    pub fn with_payload(payload: Payload) -> Self {
        Response::Ok {
            payload: Some(payload),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Response::Error {
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Response::Error { .. })
    }
}

/// Result of one dispatch as seen by the JNI boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// `false` only when the action name was not recognised.
    pub handled: bool,
    pub responses: Vec<Response>,
}

impl Outcome {
    pub fn not_handled() -> Self {
        Self {
            handled: false,
            responses: Vec::new(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn every_action_resolves_from_its_name() {
        for action in Action::ALL {
            assert_eq!(Action::from_name(action.name()), Some(action));
        }
    }

    #[test]
    fn names_are_case_sensitive() {
        assert_eq!(Action::from_name("hideSystemUi"), None);
        assert_eq!(Action::from_name("HIDESYSTEMUI"), None);
        assert_eq!(Action::from_name(""), None);
    }

    #[test]
    fn sticky_defaults_when_absent() {
        assert!(sticky_arg(&[], true).unwrap());
        assert!(!sticky_arg(&[], false).unwrap());
    }

    #[test]
    fn sticky_accepts_booleans_and_boolean_strings() {
        assert!(!sticky_arg(&[json!(false)], true).unwrap());
        assert!(sticky_arg(&[json!("TRUE")], false).unwrap());
        assert!(!sticky_arg(&[json!("False")], true).unwrap());
    }

    #[test]
    fn sticky_rejects_other_values() {
        for bad in [json!(1), json!(null), json!("yes"), json!({})] {
            let err = sticky_arg(&[bad], true).unwrap_err();
            assert!(matches!(err, FullscreenError::InvalidArgument(_)));
        }
    }

    #[test]
    fn sticky_ignores_trailing_arguments() {
        assert!(!sticky_arg(&[json!(false), json!("extra")], true).unwrap());
    }

    #[test]
    fn request_args_default_to_empty() {
        let req = Request::from_json(r#"{"action":"isSupported"}"#).unwrap();
        assert_eq!(req, Request::new("isSupported", vec![]));
    }

    #[test]
    fn response_wire_shape() {
        let ok = serde_json::to_value(Response::with_payload(Payload::Int(1080))).unwrap();
        assert_eq!(ok, json!({"status": "ok", "payload": 1080}));

        let void = serde_json::to_value(Response::success()).unwrap();
        assert_eq!(void, json!({"status": "ok"}));

        let err = serde_json::to_value(Response::error("Not supported")).unwrap();
        assert_eq!(err, json!({"status": "error", "message": "Not supported"}));
    }

    #[test]
    fn not_handled_outcome_serialises_without_responses() {
        let json = Outcome::not_handled().to_json().unwrap();
        assert_eq!(json, r#"{"handled":false,"responses":[]}"#);
    }
}
