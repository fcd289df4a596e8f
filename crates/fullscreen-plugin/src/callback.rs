// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Callback side of a request: where responses for one dispatch are sent.

use fullscreen_core::{Payload, Response};

/// Receives the responses of a single dispatch, in order.
pub trait CallbackContext {
    fn send(&mut self, response: Response);

    fn success(&mut self) {
        self.send(Response::success());
    }

    fn success_with(&mut self, payload: Payload) {
        self.send(Response::with_payload(payload));
    }

    fn error(&mut self, message: &str) {
        self.send(Response::error(message));
    }
}

/// Buffers responses so they can cross the JNI boundary as one JSON document.
#[derive(Debug, Default)]
pub struct CollectingCallback {
    responses: Vec<Response>,
}

impl CollectingCallback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn responses(&self) -> &[Response] {
        &self.responses
    }

    pub fn into_responses(self) -> Vec<Response> {
        self.responses
    }
}

impl CallbackContext for CollectingCallback {
    fn send(&mut self, response: Response) {
        self.responses.push(response);
    }
}
