// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subscription handles and handler types

use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Error a handler returns to report a failed delivery
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// Callback invoked with `(payload, event_name, token)` on every delivery
pub type Handler =
    Arc<dyn Fn(&Value, &str, SubscriptionToken) -> Result<(), HandlerError> + Send + Sync>;

/// Handle returned by `EventBus::on`; the only way to unsubscribe
///
/// Tokens are issued in increasing order starting at 1 and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SubscriptionToken(u64);

impl SubscriptionToken {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SubscriptionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A handler bound to one event name
#[derive(Clone)]
pub(crate) struct Subscription {
    pub event_name: String,
    pub handler: Handler,
}
