// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types returned by the registries and the bus

use crate::events::SubscriptionToken;
use thiserror::Error;

/// Errors returned when mutating a registry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("invalid {kind} {name:?}: {}", .reasons.join("; "))]
    Invalid {
        kind: &'static str,
        name: String,
        reasons: Vec<String>,
    },
    #[error("{kind} already exists: {name}")]
    AlreadyExists { kind: &'static str, name: String },
}

/// Errors returned by `EventBus::on`, `EventBus::off`, and rejected emits
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BusError {
    #[error("eventName must be a non-empty string")]
    EmptyName,
    #[error("eventName must start with {prefix}: {name}")]
    BadPrefix { prefix: String, name: String },
    #[error("eventName not registered: {0}")]
    NotRegistered(String),
    #[error("unknown token: {0}")]
    UnknownToken(SubscriptionToken),
}
