// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event bus for routing payloads to registered subscribers
//!
//! Delivery is synchronous. Each `emit` copies the subscriber list before
//! invoking anything and releases the lock, so handlers may subscribe,
//! unsubscribe, register, or emit again without affecting the round in
//! progress.

use super::definition::EventRegistry;
use super::subscription::{Handler, HandlerError, Subscription, SubscriptionToken};
use crate::error::BusError;
use serde::Serialize;
use serde_json::Value;
use std::any::Any;
use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex, MutexGuard};

/// Outcome of one `emit` call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmitReport {
    /// True when the name was accepted and no handler failed
    pub ok: bool,
    /// Handlers that completed without error
    pub delivered: usize,
    /// The rejection reason, or one `token <n>: <error>` entry per failed handler
    pub errors: Vec<String>,
}

impl EmitReport {
    fn rejected(reason: String) -> Self {
        Self {
            ok: false,
            delivered: 0,
            errors: vec![reason],
        }
    }
}

/// Cumulative counters since the bus was created
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BusStats {
    /// Emits whose name passed validation
    pub emitted: u64,
    pub delivered: u64,
    pub handler_errors: u64,
    pub subscriber_count: usize,
    pub events_with_subscribers: usize,
}

#[derive(Default)]
struct BusState {
    last_token: u64,
    by_token: HashMap<SubscriptionToken, Subscription>,
    /// Tokens per event in subscription order; empty buckets are removed
    by_event: HashMap<String, Vec<SubscriptionToken>>,
    emitted: u64,
    delivered: u64,
    handler_errors: u64,
}

/// Publish/subscribe dispatcher gated by an [`EventRegistry`]
pub struct EventBus {
    registry: EventRegistry,
    state: Arc<Mutex<BusState>>,
}

impl EventBus {
    pub fn new(registry: EventRegistry) -> Self {
        Self {
            registry,
            state: Arc::new(Mutex::new(BusState::default())),
        }
    }

    pub fn registry(&self) -> &EventRegistry {
        &self.registry
    }

    /// Subscribe `handler` to a registered event name
    pub fn on<F>(&self, event_name: &str, handler: F) -> Result<SubscriptionToken, BusError>
    where
        F: Fn(&Value, &str, SubscriptionToken) -> Result<(), HandlerError> + Send + Sync + 'static,
    {
        self.check_name(event_name)?;

        let mut state = self.lock();
        state.last_token += 1;
        let token = SubscriptionToken::new(state.last_token);
        state.by_token.insert(
            token,
            Subscription {
                event_name: event_name.to_string(),
                handler: Arc::new(handler),
            },
        );
        state
            .by_event
            .entry(event_name.to_string())
            .or_default()
            .push(token);

        tracing::debug!(event = event_name, %token, "subscribed");
        Ok(token)
    }

    /// Remove a subscription; an unknown or already-removed token is an error
    pub fn off(&self, token: SubscriptionToken) -> Result<(), BusError> {
        let mut state = self.lock();
        let sub = state
            .by_token
            .remove(&token)
            .ok_or(BusError::UnknownToken(token))?;

        let now_empty = match state.by_event.get_mut(&sub.event_name) {
            Some(bucket) => {
                bucket.retain(|t| *t != token);
                bucket.is_empty()
            }
            None => false,
        };
        if now_empty {
            state.by_event.remove(&sub.event_name);
        }

        tracing::debug!(event = %sub.event_name, %token, "unsubscribed");
        Ok(())
    }

    /// Deliver `payload` to every current subscriber of `event_name`
    ///
    /// Handler failures (returned errors and panics) are isolated: the rest
    /// of the round still runs and the failure is reported in the result.
    pub fn emit(&self, event_name: &str, payload: &Value) -> EmitReport {
        if let Err(e) = self.check_name(event_name) {
            tracing::debug!(event = event_name, error = %e, "emit rejected");
            return EmitReport::rejected(e.to_string());
        }

        let snapshot: Vec<(SubscriptionToken, Handler)> = {
            let mut guard = self.lock();
            guard.emitted += 1;
            let state = &*guard;
            state
                .by_event
                .get(event_name)
                .map(|tokens| {
                    tokens
                        .iter()
                        .filter_map(|t| {
                            state
                                .by_token
                                .get(t)
                                .map(|sub| (*t, Arc::clone(&sub.handler)))
                        })
                        .collect()
                })
                .unwrap_or_default()
        };

        tracing::debug!(
            event = event_name,
            subscribers = snapshot.len(),
            "emitting"
        );

        let mut delivered = 0;
        let mut errors = Vec::new();

        for (token, handler) in snapshot {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
                handler(payload, event_name, token)
            }));

            let failure = match outcome {
                Ok(Ok(())) => None,
                Ok(Err(e)) => Some(e.to_string()),
                Err(panic) => Some(format!("handler panicked: {}", panic_message(&*panic))),
            };

            let mut state = self.lock();
            match failure {
                None => {
                    delivered += 1;
                    state.delivered += 1;
                }
                Some(error) => {
                    state.handler_errors += 1;
                    tracing::warn!(event = event_name, %token, %error, "handler failed");
                    errors.push(format!("token {}: {}", token, error));
                }
            }
        }

        EmitReport {
            ok: errors.is_empty(),
            delivered,
            errors,
        }
    }

    pub fn stats(&self) -> BusStats {
        let state = self.lock();
        BusStats {
            emitted: state.emitted,
            delivered: state.delivered,
            handler_errors: state.handler_errors,
            subscriber_count: state.by_token.len(),
            events_with_subscribers: state.by_event.len(),
        }
    }

    /// Active subscriptions to `event_name`, in delivery order
    pub fn subscriptions(&self, event_name: &str) -> Vec<SubscriptionToken> {
        self.lock()
            .by_event
            .get(event_name)
            .cloned()
            .unwrap_or_default()
    }

    pub fn subscriber_count(&self, event_name: &str) -> usize {
        self.lock().by_event.get(event_name).map_or(0, Vec::len)
    }

    fn check_name(&self, event_name: &str) -> Result<(), BusError> {
        if event_name.is_empty() {
            return Err(BusError::EmptyName);
        }
        if !event_name.starts_with(self.registry.prefix()) {
            return Err(BusError::BadPrefix {
                prefix: self.registry.prefix().to_string(),
                name: event_name.to_string(),
            });
        }
        if !self.registry.has(event_name) {
            return Err(BusError::NotRegistered(event_name.to_string()));
        }
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, BusState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
            state: Arc::clone(&self.state),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

#[cfg(test)]
#[path = "bus_tests.rs"]
mod tests;
