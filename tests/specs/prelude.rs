// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared fixtures for the behavioral specs

#![allow(dead_code)]

use dwkit_core::{EventBus, EventDefinition, EventRegistry, Identity};
use std::sync::{Arc, Mutex};

pub const PING: &str = "DWKit:Test:Ping";
pub const PONG: &str = "DWKit:Test:Pong";

pub fn ping() -> EventDefinition {
    EventDefinition::new(PING, "ping test").with_producer("testmod")
}

/// Fresh registry holding only `DWKit:Test:Ping`
pub fn ping_registry() -> EventRegistry {
    let registry = Identity::dwkit().event_registry();
    registry.register(ping()).unwrap();
    registry
}

pub fn ping_bus() -> EventBus {
    EventBus::new(ping_registry())
}

/// Shared call log written by test handlers
#[derive(Clone, Default)]
pub struct Calls(Arc<Mutex<Vec<String>>>);

impl Calls {
    pub fn push(&self, entry: impl Into<String>) {
        self.0.lock().unwrap().push(entry.into());
    }

    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.0.lock().unwrap())
    }
}
