// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event catalog and publish/subscribe bus
//!
//! This module provides:
//! - `EventRegistry` - Catalog of permitted event names and payload schemas
//! - `EventBus` - Synchronous dispatch to subscribers of registered names
//! - `SubscriptionToken` - Handle used to unsubscribe

mod builtin;
mod bus;
mod definition;
mod subscription;

pub use builtin::{builtin_events, seed_events};
pub use bus::{BusStats, EmitReport, EventBus};
pub use definition::{EventDefinition, EventRegistry};
pub use subscription::{Handler, HandlerError, SubscriptionToken};
