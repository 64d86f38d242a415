// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! dwkit-core: Event and command catalogs with an in-process event bus
//!
//! This crate provides:
//! - `Identity` - Package id and the name prefixes definitions must carry
//! - `Catalog` - Append-only, validated registry of named definitions
//! - `EventRegistry` / `CommandRegistry` - The two catalog kinds
//! - `EventBus` - Synchronous publish/subscribe gated by the event registry

pub mod catalog;
pub mod commands;
pub mod error;
pub mod events;
pub mod identity;

pub use catalog::{Catalog, Definition, Issue, MarkdownOptions, ValidateOptions, ValidationReport};
pub use commands::{CommandDefinition, CommandRegistry};
pub use error::{BusError, CatalogError};
pub use events::{
    BusStats, EmitReport, EventBus, EventDefinition, EventRegistry, HandlerError,
    SubscriptionToken,
};
pub use identity::Identity;
