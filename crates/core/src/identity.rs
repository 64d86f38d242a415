// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Namespacing constants shared by the registries and the bus

use crate::commands::CommandRegistry;
use crate::events::EventRegistry;
use serde::{Deserialize, Serialize};

const PACKAGE_ID: &str = "dwkit";
const EVENT_PREFIX: &str = "DWKit:";
const COMMAND_PREFIX: &str = "dw";

/// Package identity: the id and the name prefixes every definition must carry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Identity {
    pub package_id: String,
    /// Required leading text of every event name (e.g. `DWKit:`)
    pub event_prefix: String,
    /// Required leading text of every command name (e.g. `dw`)
    pub command_prefix: String,
}

impl Identity {
    /// The kit's built-in identity
    pub fn dwkit() -> Self {
        Self {
            package_id: PACKAGE_ID.to_string(),
            event_prefix: EVENT_PREFIX.to_string(),
            command_prefix: COMMAND_PREFIX.to_string(),
        }
    }

    /// Empty event registry bound to this identity's event prefix
    pub fn event_registry(&self) -> EventRegistry {
        EventRegistry::new(&self.event_prefix)
    }

    /// Empty command registry bound to this identity's command prefix
    pub fn command_registry(&self) -> CommandRegistry {
        CommandRegistry::new(&self.command_prefix)
    }
}

impl Default for Identity {
    fn default() -> Self {
        Self::dwkit()
    }
}
