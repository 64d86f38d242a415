// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event definitions

use crate::catalog::markdown::{write_field, write_list, write_map};
use crate::catalog::rules::{check_list, check_map};
use crate::catalog::{Catalog, Definition, ValidateOptions};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Catalog of permitted event names
pub type EventRegistry = Catalog<EventDefinition>;

/// Schema metadata for one permitted event name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDefinition {
    /// Fully-qualified name, e.g. `DWKit:Service:Presence:Updated`
    pub name: String,
    pub description: String,
    /// Field name to informal type description; not enforced at emit time
    #[serde(default)]
    pub payload_schema: BTreeMap<String, String>,
    #[serde(default)]
    pub producers: Vec<String>,
    #[serde(default)]
    pub consumers: Vec<String>,
    #[serde(default)]
    pub notes: Vec<String>,
}

impl EventDefinition {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn with_field(mut self, field: impl Into<String>, ty: impl Into<String>) -> Self {
        self.payload_schema.insert(field.into(), ty.into());
        self
    }

    pub fn with_producer(mut self, producer: impl Into<String>) -> Self {
        self.producers.push(producer.into());
        self
    }

    pub fn with_consumer(mut self, consumer: impl Into<String>) -> Self {
        self.consumers.push(consumer.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

impl Definition for EventDefinition {
    const KIND: &'static str = "event";
    const TITLE: &'static str = "DWKit Event Registry";

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn check_fields(&self, options: &ValidateOptions, issues: &mut Vec<String>) {
        check_map("payload_schema", &self.payload_schema, issues);
        check_list("producers", &self.producers, issues);
        check_list("consumers", &self.consumers, issues);
        check_list("notes", &self.notes, issues);

        if options.requires_producers() && self.producers.is_empty() {
            issues.push("producers must list at least one producer".to_string());
        }
    }

    fn write_markdown(&self, out: &mut String) {
        write_field(out, "Description", &self.description);
        write_map(out, "PayloadSchema", &self.payload_schema);
        write_list(out, "Producers", &self.producers);
        write_list(out, "Consumers", &self.consumers);
        write_list(out, "Notes", &self.notes);
    }
}

#[cfg(test)]
#[path = "definition_tests.rs"]
mod tests;
