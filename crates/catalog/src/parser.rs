// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Catalog TOML parsing
//!
//! ```toml
//! [event."DWKit:Test:Ping"]
//! description = "ping test"
//! producers = ["testmod"]
//! [event."DWKit:Test:Ping".payload_schema]
//! x = "number"
//!
//! [command.dwping]
//! description = "Send a ping"
//! syntax = "dwping"
//! ```
//!
//! Entries are keyed by their table name. An explicit `name` field wins
//! over the key so that mismatches reach `validate_all` instead of being
//! silently corrected.

use dwkit_core::{CatalogError, CommandDefinition, CommandRegistry, EventDefinition, EventRegistry};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use toml::{Table, Value};

const EVENT_FIELDS: &[&str] = &[
    "name",
    "description",
    "payload_schema",
    "producers",
    "consumers",
    "notes",
];
const COMMAND_FIELDS: &[&str] = &["name", "description", "syntax", "examples", "owner", "notes"];

/// Errors that can occur during catalog parsing
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid format: {0}")]
    InvalidFormat(String),
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Definitions read from one catalog file, keyed as written
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogFile {
    pub events: Vec<(String, EventDefinition)>,
    pub commands: Vec<(String, CommandDefinition)>,
}

impl CatalogFile {
    /// Seed both registries; a key already present in either is an error
    pub fn load_into(
        &self,
        events: &EventRegistry,
        commands: &CommandRegistry,
    ) -> Result<(), CatalogError> {
        for (key, def) in &self.events {
            events.seed(key.clone(), def.clone())?;
        }
        for (key, def) in &self.commands {
            commands.seed(key.clone(), def.clone())?;
        }
        Ok(())
    }
}

/// Parse a catalog from TOML content
pub fn parse_catalog(content: &str) -> Result<CatalogFile, ParseError> {
    let raw: Value = toml::from_str(content)?;
    let table = raw
        .as_table()
        .ok_or_else(|| ParseError::InvalidFormat("root must be a table".to_string()))?;

    if let Some(section) = table.keys().find(|k| *k != "event" && *k != "command") {
        return Err(ParseError::InvalidFormat(format!(
            "unknown section: {}",
            section
        )));
    }

    let mut catalog = CatalogFile::default();

    if let Some(events) = table.get("event") {
        for (key, value) in section_table("event", events)? {
            let path = format!("event.{:?}", key);
            catalog.events.push((key.clone(), parse_event(&path, key, value)?));
        }
    }

    if let Some(commands) = table.get("command") {
        for (key, value) in section_table("command", commands)? {
            let path = format!("command.{}", key);
            catalog
                .commands
                .push((key.clone(), parse_command(&path, key, value)?));
        }
    }

    Ok(catalog)
}

/// Read and parse a catalog file
pub fn parse_catalog_file(path: &Path) -> Result<CatalogFile, ParseError> {
    let content = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = parse_catalog(&content)?;
    tracing::debug!(
        path = %path.display(),
        events = catalog.events.len(),
        commands = catalog.commands.len(),
        "parsed catalog file"
    );
    Ok(catalog)
}

fn section_table<'a>(section: &str, value: &'a Value) -> Result<&'a Table, ParseError> {
    value
        .as_table()
        .ok_or_else(|| ParseError::InvalidFormat(format!("{} must be a table", section)))
}

fn parse_event(path: &str, key: &str, value: &Value) -> Result<EventDefinition, ParseError> {
    let table = entry_table(path, value, EVENT_FIELDS)?;

    Ok(EventDefinition {
        name: string_field(path, table, "name")?.unwrap_or_else(|| key.to_string()),
        description: string_field(path, table, "description")?.unwrap_or_default(),
        payload_schema: string_map(path, table, "payload_schema")?,
        producers: string_list(path, table, "producers")?,
        consumers: string_list(path, table, "consumers")?,
        notes: string_list(path, table, "notes")?,
    })
}

fn parse_command(path: &str, key: &str, value: &Value) -> Result<CommandDefinition, ParseError> {
    let table = entry_table(path, value, COMMAND_FIELDS)?;

    Ok(CommandDefinition {
        name: string_field(path, table, "name")?.unwrap_or_else(|| key.to_string()),
        description: string_field(path, table, "description")?.unwrap_or_default(),
        syntax: string_field(path, table, "syntax")?.unwrap_or_default(),
        examples: string_list(path, table, "examples")?,
        owner: string_field(path, table, "owner")?,
        notes: string_list(path, table, "notes")?,
    })
}

/// The entry must be a table containing only `allowed` keys
fn entry_table<'a>(
    path: &str,
    value: &'a Value,
    allowed: &[&str],
) -> Result<&'a Table, ParseError> {
    let table = value
        .as_table()
        .ok_or_else(|| ParseError::InvalidFormat(format!("{} must be a table", path)))?;

    if let Some(unknown) = table.keys().find(|k| !allowed.contains(&k.as_str())) {
        return Err(ParseError::InvalidFormat(format!(
            "{}: unknown field {}",
            path, unknown
        )));
    }
    Ok(table)
}

fn string_field(path: &str, table: &Table, key: &str) -> Result<Option<String>, ParseError> {
    match table.get(key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(ParseError::InvalidFormat(format!(
            "{}.{} must be a string",
            path, key
        ))),
    }
}

fn string_list(path: &str, table: &Table, key: &str) -> Result<Vec<String>, ParseError> {
    let Some(value) = table.get(key) else {
        return Ok(Vec::new());
    };
    let arr = value.as_array().ok_or_else(|| {
        ParseError::InvalidFormat(format!("{}.{} must be an array of strings", path, key))
    })?;

    arr.iter()
        .enumerate()
        .map(|(i, v)| {
            v.as_str().map(String::from).ok_or_else(|| {
                ParseError::InvalidFormat(format!("{}.{}[{}] must be a string", path, key, i))
            })
        })
        .collect()
}

fn string_map(
    path: &str,
    table: &Table,
    key: &str,
) -> Result<BTreeMap<String, String>, ParseError> {
    let Some(value) = table.get(key) else {
        return Ok(BTreeMap::new());
    };
    let map = value.as_table().ok_or_else(|| {
        ParseError::InvalidFormat(format!("{}.{} must be a table of strings", path, key))
    })?;

    map.iter()
        .map(|(field, v)| {
            v.as_str()
                .map(|s| (field.clone(), s.to_string()))
                .ok_or_else(|| {
                    ParseError::InvalidFormat(format!(
                        "{}.{}.{} must be a string",
                        path, key, field
                    ))
                })
        })
        .collect()
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
