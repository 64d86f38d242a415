// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `dwkit.toml` configuration
//!
//! ```toml
//! [identity]
//! event_prefix = "DWKit:"
//!
//! [catalog]
//! builtin = true
//! files = ["catalogs/extra.toml"]
//! ```
//!
//! Relative catalog paths resolve against the config file's directory.

use crate::parser::{parse_catalog_file, ParseError};
use dwkit_core::commands::seed_commands;
use dwkit_core::events::seed_events;
use dwkit_core::{CatalogError, CommandRegistry, EventRegistry, Identity};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "dwkit.toml";

/// Errors that can occur while loading configuration or building registries
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", .path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Where registry content comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Include the kit's built-in events and commands
    pub builtin: bool,
    /// Extra catalog files, loaded in order after the built-ins
    pub files: Vec<PathBuf>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            builtin: true,
            files: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub identity: Identity,
    pub catalog: CatalogConfig,
}

impl Config {
    /// Load config from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        let config = Self::from_toml(&content, base_dir).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse config content, resolving relative catalog paths against `base_dir`
    pub fn from_toml(content: &str, base_dir: &Path) -> Result<Self, toml::de::Error> {
        let mut config: Config = toml::from_str(content)?;
        for file in &mut config.catalog.files {
            if file.is_relative() {
                *file = base_dir.join(&*file);
            }
        }
        Ok(config)
    }

    /// Load `./dwkit.toml`, then `<config dir>/dwkit/dwkit.toml`, else defaults
    pub fn discover() -> Result<Self, ConfigError> {
        match Self::candidates().into_iter().find(|p| p.is_file()) {
            Some(path) => Self::load(&path),
            None => {
                tracing::debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    fn candidates() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("dwkit").join(CONFIG_FILE_NAME));
        }
        paths
    }

    /// Build both registries from the built-ins and configured catalog files
    pub fn build_registries(&self) -> Result<(EventRegistry, CommandRegistry), ConfigError> {
        let events = self.identity.event_registry();
        let commands = self.identity.command_registry();

        if self.catalog.builtin {
            seed_events(&events)?;
            seed_commands(&commands)?;
        }
        for path in &self.catalog.files {
            parse_catalog_file(path)?.load_into(&events, &commands)?;
        }

        tracing::debug!(
            events = events.len(),
            commands = commands.len(),
            "registries ready"
        );
        Ok((events, commands))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
