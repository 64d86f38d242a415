// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Name-keyed definition catalogs
//!
//! This module provides:
//! - `Catalog` - Append-only registry of definitions keyed by name
//! - `Definition` - Trait implemented by event and command definitions
//! - `validate_all` - Pure audit pass over every stored entry
//! - `to_markdown` - Deterministic documentation export

mod definition;
pub mod markdown;
pub mod rules;

pub use definition::{Definition, Issue, ValidateOptions, ValidationReport};
pub use markdown::MarkdownOptions;

use crate::error::CatalogError;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

/// Registry of definitions keyed by name
///
/// Clones share state; separate `Catalog::new` instances are isolated.
/// Reads return owned copies, never references into the backing map.
pub struct Catalog<D: Definition> {
    prefix: Arc<str>,
    entries: Arc<RwLock<BTreeMap<String, D>>>,
}

impl<D: Definition> Catalog<D> {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: Arc::from(prefix),
            entries: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }

    /// Name prefix every entry must carry
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn has(&self, name: &str) -> bool {
        !name.is_empty()
            && self
                .entries
                .read()
                .unwrap_or_else(|e| e.into_inner())
                .contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<D> {
        self.entries
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(name)
            .cloned()
    }

    /// All definitions, sorted by name
    pub fn list_all(&self) -> Vec<D> {
        let mut all: Vec<D> = self
            .entries
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .values()
            .cloned()
            .collect();
        all.sort_by(|a, b| a.name().cmp(b.name()));
        all
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Validate and store a definition under its own name (strict rules)
    pub fn register(&self, def: D) -> Result<(), CatalogError> {
        self.register_with(def, &ValidateOptions::default())
    }

    /// Validate with `options` and store a definition under its own name
    ///
    /// The registry is append-only: an existing name is never replaced.
    pub fn register_with(&self, def: D, options: &ValidateOptions) -> Result<(), CatalogError> {
        let reasons = rules::check_definition(&def, &self.prefix, options);
        if !reasons.is_empty() {
            return Err(CatalogError::Invalid {
                kind: D::KIND,
                name: def.name().to_string(),
                reasons,
            });
        }

        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        if entries.contains_key(def.name()) {
            return Err(CatalogError::AlreadyExists {
                kind: D::KIND,
                name: def.name().to_string(),
            });
        }
        tracing::debug!(kind = D::KIND, name = def.name(), "registered");
        entries.insert(def.name().to_string(), def);
        Ok(())
    }

    /// Store static data under `key` without validation
    ///
    /// Used for built-in and file-loaded catalogs; `validate_all` reports
    /// anything wrong with them, including a key that differs from the name.
    pub fn seed(&self, key: impl Into<String>, def: D) -> Result<(), CatalogError> {
        let key = key.into();
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        if entries.contains_key(&key) {
            return Err(CatalogError::AlreadyExists {
                kind: D::KIND,
                name: key,
            });
        }
        entries.insert(key, def);
        Ok(())
    }

    /// Audit every stored entry; never mutates and never prints
    pub fn validate_all(&self, options: &ValidateOptions) -> ValidationReport {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        let mut issues = Vec::new();

        for (key, def) in entries.iter() {
            if key != def.name() {
                issues.push(Issue {
                    name: key.clone(),
                    error: format!("registry key {:?} does not match name {:?}", key, def.name()),
                });
            }
            for error in rules::check_definition(def, &self.prefix, options) {
                issues.push(Issue {
                    name: key.clone(),
                    error,
                });
            }
        }

        ValidationReport::from_issues(issues)
    }

    /// Render the whole catalog, sorted by name
    pub fn to_markdown(&self, options: &MarkdownOptions) -> String {
        let mut out = String::new();
        markdown::write_header(&mut out, D::TITLE, options);

        for def in self.list_all() {
            markdown::write_section_heading(&mut out, def.name());
            def.write_markdown(&mut out);
            out.push('\n');
        }

        out
    }
}

impl<D: Definition> Clone for Catalog<D> {
    fn clone(&self) -> Self {
        Self {
            prefix: Arc::clone(&self.prefix),
            entries: Arc::clone(&self.entries),
        }
    }
}

impl<D: Definition> std::fmt::Debug for Catalog<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("kind", &D::KIND)
            .field("prefix", &self.prefix)
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
