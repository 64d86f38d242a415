// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Field checks shared by every definition kind

use super::definition::{Definition, ValidateOptions};
use std::collections::BTreeMap;

/// Checks common to all kinds followed by the kind's own field rules
pub(crate) fn check_definition<D: Definition>(
    def: &D,
    prefix: &str,
    options: &ValidateOptions,
) -> Vec<String> {
    let mut issues = Vec::new();

    let name = def.name();
    if name.is_empty() {
        issues.push("name must be a non-empty string".to_string());
    } else if !name.starts_with(prefix) {
        issues.push(format!("name must start with {:?}", prefix));
    }

    if options.require_description && def.description().is_empty() {
        issues.push("description must be a non-empty string".to_string());
    }

    def.check_fields(options, &mut issues);
    issues
}

/// Every element of `items` must be a non-empty string
pub fn check_list(field: &str, items: &[String], issues: &mut Vec<String>) {
    for (i, item) in items.iter().enumerate() {
        if item.is_empty() {
            issues.push(format!("{}[{}] must be a non-empty string", field, i));
        }
    }
}

/// Every key and value of `map` must be a non-empty string
pub fn check_map(field: &str, map: &BTreeMap<String, String>, issues: &mut Vec<String>) {
    for (key, value) in map {
        if key.is_empty() {
            issues.push(format!("{} keys must be non-empty strings", field));
        } else if value.is_empty() {
            issues.push(format!("{}.{} must be a non-empty string", field, key));
        }
    }
}

/// `value` must be non-empty
pub fn check_text(field: &str, value: &str, issues: &mut Vec<String>) {
    if value.is_empty() {
        issues.push(format!("{} must be a non-empty string", field));
    }
}
