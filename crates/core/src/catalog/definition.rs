// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Definition trait and validation options

use serde::Serialize;
use std::fmt;

/// A named entry that can live in a [`Catalog`](super::Catalog)
///
/// Name, prefix, description and key checks are shared by every kind;
/// `check_fields` adds the rules specific to one kind.
pub trait Definition: Clone + fmt::Debug + PartialEq + Send + Sync + 'static {
    /// Singular noun used in error messages ("event", "command")
    const KIND: &'static str;
    /// Heading of the Markdown export
    const TITLE: &'static str;

    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// Append one message per kind-specific rule violation
    fn check_fields(&self, options: &ValidateOptions, issues: &mut Vec<String>);

    /// Append the bullet body of this entry's Markdown section
    fn write_markdown(&self, out: &mut String);
}

/// Which checks `validate_all` and `register` enforce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidateOptions {
    pub strict: bool,
    pub require_description: bool,
    /// Overrides the `strict`-derived producer requirement when set
    pub require_producers: Option<bool>,
}

impl ValidateOptions {
    /// Structural checks only: no producer or syntax requirement
    pub fn lenient() -> Self {
        Self {
            strict: false,
            ..Self::default()
        }
    }

    pub fn requires_producers(&self) -> bool {
        self.require_producers.unwrap_or(self.strict)
    }
}

impl Default for ValidateOptions {
    fn default() -> Self {
        Self {
            strict: true,
            require_description: true,
            require_producers: None,
        }
    }
}

/// One rule violation found by `validate_all`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    /// Registry key of the offending entry
    pub name: String,
    pub error: String,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.error)
    }
}

/// Outcome of a `validate_all` pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub passed: bool,
    pub issues: Vec<Issue>,
}

impl ValidationReport {
    pub(crate) fn from_issues(issues: Vec<Issue>) -> Self {
        Self {
            passed: issues.is_empty(),
            issues,
        }
    }
}
