// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Markdown writers for catalog documentation sync
//!
//! Output is plain Markdown: nothing is HTML-escaped, but every embedded
//! string has its line endings normalized to `\n`.

use chrono::{DateTime, SecondsFormat, Utc};
use std::collections::BTreeMap;
use std::fmt::Write;

/// Options for `Catalog::to_markdown`
#[derive(Debug, Clone, Default)]
pub struct MarkdownOptions {
    /// Adds a `_Generated: <timestamp>_` line under the heading
    pub generated_at: Option<DateTime<Utc>>,
}

impl MarkdownOptions {
    pub fn generated_now() -> Self {
        Self {
            generated_at: Some(Utc::now()),
        }
    }
}

/// Convert `\r\n` and lone `\r` to `\n`
pub fn normalize(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

pub(crate) fn write_header(out: &mut String, title: &str, options: &MarkdownOptions) {
    let _ = writeln!(out, "# {}", normalize(title));
    out.push('\n');
    if let Some(at) = options.generated_at {
        let _ = writeln!(
            out,
            "_Generated: {}_",
            at.to_rfc3339_opts(SecondsFormat::Secs, true)
        );
        out.push('\n');
    }
}

pub(crate) fn write_section_heading(out: &mut String, name: &str) {
    let _ = writeln!(out, "### {}", normalize(name));
    out.push('\n');
}

/// `- Label: value`, or `(none)` when empty
pub fn write_field(out: &mut String, label: &str, value: &str) {
    let value = if value.is_empty() {
        "(none)".to_string()
    } else {
        normalize(value)
    };
    let _ = writeln!(out, "- {}: {}", label, value);
}

/// `- Label:` followed by one nested bullet per item
pub fn write_list(out: &mut String, label: &str, items: &[String]) {
    if items.is_empty() {
        let _ = writeln!(out, "- {}: (none)", label);
        return;
    }
    let _ = writeln!(out, "- {}:", label);
    for item in items {
        let _ = writeln!(out, "  - {}", normalize(item));
    }
}

/// `- Label:` followed by one nested `` `key`: value `` bullet per entry
pub fn write_map(out: &mut String, label: &str, map: &BTreeMap<String, String>) {
    if map.is_empty() {
        let _ = writeln!(out, "- {}: (none)", label);
        return;
    }
    let _ = writeln!(out, "- {}:", label);
    for (key, value) in map {
        let _ = writeln!(out, "  - `{}`: {}", normalize(key), normalize(value));
    }
}
