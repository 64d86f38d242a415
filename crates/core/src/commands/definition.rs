// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command definitions

use crate::catalog::markdown::{write_field, write_list};
use crate::catalog::rules::{check_list, check_text};
use crate::catalog::{Catalog, Definition, ValidateOptions};
use serde::{Deserialize, Serialize};

/// Catalog of user-invokable commands
pub type CommandRegistry = Catalog<CommandDefinition>;

/// Documentation metadata for one user command
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDefinition {
    /// What the user types, e.g. `dwhelp`
    pub name: String,
    pub description: String,
    /// Usage line, e.g. `dwhelp <command>`
    #[serde(default)]
    pub syntax: String,
    #[serde(default)]
    pub examples: Vec<String>,
    /// Module that implements the command
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default)]
    pub notes: Vec<String>,
}

impl CommandDefinition {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        syntax: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            syntax: syntax.into(),
            ..Self::default()
        }
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.examples.push(example.into());
        self
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

impl Definition for CommandDefinition {
    const KIND: &'static str = "command";
    const TITLE: &'static str = "DWKit Command Registry";

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn check_fields(&self, options: &ValidateOptions, issues: &mut Vec<String>) {
        if options.strict {
            check_text("syntax", &self.syntax, issues);
        }
        check_list("examples", &self.examples, issues);
        check_list("notes", &self.notes, issues);
        if let Some(owner) = &self.owner {
            check_text("owner", owner, issues);
        }
    }

    fn write_markdown(&self, out: &mut String) {
        write_field(out, "Description", &self.description);
        write_field(out, "Syntax", &self.syntax);
        write_list(out, "Examples", &self.examples);
        write_field(out, "Owner", self.owner.as_deref().unwrap_or_default());
        write_list(out, "Notes", &self.notes);
    }
}
