// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `dwkit events` / `dwkit commands` - Inspect, validate and export a registry

use crate::error::CliError;
use crate::output::{self, OutputFormat};
use anyhow::Context;
use clap::{Args, Subcommand};
use dwkit_core::{Catalog, Definition, MarkdownOptions, ValidateOptions, ValidationReport};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommand,
}

#[derive(Subcommand)]
pub enum CatalogCommand {
    /// List every registered name
    List,
    /// Show one definition
    Show {
        /// Registered name
        name: String,
    },
    /// Check every definition against the registry rules
    Validate(ValidateArgs),
    /// Export the registry as Markdown
    Markdown(MarkdownArgs),
}

#[derive(Args)]
pub struct ValidateArgs {
    /// Only structural checks (no producer or syntax requirement)
    #[arg(long)]
    pub lenient: bool,

    /// Allow empty descriptions
    #[arg(long)]
    pub no_require_description: bool,

    /// Require at least one producer regardless of --lenient
    #[arg(long)]
    pub require_producers: Option<bool>,
}

impl ValidateArgs {
    fn options(&self) -> ValidateOptions {
        ValidateOptions {
            strict: !self.lenient,
            require_description: !self.no_require_description,
            require_producers: self.require_producers,
        }
    }
}

#[derive(Args)]
pub struct MarkdownArgs {
    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Omit the generated-at line
    #[arg(long)]
    pub no_timestamp: bool,
}

/// Run a registry subcommand; `group` is the CLI noun (`events`, `commands`)
pub fn handle<D>(
    registry: &Catalog<D>,
    group: &str,
    command: CatalogCommand,
    format: OutputFormat,
) -> anyhow::Result<ExitCode>
where
    D: Definition + Serialize,
{
    match command {
        CatalogCommand::List => {
            let all = registry.list_all();
            output::print(&Listing(&all), format)?;
        }

        CatalogCommand::Show { name } => {
            let def = registry
                .get(&name)
                .ok_or_else(|| CliError::unknown_definition(D::KIND, group, &name))?;
            output::print(&Detail(&def), format)?;
        }

        CatalogCommand::Validate(args) => {
            let report = registry.validate_all(&args.options());
            let summary = ValidationSummary {
                kind: D::KIND,
                checked: registry.len(),
                report: &report,
            };
            output::print(&summary, format)?;
            if !report.passed {
                return Ok(ExitCode::FAILURE);
            }
        }

        CatalogCommand::Markdown(args) => {
            let options = if args.no_timestamp {
                MarkdownOptions::default()
            } else {
                MarkdownOptions::generated_now()
            };
            let markdown = registry.to_markdown(&options);

            match args.output {
                Some(path) => {
                    std::fs::write(&path, &markdown)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    println!("Wrote {} {}s to {}", registry.len(), D::KIND, path.display());
                }
                None => print!("{}", markdown),
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

#[derive(Serialize)]
#[serde(transparent)]
struct Listing<'a, D>(&'a [D]);

impl<D: Definition> fmt::Display for Listing<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No {}s registered", D::KIND);
        }
        for def in self.0 {
            let summary = def.description().lines().next().unwrap_or_default();
            writeln!(f, "{:<40} {}", def.name(), summary)?;
        }
        Ok(())
    }
}

#[derive(Serialize)]
#[serde(transparent)]
struct Detail<'a, D>(&'a D);

impl<D: Definition> fmt::Display for Detail<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut body = String::new();
        self.0.write_markdown(&mut body);
        writeln!(f, "{}", self.0.name())?;
        write!(f, "{}", body)
    }
}

#[derive(Serialize)]
struct ValidationSummary<'a> {
    kind: &'static str,
    checked: usize,
    #[serde(flatten)]
    report: &'a ValidationReport,
}

impl fmt::Display for ValidationSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.report.passed {
            return writeln!(f, "PASS: {} {}s checked, no issues", self.checked, self.kind);
        }
        writeln!(
            f,
            "FAIL: {} issue(s) in {} {}s",
            self.report.issues.len(),
            self.checked,
            self.kind
        )?;
        for issue in &self.report.issues {
            writeln!(f, "  {}", issue)?;
        }
        Ok(())
    }
}
