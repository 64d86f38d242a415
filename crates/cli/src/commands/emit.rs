// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `dwkit emit <event>` - Emit an event through a fresh bus

use crate::error::CliError;
use crate::output::{self, OutputFormat};
use anyhow::Context;
use clap::Args;
use dwkit_core::{BusStats, EmitReport, EventBus, EventRegistry};
use serde::Serialize;
use std::fmt;
use std::process::ExitCode;

#[derive(Args)]
pub struct EmitArgs {
    /// Event name
    pub event: String,

    /// Event payload as JSON
    #[arg(short, long, default_value = "{}")]
    pub data: String,

    /// Attach a subscriber that prints each delivery
    #[arg(long)]
    pub echo: bool,
}

#[derive(Serialize)]
struct EmitOutcome {
    event: String,
    report: EmitReport,
    stats: BusStats,
}

impl fmt::Display for EmitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {}: delivered to {} subscriber(s)",
            if self.report.ok { "OK" } else { "FAILED" },
            self.event,
            self.report.delivered
        )?;
        for error in &self.report.errors {
            writeln!(f, "  error: {}", error)?;
        }
        writeln!(
            f,
            "stats: emitted={} delivered={} handler_errors={} subscribers={}",
            self.stats.emitted,
            self.stats.delivered,
            self.stats.handler_errors,
            self.stats.subscriber_count
        )
    }
}

pub fn handle(
    args: EmitArgs,
    registry: EventRegistry,
    format: OutputFormat,
) -> anyhow::Result<ExitCode> {
    let payload: serde_json::Value =
        serde_json::from_str(&args.data).context("--data is not valid JSON")?;

    let bus = EventBus::new(registry);

    if args.echo {
        // Echo lines would corrupt JSON output, so they go to stderr there
        let to_stderr = format == OutputFormat::Json;
        bus.on(&args.event, move |payload, name, token| {
            if to_stderr {
                eprintln!("[{}] {} {}", token, name, payload);
            } else {
                println!("[{}] {} {}", token, name, payload);
            }
            Ok(())
        })
        .map_err(|e| CliError::emit_rejected(&args.event, &e.to_string()))?;
    }

    let report = bus.emit(&args.event, &payload);
    tracing::debug!(event = %args.event, delivered = report.delivered, "emit finished");
    if bus.stats().emitted == 0 {
        let reason = report.errors.join("; ");
        return Err(CliError::emit_rejected(&args.event, &reason).into());
    }

    let ok = report.ok;
    let outcome = EmitOutcome {
        event: args.event,
        report,
        stats: bus.stats(),
    };
    output::print(&outcome, format)?;

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
