// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Built-in command catalog shipped with the kit

use super::definition::{CommandDefinition, CommandRegistry};
use crate::error::CatalogError;

/// The kit's own user commands
pub fn builtin_commands() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "dwboot",
            "Show which kit modules loaded and any load errors.",
            "dwboot",
        )
        .with_example("dwboot")
        .with_owner("dwkit.loader.init"),
        CommandDefinition::new("dwcommands", "List every registered command.", "dwcommands [md]")
            .with_example("dwcommands")
            .with_example("dwcommands md")
            .with_owner("dwkit.bus.command_registry")
            .with_note("`md` prints the Markdown export instead of the summary list."),
        CommandDefinition::new(
            "dwevent",
            "Show one registered event and its payload schema.",
            "dwevent <EventName>",
        )
        .with_example("dwevent DWKit:Service:Presence:Updated")
        .with_owner("dwkit.bus.event_registry"),
        CommandDefinition::new("dwevents", "List every registered event.", "dwevents [md]")
            .with_example("dwevents")
            .with_example("dwevents md")
            .with_owner("dwkit.bus.event_registry"),
        CommandDefinition::new("dwhelp", "Show detailed help for one command.", "dwhelp <command>")
            .with_example("dwhelp dwevents")
            .with_owner("dwkit.bus.command_registry"),
        CommandDefinition::new(
            "dwid",
            "Print the kit identity (package id and name prefixes).",
            "dwid",
        )
        .with_example("dwid")
        .with_owner("dwkit.core.identity"),
        CommandDefinition::new(
            "dwinfo",
            "Print runtime information about the client and the kit.",
            "dwinfo",
        )
        .with_example("dwinfo")
        .with_owner("dwkit.core.runtime_baseline"),
        CommandDefinition::new(
            "dwtest",
            "Run the kit self-test and registry validation.",
            "dwtest [quiet]",
        )
        .with_example("dwtest")
        .with_example("dwtest quiet")
        .with_owner("dwkit.tests.self_test_runner")
        .with_note("Validation failures are listed but do not stop the remaining checks."),
        CommandDefinition::new(
            "dwversion",
            "Print the kit version and module versions.",
            "dwversion",
        )
        .with_example("dwversion")
        .with_owner("dwkit.core.identity"),
    ]
}

/// Load the built-in commands into `registry`
pub fn seed_commands(registry: &CommandRegistry) -> Result<(), CatalogError> {
    for def in builtin_commands() {
        let key = def.name.clone();
        registry.seed(key, def)?;
    }
    Ok(())
}
