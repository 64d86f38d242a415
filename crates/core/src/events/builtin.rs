// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Built-in event catalog shipped with the kit

use super::definition::{EventDefinition, EventRegistry};
use crate::error::CatalogError;

/// The kit's own event definitions
pub fn builtin_events() -> Vec<EventDefinition> {
    vec![
        EventDefinition::new(
            "DWKit:Boot:Ready",
            "Emitted once after every kit module has finished loading.",
        )
        .with_field("ts", "number (epoch seconds)")
        .with_field("modules", "array of string (loaded module ids)")
        .with_producer("dwkit.loader.init")
        .with_consumer("dwkit.ui.launchpad")
        .with_note("Consumers that load late should check boot state instead of waiting."),
        EventDefinition::new(
            "DWKit:Service:ActionModel:Updated",
            "The action model (known actions and their parameters) changed.",
        )
        .with_field("ts", "number (epoch seconds)")
        .with_field("model", "object (action name -> action record)")
        .with_field("source", "string")
        .with_producer("dwkit.services.action_model_service")
        .with_consumer("dwkit.ui.action_ui"),
        EventDefinition::new(
            "DWKit:Service:Presence:Updated",
            "Presence state (who is online, friends, away flags) changed.",
        )
        .with_field("ts", "number (epoch seconds)")
        .with_field("state", "object (presence snapshot)")
        .with_field("delta", "object (changed keys only)")
        .with_field("source", "string")
        .with_producer("dwkit.services.presence_service")
        .with_consumer("dwkit.ui.presence_ui")
        .with_note("Payload state is a copy; mutating it does not affect the service."),
        EventDefinition::new(
            "DWKit:Service:RoomEntities:Updated",
            "The classified list of entities in the current room changed.",
        )
        .with_field("ts", "number (epoch seconds)")
        .with_field("state", "object (players, mobs, items, unknown)")
        .with_field("source", "string")
        .with_producer("dwkit.services.roomentities_service")
        .with_consumer("dwkit.ui.roomentities_ui"),
        EventDefinition::new(
            "DWKit:Service:ScoreStore:Updated",
            "A new score snapshot was ingested.",
        )
        .with_field("ts", "number (epoch seconds)")
        .with_field("snapshot", "object (parsed score fields)")
        .with_field("source", "string")
        .with_producer("dwkit.services.score_store_service"),
        EventDefinition::new(
            "DWKit:Service:SkillRegistry:Updated",
            "The skill registry (known skills and levels) changed.",
        )
        .with_field("ts", "number (epoch seconds)")
        .with_field("skills", "object (skill name -> level record)")
        .with_field("source", "string")
        .with_producer("dwkit.services.skill_registry_service")
        .with_consumer("dwkit.ui.skills_ui"),
        EventDefinition::new(
            "DWKit:Service:Whoami:Updated",
            "The player's own identity (name, guild, title) changed.",
        )
        .with_field("ts", "number (epoch seconds)")
        .with_field("state", "object (whoami fields)")
        .with_field("source", "string")
        .with_producer("dwkit.services.whoami_service")
        .with_consumer("dwkit.ui.main_ui"),
    ]
}

/// Load the built-in events into `registry`
pub fn seed_events(registry: &EventRegistry) -> Result<(), CatalogError> {
    for def in builtin_events() {
        let key = def.name.clone();
        registry.seed(key, def)?;
    }
    Ok(())
}
