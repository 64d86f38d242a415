// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use dwkit_catalog::Config;
use dwkit_core::{EventBus, ValidateOptions};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

#[test]
fn config_with_extra_catalog_feeds_a_working_bus() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("extra.toml"),
        r#"
[event."DWKit:Test:Ping"]
description = "ping test"
producers = ["testmod"]

[command.dwping]
description = "Send a ping"
syntax = "dwping"
"#,
    )
    .unwrap();
    let config = Config::from_toml("[catalog]\nfiles = [\"extra.toml\"]\n", dir.path()).unwrap();

    let (events, commands) = config.build_registries().unwrap();
    assert!(events.has("DWKit:Boot:Ready"));
    assert!(events.has("DWKit:Test:Ping"));
    assert!(commands.has("dwping"));
    assert!(events.validate_all(&ValidateOptions::default()).passed);
    assert!(commands.validate_all(&ValidateOptions::default()).passed);

    let bus = EventBus::new(events);
    bus.on("DWKit:Test:Ping", |_, _, _| Ok(())).unwrap();
    assert_eq!(bus.emit("DWKit:Test:Ping", &json!({"x": 1})).delivered, 1);
}

#[test]
fn catalog_conflicting_with_builtins_fails_to_load() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("dup.toml"),
        "[event.\"DWKit:Boot:Ready\"]\ndescription = \"again\"\n",
    )
    .unwrap();
    let config = Config::from_toml("[catalog]\nfiles = [\"dup.toml\"]\n", dir.path()).unwrap();

    let err = config.build_registries().unwrap_err();
    assert!(err.to_string().contains("event already exists: DWKit:Boot:Ready"));
}

#[test]
fn builtins_can_be_disabled() {
    let config = Config::from_toml("[catalog]\nbuiltin = false\n", std::path::Path::new(".")).unwrap();

    let (events, commands) = config.build_registries().unwrap();
    assert!(events.is_empty());
    assert!(commands.is_empty());
}
