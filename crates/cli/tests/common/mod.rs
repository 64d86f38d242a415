// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test utilities for CLI integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const EXTRA_CATALOG: &str = r#"
[event."DWKit:Test:Ping"]
description = "ping test"
producers = ["testmod"]
[event."DWKit:Test:Ping".payload_schema]
x = "number"

[command.dwping]
description = "Send a ping event"
syntax = "dwping"
"#;

/// Isolated project directory holding a `dwkit.toml`.
pub struct TestEnv {
    pub dir: TempDir,
}

impl TestEnv {
    /// Config with built-ins only.
    pub fn new() -> Self {
        Self::with_config("")
    }

    /// Built-ins plus `EXTRA_CATALOG`.
    pub fn with_extra_catalog() -> Self {
        let env = Self::with_config("[catalog]\nfiles = [\"extra.toml\"]\n");
        env.write("extra.toml", EXTRA_CATALOG);
        env
    }

    pub fn with_config(config: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        fs::write(dir.path().join("dwkit.toml"), config).expect("Failed to write config");
        Self { dir }
    }

    pub fn write(&self, name: &str, content: &str) {
        fs::write(self.dir.path().join(name), content).expect("Failed to write file");
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// `dwkit --config <env>/dwkit.toml <args...>` run inside the env directory.
    pub fn dwkit(&self, args: &[&str]) -> Command {
        let mut cmd = Command::cargo_bin("dwkit").expect("dwkit binary not built");
        cmd.current_dir(self.dir.path())
            .env_remove("RUST_LOG")
            .arg("--config")
            .arg(self.path("dwkit.toml"))
            .args(args);
        cmd
    }
}
