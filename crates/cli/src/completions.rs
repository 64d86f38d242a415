// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shell completion generation for the dwkit CLI.
//!
//! ```bash
//! # Bash
//! dwkit completions bash > ~/.local/share/bash-completion/completions/dwkit
//!
//! # Zsh
//! dwkit completions zsh > ~/.zfunc/_dwkit
//!
//! # Fish
//! dwkit completions fish > ~/.config/fish/completions/dwkit.fish
//! ```

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io;

/// Generate shell completions and write to stdout.
pub fn generate_completions<C: CommandFactory>(shell: Shell) {
    let mut cmd = C::command();
    generate(shell, &mut cmd, "dwkit", &mut io::stdout());
}

/// Arguments for the completions command.
#[derive(clap::Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
