// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Catalog of user-invokable commands

mod builtin;
mod definition;

pub use builtin::{builtin_commands, seed_commands};
pub use definition::{CommandDefinition, CommandRegistry};
