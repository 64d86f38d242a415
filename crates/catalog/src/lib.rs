// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Catalog file parsing and configuration

mod config;
mod parser;

pub use config::{CatalogConfig, Config, ConfigError, CONFIG_FILE_NAME};
pub use parser::{parse_catalog, parse_catalog_file, CatalogFile, ParseError};
