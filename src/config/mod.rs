// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for vcm.
//!
//! This module handles loading and parsing configuration from vcm.toml
//! and reading the `SILENT` environment toggle.

pub mod default;
mod env;
mod loader;
mod schema;

pub use env::{quiet_from_env, quiet_from_value, SILENT_VAR};
pub use loader::{find_config_file, find_config_file_from, load_config, parse_config};
pub use schema::*;
