// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for signup.
//!
//! This module handles loading, parsing, and merging configuration from
//! signup.toml files and defaults.

pub mod default;
mod loader;
mod schema;

pub use default::default_config;
pub use loader::{find_config_file, load_config, merge_configs, parse_config};
pub use schema::*;
