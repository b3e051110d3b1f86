// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for scopekit.
//!
//! This module handles locating, parsing and validating scopekit.toml.
//! Every setting has a default, so a workspace without a configuration file
//! gets the stock rule set.

pub mod default;
mod loader;
mod schema;

pub use default::default_config;
pub use loader::{find_config_file_from, load_config, load_config_from, parse_config, validate_config};
pub use schema::*;
