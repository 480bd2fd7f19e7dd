// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::DEFAULT_MESSAGE;
use crate::errors::ConfigError;
use crate::observability::messages::{config::*, StructuredLog};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Top-level configuration for the greeting program.
///
/// Every section is optional; anything left out falls back to the built-in
/// defaults, so `Config::default()` is exactly what the binary runs with.
///
/// # Example
/// ```yaml
/// greeting:
///   message: "Hello Golang"
/// ```
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub greeting: GreetingConfig,
}

/// Settings for the greeting emitter.
///
/// # Fields
/// * `message` - Text to emit (defaults to [`DEFAULT_MESSAGE`]). An explicit
///   empty string is kept as-is.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct GreetingConfig {
    pub message: String,
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            message: DEFAULT_MESSAGE.to_string(),
        }
    }
}

/// Load a config from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let display_path = path.display().to_string();

    let result = fs::read_to_string(path)
        .map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })
        .and_then(|content| {
            serde_yaml::from_str::<Config>(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })
        });

    match &result {
        Ok(cfg) => ConfigLoaded {
            path: &display_path,
            message_len: cfg.greeting.message.len(),
        }
        .log(),
        Err(e) => ConfigLoadFailed {
            path: &display_path,
            error: e,
        }
        .log(),
    }

    result
}
