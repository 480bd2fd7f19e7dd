// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for configuration loading.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Configuration file loaded and parsed.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ConfigLoaded<'a> {
    pub path: &'a str,
    pub message_len: usize,
}

impl Display for ConfigLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded config '{}': message_len={} bytes",
            self.path, self.message_len
        )
    }
}

impl StructuredLog for ConfigLoaded<'_> {
    fn log(&self) {
        tracing::info!(path = self.path, message_len = self.message_len, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("config", span_name = name, path = self.path)
    }
}

/// Configuration file could not be loaded.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use hello_greeting::observability::messages::config::ConfigLoadFailed;
///
/// let error = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
/// let msg = ConfigLoadFailed {
///     path: "greeting.yaml",
///     error: &error,
/// };
///
/// assert_eq!(msg.to_string(), "Failed to load config 'greeting.yaml': no such file");
/// ```
pub struct ConfigLoadFailed<'a> {
    pub path: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for ConfigLoadFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Failed to load config '{}': {}", self.path, self.error)
    }
}

impl StructuredLog for ConfigLoadFailed<'_> {
    fn log(&self) {
        tracing::error!(path = self.path, error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!("config", span_name = name, path = self.path)
    }
}
