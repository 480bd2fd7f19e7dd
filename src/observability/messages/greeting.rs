// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for greeting lifecycle events.
//!
//! This module contains message types for logging events related to:
//! * Greeting construction
//! * Emission to the output stream (completion, failure)

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

/// Greeting constructed.
///
/// # Log Level
/// `debug!` - Lifecycle detail
///
/// # Example
/// ```
/// use hello_greeting::observability::messages::greeting::GreetingConstructed;
///
/// let msg = GreetingConstructed { message_len: 12 };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct GreetingConstructed {
    pub message_len: usize,
}

impl Display for GreetingConstructed {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Greeting constructed: message_len={} bytes", self.message_len)
    }
}

impl StructuredLog for GreetingConstructed {
    fn log(&self) {
        tracing::debug!(message_len = self.message_len, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("greeting", span_name = name, message_len = self.message_len)
    }
}

/// Greeting about to be written; its span wraps the write and flush.
///
/// # Log Level
/// `debug!` - Lifecycle detail
pub struct GreetingEmitStarted {
    pub message_len: usize,
}

impl Display for GreetingEmitStarted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Emitting greeting: message_len={} bytes", self.message_len)
    }
}

impl StructuredLog for GreetingEmitStarted {
    fn log(&self) {
        tracing::debug!(message_len = self.message_len, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("emit", span_name = name, message_len = self.message_len)
    }
}

/// Greeting written and flushed.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use hello_greeting::observability::messages::greeting::GreetingEmitted;
/// use std::time::Duration;
///
/// let msg = GreetingEmitted {
///     bytes_written: 13,
///     duration: Duration::from_micros(4),
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct GreetingEmitted {
    pub bytes_written: usize,
    pub duration: Duration,
}

impl Display for GreetingEmitted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Greeting emitted: {} bytes, duration={:?}",
            self.bytes_written, self.duration
        )
    }
}

impl StructuredLog for GreetingEmitted {
    fn log(&self) {
        tracing::info!(
            bytes_written = self.bytes_written,
            duration_us = self.duration.as_micros() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "emit",
            span_name = name,
            bytes_written = self.bytes_written,
        )
    }
}

/// Greeting could not be written.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use hello_greeting::observability::messages::greeting::GreetingEmitFailed;
///
/// let error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout closed");
/// let msg = GreetingEmitFailed { error: &error };
///
/// tracing::error!("{}", msg);
/// ```
pub struct GreetingEmitFailed<'a> {
    pub error: &'a dyn std::error::Error,
}

impl Display for GreetingEmitFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Failed to emit greeting: {}", self.error)
    }
}

impl StructuredLog for GreetingEmitFailed<'_> {
    fn log(&self) {
        tracing::error!(error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!("emit", span_name = name, error = %self.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_constructed_display() {
        let msg = GreetingConstructed { message_len: 12 };
        assert_eq!(msg.to_string(), "Greeting constructed: message_len=12 bytes");
    }

    #[test]
    fn test_greeting_emit_started_display() {
        let msg = GreetingEmitStarted { message_len: 12 };
        assert_eq!(msg.to_string(), "Emitting greeting: message_len=12 bytes");
    }

    #[test]
    fn test_greeting_emitted_display() {
        let msg = GreetingEmitted {
            bytes_written: 13,
            duration: Duration::from_millis(2),
        };
        assert_eq!(msg.to_string(), "Greeting emitted: 13 bytes, duration=2ms");
    }

    #[test]
    fn test_greeting_emit_failed_display() {
        let error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout closed");
        let msg = GreetingEmitFailed { error: &error };
        assert_eq!(msg.to_string(), "Failed to emit greeting: stdout closed");
    }

    #[test]
    fn test_logging_without_subscriber_is_silent() {
        // No subscriber installed: these must not panic
        GreetingConstructed { message_len: 0 }.log();
        let _span = GreetingConstructed { message_len: 0 }.span("test");
    }
}
