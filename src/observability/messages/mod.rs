// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for the human-readable line and
//! [`StructuredLog`] to emit that line together with its fields at the
//! message's own level.
//!
//! # Usage Pattern
//!
//! ```rust
//! use hello_greeting::observability::messages::{greeting::GreetingConstructed, StructuredLog};
//!
//! let msg = GreetingConstructed { message_len: 12 };
//!
//! msg.log();
//! ```

pub mod config;
pub mod greeting;

use tracing::Span;

/// A message that knows its own log level and structured fields.
pub trait StructuredLog {
    /// Emit the message as a `tracing` event.
    fn log(&self);

    /// Open a span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}
