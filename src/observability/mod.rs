// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! All diagnostics go to stderr through `tracing`; stdout carries nothing but
//! the greeting itself. Message types follow a struct-based pattern with a
//! `Display` implementation to:
//!
//! * Keep magic strings out of call sites
//! * Give every event the same structured fields
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::greeting` - Greeting construction and emission events
//! * `messages::config` - Configuration loading events
//!
//! # Usage
//!
//! ```rust
//! use hello_greeting::observability::messages::greeting::GreetingEmitted;
//! use std::time::Duration;
//!
//! let msg = GreetingEmitted {
//!     bytes_written: 13,
//!     duration: Duration::from_micros(4),
//! };
//!
//! tracing::info!("{}", msg);
//! ```

pub mod messages;

use crate::config::consts::DEFAULT_LOG_FILTER;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Install the global `fmt` subscriber, writing to stderr.
///
/// The filter comes from `RUST_LOG` and falls back to [`DEFAULT_LOG_FILTER`],
/// at which level only failures are logged. ANSI styling is used only when
/// stderr is a terminal. Calling it again after a subscriber is installed is
/// a no-op.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();
}
