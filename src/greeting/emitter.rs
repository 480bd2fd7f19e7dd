// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::io::{self, Write};
use std::time::Instant;

use crate::config::GreetingConfig;
use crate::errors::EmitError;
use crate::observability::messages::{greeting::*, StructuredLog};

/// A text message that can be emitted as a single line.
///
/// Any text is accepted, including the empty string. The message is fixed at
/// construction. `emit` takes the greeting by value; `write_to` borrows it and
/// can be called any number of times.
///
/// # Example
/// ```
/// use hello_greeting::greeting::Greeting;
///
/// let greeting = Greeting::new("Hello Golang");
/// let mut out = Vec::new();
/// greeting.write_to(&mut out).unwrap();
/// assert_eq!(out, b"Hello Golang\n");
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct Greeting {
    message: String,
}

impl Greeting {
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        GreetingConstructed {
            message_len: message.len(),
        }
        .log();
        Self { message }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Write the message plus a trailing newline to `writer` and flush it.
    ///
    /// Returns the number of bytes written.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<usize, EmitError> {
        let start_msg = GreetingEmitStarted {
            message_len: self.message.len(),
        };

        let span = start_msg.span("greeting_emit");
        let _guard = span.enter();
        start_msg.log();

        let start_time = Instant::now();

        let result = writeln!(writer, "{}", self.message).and_then(|_| writer.flush());

        match result {
            Ok(()) => {
                let bytes_written = self.message.len() + 1;
                GreetingEmitted {
                    bytes_written,
                    duration: start_time.elapsed(),
                }
                .log();
                Ok(bytes_written)
            }
            Err(e) => {
                GreetingEmitFailed { error: &e }.log();
                Err(EmitError::from(e))
            }
        }
    }

    /// Emit the greeting on standard output.
    pub fn emit(self) -> Result<(), EmitError> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.write_to(&mut handle)?;
        Ok(())
    }
}

impl From<&GreetingConfig> for Greeting {
    fn from(config: &GreetingConfig) -> Self {
        Greeting::new(config.message.clone())
    }
}
