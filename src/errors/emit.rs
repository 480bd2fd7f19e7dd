// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::io;
use thiserror::Error;

/// Failure while writing a greeting to its output.
///
/// The program itself has no recoverable failure paths; this only surfaces
/// platform-level trouble with the output stream (closed pipe, full disk).
#[derive(Error, Debug)]
pub enum EmitError {
    /// Writing or flushing the output stream failed.
    #[error("Failed to write greeting")]
    Write {
        #[from]
        source: io::Error,
    },
}
