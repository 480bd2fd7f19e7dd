// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The greeting emitter: a message held by value and written to stdout on demand.

mod emitter;

pub use emitter::Greeting;
