// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;     // defaults + yaml loader
pub mod errors;     // error handling
pub mod greeting;   // the greeting emitter
pub mod observability;
