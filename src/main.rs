// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::Context;
use hello_greeting::config::Config;
use hello_greeting::greeting::Greeting;
use hello_greeting::observability::init_tracing;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // No arguments and no config file: the greeting is the built-in default
    let config = Config::default();
    let greeting = Greeting::from(&config.greeting);

    greeting.emit().context("failed to emit greeting")?;

    Ok(())
}
