// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::process::{Command, Output};
#[cfg(target_os = "linux")]
use std::{fs::OpenOptions, process::Stdio};

fn run_binary() -> Output {
    Command::new(env!("CARGO_BIN_EXE_hello-greeting"))
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run hello-greeting binary")
}

#[test]
fn prints_hello_golang_and_exits_cleanly() {
    let output = run_binary();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Hello Golang\n");
    assert_eq!(String::from_utf8_lossy(&output.stderr), "");
}

#[test]
fn output_is_deterministic_across_runs() {
    let first = run_binary();
    let second = run_binary();

    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.status.code(), second.status.code());
}

#[test]
fn arguments_are_ignored() {
    let output = Command::new(env!("CARGO_BIN_EXE_hello-greeting"))
        .args(["--name", "Rust"])
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run hello-greeting binary");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Hello Golang\n");
}

#[test]
fn diagnostics_never_reach_stdout() {
    let output = Command::new(env!("CARGO_BIN_EXE_hello-greeting"))
        .env("RUST_LOG", "debug")
        .output()
        .expect("failed to run hello-greeting binary");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Hello Golang\n");
    assert!(String::from_utf8_lossy(&output.stderr).contains("Greeting emitted"));
}

#[cfg(target_os = "linux")]
#[test]
fn unwritable_stdout_exits_with_error_report() -> std::io::Result<()> {
    let full = OpenOptions::new().write(true).open("/dev/full")?;

    let output = Command::new(env!("CARGO_BIN_EXE_hello-greeting"))
        .env_remove("RUST_LOG")
        .stdout(Stdio::from(full))
        .output()?;

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("Error: failed to emit greeting"));
    assert!(stderr.contains("ERROR"));
    assert!(stderr.contains("Failed to emit greeting"));
    assert!(stderr.contains("Failed to write greeting"));
    assert!(!stderr.contains("Failed to write greeting: "));
    assert!(!stderr.contains('\x1b'));
    Ok(())
}
