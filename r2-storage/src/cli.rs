/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::borrow::Cow;
use std::fmt::Write;
use std::path::Path;

use aws_sdk_s3::error::DisplayErrorContext;

use crate::error::Error;
use crate::types::ObjectSummary;
use crate::Client;

/// Env file read when `--env-file` is not given.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Prefix listed when none is given.
pub const DEFAULT_LIST_PREFIX: &str = "documents/";

const NAME_WIDTH: usize = 40;
const SIZE_WIDTH: usize = 12;
const RULE_WIDTH: usize = 80;

/// Install a `fmt` subscriber writing to stderr, filtered by `RUST_LOG` (default `warn`).
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Load configuration from `env_file` and construct a client.
///
/// Configuration problems are fatal: the error is printed and the process exits with status 1.
pub async fn connect(env_file: &Path) -> Client {
    match crate::from_env_file(env_file).load().await {
        Ok(config) => Client::new(config),
        Err(err) => exit_with_error("failed to load configuration", &err),
    }
}

/// Print `message` with the full error chain and exit with status 1.
pub fn exit_with_error(message: &str, err: &Error) -> ! {
    eprintln!("{message}: {}", DisplayErrorContext(err));
    std::process::exit(1)
}

/// Print the usage line of `cmd` followed by `example` and exit with status 1.
pub fn exit_with_usage(mut cmd: clap::Command, example: &str) -> ! {
    eprintln!("{}", cmd.render_usage());
    eprintln!("Example: {example}");
    std::process::exit(1)
}

/// File name shown in progress messages: the last component of `path`.
pub fn display_name(path: &Path) -> Cow<'_, str> {
    match path.file_name() {
        Some(name) => name.to_string_lossy(),
        None => path.to_string_lossy(),
    }
}

/// Render a listing as a fixed width table.
///
/// Keys longer than 40 characters are truncated.
pub fn format_listing(files: &[ObjectSummary]) -> String {
    if files.is_empty() {
        return "No files found.\n".to_owned();
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<NAME_WIDTH$} {:>SIZE_WIDTH$}  {}",
        "File", "Size", "Modified"
    );
    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
    for file in files {
        let name: String = file.key().chars().take(NAME_WIDTH).collect();
        let size = format!("{} B", file.size());
        let _ = writeln!(
            out,
            "{name:<NAME_WIDTH$} {size:>SIZE_WIDTH$}  {}",
            file.modified()
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::{display_name, format_listing};
    use crate::types::ObjectSummary;

    fn summary(key: &str, size: u64) -> ObjectSummary {
        ObjectSummary::new(
            key.to_owned(),
            size,
            "2023-11-14 22:13:20".to_owned(),
            format!("https://pub.example.com/{key}"),
        )
    }

    #[test]
    fn test_empty_listing() {
        assert_eq!("No files found.\n", format_listing(&[]));
    }

    #[test]
    fn test_listing_table() {
        let table = format_listing(&[summary("documents/a.pdf", 1024)]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(3, lines.len());
        assert_eq!(format!("{:<40} {:>12}  Modified", "File", "Size"), lines[0]);
        assert_eq!("-".repeat(80), lines[1]);
        assert_eq!(
            format!("{:<40} {:>12}  2023-11-14 22:13:20", "documents/a.pdf", "1024 B"),
            lines[2]
        );
    }

    #[test]
    fn test_long_names_are_truncated() {
        let key = format!("documents/{}", "x".repeat(60));
        let table = format_listing(&[summary(&key, 1)]);
        let row = table.lines().nth(2).unwrap();
        assert!(row.starts_with(&key[..40]));
        assert!(!row.contains(&key[..41]));
    }

    #[test]
    fn test_display_name_is_the_file_name() {
        assert_eq!("sample.pdf", display_name(Path::new("./documents/sample.pdf")));
        assert_eq!("sample.pdf", display_name(Path::new("/tmp/a/b/sample.pdf")));
        assert_eq!("/", display_name(Path::new("/")));
    }
}
