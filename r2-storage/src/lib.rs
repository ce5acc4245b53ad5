/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/* Automatically managed default lints */
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
/* End of automatically managed default lints */

//! Upload, download and list objects in a Cloudflare R2 (or any S3-compatible) bucket.
//!
//! Settings are read from a `key=value` env file:
//!
//! ```text
//! R2_BUCKET_NAME=my-bucket
//! R2_PUBLIC_ENDPOINT=https://pub-0123.r2.dev
//! R2_ENDPOINT=https://<account>.r2.cloudflarestorage.com
//! R2_ACCESS_KEY_ID=...
//! R2_SECRET_ACCESS_KEY=...
//! # optional, defaults to "auto"
//! R2_REGION=auto
//! ```
//!
//! # Examples
//!
//! ```no_run
//! # async fn example() -> Result<(), r2_storage::error::Error> {
//! let config = r2_storage::from_env_file(".env").load().await?;
//! let client = r2_storage::Client::new(config);
//!
//! let key = r2_storage::operation::upload::document_key("./sample.pdf")?;
//! let result = client.upload_file("./sample.pdf", &key).await?;
//! if let Some(output) = result.output() {
//!     println!("stored at {}", output.url());
//! }
//!
//! for file in client.list_files("documents/").await {
//!     println!("{} {}", file.key(), file.size());
//! }
//! # Ok(())
//! # }
//! ```

#![warn(
    missing_debug_implementations,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

use std::path::PathBuf;

/// Error types emitted by `r2-storage`
pub mod error;

/// Common types used by `r2-storage`
pub mod types;

/// Storage client
pub mod client;

/// Storage operations
pub mod operation;

/// Client configuration
pub mod config;

/// Helpers shared by the command line tools
pub mod cli;

pub use self::client::Client;
use self::config::loader::ConfigLoader;
pub use self::config::Config;

/// Create a config loader reading the env file at `path`
pub fn from_env_file(path: impl Into<PathBuf>) -> ConfigLoader {
    ConfigLoader::new(path)
}
