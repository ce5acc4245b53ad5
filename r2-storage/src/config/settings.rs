/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

use crate::config::env_file::EnvFile;
use crate::error::{self, Error};

/// Name of the bucket to operate on (required)
pub const BUCKET_NAME: &str = "R2_BUCKET_NAME";
/// Public base URL objects are served from (required)
pub const PUBLIC_ENDPOINT: &str = "R2_PUBLIC_ENDPOINT";
/// S3 API endpoint (required)
pub const ENDPOINT: &str = "R2_ENDPOINT";
/// Access key ID (required)
pub const ACCESS_KEY_ID: &str = "R2_ACCESS_KEY_ID";
/// Secret access key (required)
pub const SECRET_ACCESS_KEY: &str = "R2_SECRET_ACCESS_KEY";
/// Signing region, defaults to [`DEFAULT_REGION`]
pub const REGION: &str = "R2_REGION";
/// Whether to address the bucket in the URL path rather than the host name
pub const FORCE_PATH_STYLE: &str = "R2_FORCE_PATH_STYLE";

/// Region used when `R2_REGION` is not set.
pub const DEFAULT_REGION: &str = "auto";

/// Storage settings resolved from an [`EnvFile`].
///
/// Required keys are checked once, when the settings are resolved, so a
/// misconfigured file is reported before any request is attempted.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    bucket_name: String,
    public_endpoint: String,
    endpoint: String,
    access_key_id: String,
    secret_access_key: String,
    region: String,
    force_path_style: bool,
}

impl Settings {
    /// Resolve settings from a parsed env file.
    ///
    /// Fails with [`ErrorKind::ConfigInvalid`](crate::error::ErrorKind::ConfigInvalid)
    /// listing every required key that is absent or empty.
    pub fn from_env_file(env: &EnvFile) -> Result<Settings, Error> {
        let required = |key: &'static str| env.get(key).filter(|v| !v.is_empty());

        let missing: Vec<&str> = [
            BUCKET_NAME,
            PUBLIC_ENDPOINT,
            ENDPOINT,
            ACCESS_KEY_ID,
            SECRET_ACCESS_KEY,
        ]
        .into_iter()
        .filter(|key| required(*key).is_none())
        .collect();
        if !missing.is_empty() {
            return Err(error::invalid_config(format!(
                "missing required settings: {}",
                missing.join(", ")
            )));
        }

        let region = match env.get(REGION) {
            Some(region) if !region.is_empty() => region,
            _ => DEFAULT_REGION,
        };

        let force_path_style = match env.get(FORCE_PATH_STYLE) {
            None | Some("") => true,
            Some(value) => parse_bool(value).ok_or_else(|| {
                error::invalid_config(format!("{FORCE_PATH_STYLE} is not a boolean: {value}"))
            })?,
        };

        let value = |key| required(key).unwrap_or_default().to_owned();
        Ok(Settings {
            bucket_name: value(BUCKET_NAME),
            public_endpoint: value(PUBLIC_ENDPOINT),
            endpoint: value(ENDPOINT),
            access_key_id: value(ACCESS_KEY_ID),
            secret_access_key: value(SECRET_ACCESS_KEY),
            region: region.to_owned(),
            force_path_style,
        })
    }

    /// Bucket name.
    pub fn bucket_name(&self) -> &str {
        &self.bucket_name
    }

    /// Public base URL.
    pub fn public_endpoint(&self) -> &str {
        &self.public_endpoint
    }

    /// S3 API endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Access key ID.
    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    /// Secret access key.
    pub fn secret_access_key(&self) -> &str {
        &self.secret_access_key
    }

    /// Signing region.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Whether path-style addressing is used.
    pub fn force_path_style(&self) -> bool {
        self.force_path_style
    }
}

// keep the secret out of logs
impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("bucket_name", &self.bucket_name)
            .field("public_endpoint", &self.public_endpoint)
            .field("endpoint", &self.endpoint)
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"** redacted **")
            .field("region", &self.region)
            .field("force_path_style", &self.force_path_style)
            .finish()
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
