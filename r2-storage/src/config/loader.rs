/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::path::PathBuf;

use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::config::Credentials;

use crate::config::env_file::EnvFile;
use crate::config::settings::Settings;
use crate::Config;

/// Provider name attached to the static credentials read from the env file.
const CREDENTIALS_PROVIDER: &str = "r2-env-file";

/// Load a [`Config`] from a `key=value` env file.
#[derive(Debug)]
pub struct ConfigLoader {
    path: PathBuf,
}

impl ConfigLoader {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the env file, resolve its [`Settings`] and build the S3 client.
    pub async fn load(self) -> Result<Config, crate::error::Error> {
        let env = EnvFile::load(&self.path)?;
        let settings = Settings::from_env_file(&env)?;
        tracing::debug!("resolved settings: {settings:?}");
        from_settings(&settings).await
    }
}

/// Build a [`Config`] from already resolved settings.
pub async fn from_settings(settings: &Settings) -> Result<Config, crate::error::Error> {
    let credentials = Credentials::new(
        settings.access_key_id(),
        settings.secret_access_key(),
        None,
        None,
        CREDENTIALS_PROVIDER,
    );

    let shared_config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(settings.region().to_owned()))
        .endpoint_url(settings.endpoint())
        .credentials_provider(credentials)
        .load()
        .await;

    let s3_config = aws_sdk_s3::config::Builder::from(&shared_config)
        .force_path_style(settings.force_path_style())
        .build();

    Config::builder()
        .bucket(settings.bucket_name())
        .public_endpoint(settings.public_endpoint())
        .client(aws_sdk_s3::Client::from_conf(s3_config))
        .build()
}
