/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::error::{self, Error};

/// Parser for `key=value` configuration files
pub mod env_file;

/// Typed view of the settings read from an env file
pub mod settings;

/// Loading a [`Config`] from an env file
pub mod loader;

/// Configuration for a [`Client`](crate::client::Client)
#[derive(Debug, Clone)]
pub struct Config {
    bucket: String,
    public_endpoint: String,
    client: aws_sdk_s3::client::Client,
}

impl Config {
    /// Create a new `Config` builder
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// The bucket every operation targets.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Base URL objects are publicly served from.
    pub fn public_endpoint(&self) -> &str {
        &self.public_endpoint
    }

    /// The Amazon S3 client instance that will be used to send requests.
    pub fn client(&self) -> &aws_sdk_s3::Client {
        &self.client
    }
}

/// Fluent style builder for [Config]
#[derive(Debug, Clone, Default)]
pub struct Builder {
    bucket: Option<String>,
    public_endpoint: Option<String>,
    client: Option<aws_sdk_s3::Client>,
}

impl Builder {
    /// Set the bucket to operate on.
    pub fn bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = Some(bucket.into());
        self
    }

    /// Set the public base URL used to derive object URLs.
    pub fn public_endpoint(mut self, public_endpoint: impl Into<String>) -> Self {
        self.public_endpoint = Some(public_endpoint.into());
        self
    }

    /// Set an explicit S3 client to use.
    pub fn client(mut self, client: aws_sdk_s3::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Consumes the builder and constructs a [`Config`](crate::config::Config)
    pub fn build(self) -> Result<Config, Error> {
        Ok(Config {
            bucket: self
                .bucket
                .ok_or_else(|| error::invalid_input("bucket is required"))?,
            public_endpoint: self
                .public_endpoint
                .ok_or_else(|| error::invalid_input("public endpoint is required"))?,
            client: self
                .client
                .ok_or_else(|| error::invalid_input("client is required"))?,
        })
    }
}
