/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crate::error::Error;
use crate::operation::delete::Delete;
use crate::operation::download::Download;
use crate::operation::list_objects::ListObjects;
use crate::operation::presign::Presign;
use crate::operation::upload::Upload;
use crate::types::{ObjectSummary, UploadResult};
use crate::Config;

/// Client for a single bucket of an S3-compatible storage service.
///
/// Service failures never escape as `Err`: uploads report them as
/// [`UploadResult::Failure`], the other operations log them and return a falsy value.
/// Only local faults (reading the upload source, writing the download target) are
/// returned as errors.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) handle: Arc<Handle>,
}

/// Whatever is needed to carry out operations
#[derive(Debug)]
pub(crate) struct Handle {
    pub(crate) config: crate::Config,
}

impl Handle {
    /// The S3 client to use for SDK operations
    pub(crate) fn client(&self) -> &aws_sdk_s3::Client {
        self.config.client()
    }

    pub(crate) fn bucket(&self) -> &str {
        self.config.bucket()
    }

    pub(crate) fn public_url(&self, key: &str) -> String {
        public_url(self.config.public_endpoint(), key)
    }
}

impl Client {
    /// Creates a new client from a config.
    pub fn new(config: Config) -> Client {
        let handle = Arc::new(Handle { config });
        Client { handle }
    }

    /// Returns the configuration used by this client.
    pub fn config(&self) -> &Config {
        &self.handle.config
    }

    /// Upload the file at `path` under `key`.
    ///
    /// The content type is inferred from the file extension, see
    /// [`content_type`](crate::operation::upload::content_type).
    ///
    /// Fails before any request is sent if `path` cannot be opened.
    pub async fn upload_file(
        &self,
        path: impl AsRef<Path>,
        key: &str,
    ) -> Result<UploadResult, Error> {
        Upload::orchestrate(self.handle.clone(), path.as_ref(), key).await
    }

    /// Download the object `key` to `save_path`, replacing any existing file.
    ///
    /// Returns `Ok(false)` if the service request fails, `Err` if `save_path` cannot be written.
    pub async fn download_file(
        &self,
        key: &str,
        save_path: impl AsRef<Path>,
    ) -> Result<bool, Error> {
        Download::orchestrate(self.handle.clone(), key, save_path.as_ref()).await
    }

    /// List every object whose key starts with `prefix`.
    ///
    /// An empty prefix lists the whole bucket. Returns an empty list if nothing matches or the
    /// service request fails.
    pub async fn list_files(&self, prefix: &str) -> Vec<ObjectSummary> {
        ListObjects::orchestrate(self.handle.clone(), prefix).await
    }

    /// Delete the object `key`.
    ///
    /// Deleting a key that does not exist succeeds, as DeleteObject is idempotent.
    pub async fn delete_file(&self, key: &str) -> bool {
        Delete::orchestrate(self.handle.clone(), key).await
    }

    /// Generate a pre-signed GET URL for `key` valid for `expires_in`.
    ///
    /// Returns an empty string if the URL cannot be signed.
    /// [`DEFAULT_SIGNED_URL_EXPIRY`](crate::operation::presign::DEFAULT_SIGNED_URL_EXPIRY)
    /// is a reasonable default.
    pub async fn generate_signed_url(&self, key: &str, expires_in: Duration) -> String {
        Presign::orchestrate(self.handle.clone(), key, expires_in).await
    }

    /// Public URL of `key` under the configured public endpoint.
    pub fn public_url(&self, key: &str) -> String {
        self.handle.public_url(key)
    }
}

/// Join `base` and `key` with exactly one `/` between them.
pub fn public_url(base: &str, key: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        key.trim_start_matches('/')
    )
}
