/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;
use std::time::Duration;

use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::presigning::PresigningConfig;

use crate::error::Error;

/// Validity window used when the caller has no particular expiry in mind.
pub const DEFAULT_SIGNED_URL_EXPIRY: Duration = Duration::from_secs(3600);

/// Operation struct for pre-signing a GET request
#[derive(Clone, Default, Debug)]
pub(crate) struct Presign;

impl Presign {
    /// Sign a GET for `key`, returning an empty string on failure.
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        key: &str,
        expires_in: Duration,
    ) -> String {
        match presigned_get(&handle, key, expires_in).await {
            Ok(url) => url,
            Err(err) => {
                tracing::error!(
                    "error generating signed URL for {key}: {}",
                    DisplayErrorContext(&err)
                );
                String::new()
            }
        }
    }
}

async fn presigned_get(
    handle: &crate::client::Handle,
    key: &str,
    expires_in: Duration,
) -> Result<String, Error> {
    let presigning = PresigningConfig::expires_in(expires_in)?;
    let request = handle
        .client()
        .get_object()
        .bucket(handle.bucket())
        .key(key)
        .presigned(presigning)
        .await?;
    Ok(request.uri().to_owned())
}
