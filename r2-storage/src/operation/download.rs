/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::path::Path;
use std::sync::Arc;

use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::error::Error;

/// Operation struct for single object download
#[derive(Clone, Default, Debug)]
pub(crate) struct Download;

impl Download {
    /// Execute a single `Download` operation
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        key: &str,
        save_path: &Path,
    ) -> Result<bool, Error> {
        let resp = handle
            .client()
            .get_object()
            .bucket(handle.bucket())
            .key(key)
            .send()
            .await;

        let output = match resp {
            Ok(output) => output,
            Err(err) => {
                let err = Error::from(err);
                tracing::error!("error downloading {key}: {}", DisplayErrorContext(&err));
                return Ok(false);
            }
        };

        let dest = fs::File::create(save_path).await?;
        match write_body(output.body, dest).await {
            Ok(written) => {
                tracing::debug!("downloaded {key} ({written} bytes) to {}", save_path.display());
                Ok(true)
            }
            Err(WriteError::Local(err)) => Err(err.into()),
            Err(WriteError::Body(err)) => {
                tracing::error!("error downloading {key}: {}", DisplayErrorContext(&err));
                // don't leave a truncated object behind
                if let Err(err) = fs::remove_file(save_path).await {
                    tracing::warn!(
                        "failed to remove partial download {}: {err}",
                        save_path.display()
                    );
                }
                Ok(false)
            }
        }
    }
}

#[derive(Debug)]
enum WriteError {
    Local(std::io::Error),
    Body(Error),
}

async fn write_body(mut body: ByteStream, mut dest: fs::File) -> Result<u64, WriteError> {
    let mut written = 0;
    while let Some(chunk) = body
        .try_next()
        .await
        .map_err(|err| WriteError::Body(err.into()))?
    {
        tracing::trace!("recv'd chunk size={}", chunk.len());
        dest.write_all(&chunk).await.map_err(WriteError::Local)?;
        written += chunk.len() as u64;
    }
    dest.flush().await.map_err(WriteError::Local)?;
    Ok(written)
}
