/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::path::Path;
use std::sync::Arc;

use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata};
use aws_sdk_s3::primitives::ByteStream;

use crate::error::{self, Error};
use crate::types::{UploadOutput, UploadResult};

/// Key prefix documents are uploaded under.
pub const DOCUMENTS_PREFIX: &str = "documents/";

/// Content type used when the extension is not recognized.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

const CONTENT_TYPES: &[(&str, &str)] = &[
    ("pdf", "application/pdf"),
    ("zip", "application/zip"),
    ("txt", "text/plain"),
    ("jpg", "image/jpeg"),
    ("png", "image/png"),
];

/// Infer the content type of `path` from its extension, ignoring case.
pub fn content_type(path: impl AsRef<Path>) -> &'static str {
    let Some(ext) = path.as_ref().extension().and_then(|ext| ext.to_str()) else {
        return DEFAULT_CONTENT_TYPE;
    };
    CONTENT_TYPES
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(ext))
        .map(|(_, mime)| *mime)
        .unwrap_or(DEFAULT_CONTENT_TYPE)
}

/// The key a local file is uploaded under: `documents/<file name>`.
///
/// Only the final path component is kept.
pub fn document_key(path: impl AsRef<Path>) -> Result<String, Error> {
    let path = path.as_ref();
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| {
            error::invalid_input(format!("no usable file name in path: {}", path.display()))
        })?;
    Ok(format!("{DOCUMENTS_PREFIX}{file_name}"))
}

/// Operation struct for single object upload
#[derive(Clone, Default, Debug)]
pub(crate) struct Upload;

impl Upload {
    /// Execute a single `Upload` operation
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        path: &Path,
        key: &str,
    ) -> Result<UploadResult, Error> {
        let metadata = tokio::fs::metadata(path).await?;
        if !metadata.is_file() {
            return Err(error::invalid_input(format!(
                "not a regular file: {}",
                path.display()
            )));
        }

        let body = ByteStream::from_path(path)
            .await
            .map_err(|err| Error::new(error::ErrorKind::IOError, err))?;
        let content_type = content_type(path);
        tracing::debug!(
            "uploading {} ({} bytes, {content_type}) to {key}",
            path.display(),
            metadata.len()
        );

        let resp = handle
            .client()
            .put_object()
            .bucket(handle.bucket())
            .key(key)
            .content_type(content_type)
            .body(body)
            .send()
            .await;

        match resp {
            Ok(output) => Ok(UploadResult::Success(UploadOutput::new(
                key.to_owned(),
                handle.public_url(key),
                output.e_tag,
            ))),
            Err(err) => {
                tracing::error!("error uploading {key}: {}", DisplayErrorContext(&err));
                Ok(UploadResult::Failure {
                    message: failure_message(&err),
                })
            }
        }
    }
}

/// Short message for a failed request: the service's error code and message when it sent
/// them, otherwise the error chain.
fn failure_message<E>(err: &E) -> String
where
    E: ProvideErrorMetadata + std::error::Error,
{
    match (err.code(), err.message()) {
        (Some(code), Some(message)) => format!("{code}: {message}"),
        (Some(code), None) => code.to_owned(),
        (None, Some(message)) => message.to_owned(),
        (None, None) => DisplayErrorContext(err).to_string(),
    }
}
