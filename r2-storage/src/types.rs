/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Details of an object stored by a successful upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadOutput {
    key: String,
    url: String,
    e_tag: Option<String>,
}

impl UploadOutput {
    pub(crate) fn new(key: String, url: String, e_tag: Option<String>) -> Self {
        Self { key, url, e_tag }
    }

    /// The key the object was stored under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Public URL derived from the key.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Entity tag returned by the service.
    pub fn e_tag(&self) -> Option<&str> {
        self.e_tag.as_deref()
    }
}

/// Outcome of an upload once the local file has been opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadResult {
    /// The object was stored.
    Success(UploadOutput),

    /// The service or the transport rejected the request.
    Failure {
        /// Human readable description of the failure.
        message: String,
    },
}

impl UploadResult {
    /// Returns true for [`UploadResult::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, UploadResult::Success(_))
    }

    /// The upload output, if the upload succeeded.
    pub fn output(&self) -> Option<&UploadOutput> {
        match self {
            UploadResult::Success(output) => Some(output),
            UploadResult::Failure { .. } => None,
        }
    }

    /// The failure message, if the upload failed.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            UploadResult::Success(_) => None,
            UploadResult::Failure { message } => Some(message),
        }
    }
}

/// An object returned by a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectSummary {
    key: String,
    size: u64,
    modified: String,
    url: String,
}

impl ObjectSummary {
    pub(crate) fn new(key: String, size: u64, modified: String, url: String) -> Self {
        Self {
            key,
            size,
            modified,
            url,
        }
    }

    /// Object key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Size in bytes.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Last modified time in UTC, formatted `YYYY-MM-DD HH:MM:SS`.
    ///
    /// Empty if the service did not report one.
    pub fn modified(&self) -> &str {
        &self.modified
    }

    /// Public URL derived from the key.
    pub fn url(&self) -> &str {
        &self.url
    }
}
