/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use aws_sdk_s3::error::DisplayErrorContext;

/// Operation struct for single object delete
#[derive(Clone, Default, Debug)]
pub(crate) struct Delete;

impl Delete {
    /// Execute a single `Delete` operation
    pub(crate) async fn orchestrate(handle: Arc<crate::client::Handle>, key: &str) -> bool {
        let resp = handle
            .client()
            .delete_object()
            .bucket(handle.bucket())
            .key(key)
            .send()
            .await;

        match resp {
            Ok(_) => {
                tracing::debug!("deleted {key}");
                true
            }
            Err(err) => {
                tracing::error!("error deleting {key}: {}", DisplayErrorContext(&err));
                false
            }
        }
    }
}
