/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use aws_sdk_s3::{
    error::{DisplayErrorContext, SdkError},
    operation::list_objects_v2::{ListObjectsV2Error, ListObjectsV2Output},
    types::Object,
};
use aws_smithy_runtime_api::http::Response;

use crate::client::Handle;
use crate::types::ObjectSummary;

const MODIFIED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Operation struct for listing a prefix
#[derive(Clone, Default, Debug)]
pub(crate) struct ListObjects;

impl ListObjects {
    /// Execute a `ListObjects` operation, following continuation tokens to the end.
    pub(crate) async fn orchestrate(handle: Arc<Handle>, prefix: &str) -> Vec<ObjectSummary> {
        let mut paginator = ListObjectsPaginator::new(handle.clone(), prefix);
        let mut files = Vec::new();

        while let Some(page) = paginator.next_page().await {
            match page {
                Ok(output) => {
                    files.extend(output.contents().iter().map(|obj| summarize(&handle, obj)));
                }
                Err(err) => {
                    tracing::error!(
                        "error listing files under {prefix:?}: {}",
                        DisplayErrorContext(&err)
                    );
                    return Vec::new();
                }
            }
        }

        tracing::debug!("listed {} objects under {prefix:?}", files.len());
        files
    }
}

fn summarize(handle: &Handle, obj: &Object) -> ObjectSummary {
    let key = obj.key().unwrap_or_default();
    let size = obj
        .size()
        .and_then(|size| u64::try_from(size).ok())
        .unwrap_or_default();
    let modified = obj
        .last_modified()
        .map(format_modified)
        .unwrap_or_default();
    ObjectSummary::new(key.to_owned(), size, modified, handle.public_url(key))
}

/// Format a service timestamp as `YYYY-MM-DD HH:MM:SS` in UTC.
pub(crate) fn format_modified(ts: &aws_smithy_types::DateTime) -> String {
    chrono::DateTime::from_timestamp(ts.secs(), ts.subsec_nanos())
        .map(|dt| dt.format(MODIFIED_FORMAT).to_string())
        .unwrap_or_default()
}

/// Paginator for the `ListObjectsV2` operation that follows continuation tokens
/// until the listing is exhausted.
#[derive(Debug)]
struct ListObjectsPaginator {
    handle: Arc<Handle>,
    prefix: String,
    state: Option<State>,
}

#[derive(Debug, PartialEq)]
enum State {
    Paginating { next_token: Option<String> },
    Done,
}

impl State {
    fn next_state(self, output: &ListObjectsV2Output) -> State {
        let is_truncated =
            output.is_truncated().unwrap_or(false) && output.next_continuation_token().is_some();

        match self {
            // more results with this prefix
            State::Paginating { .. } if is_truncated => State::Paginating {
                next_token: output.next_continuation_token.to_owned(),
            },
            State::Paginating { .. } | State::Done => State::Done,
        }
    }
}

impl ListObjectsPaginator {
    fn new(handle: Arc<Handle>, prefix: &str) -> Self {
        Self {
            handle,
            prefix: prefix.to_owned(),
            state: Some(State::Paginating { next_token: None }),
        }
    }

    async fn next_page(
        &mut self,
    ) -> Option<Result<ListObjectsV2Output, SdkError<ListObjectsV2Error, Response>>> {
        let next_token = match self.state.as_ref()? {
            State::Done => return None,
            State::Paginating { next_token } => next_token.clone(),
        };

        let list_result = self
            .handle
            .client()
            .list_objects_v2()
            .bucket(self.handle.bucket())
            .prefix(&self.prefix)
            .set_continuation_token(next_token)
            .send()
            .await;

        match list_result {
            Ok(output) => {
                let next_state = self.state.take()?.next_state(&output);
                self.state.replace(next_state);
                Some(Ok(output))
            }
            Err(err) => {
                self.state.replace(State::Done);
                Some(Err(err))
            }
        }
    }
}
