/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::operation::delete_object::DeleteObjectOutput;
use aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Output;
use aws_sdk_s3::primitives::DateTime;
use aws_sdk_s3::types::Object;
use aws_smithy_http_client::test_util::StaticReplayClient;
use aws_smithy_mocks_experimental::{mock, mock_client, RuleMode};
use aws_smithy_runtime::test_util::capture_test_logs::capture_test_logs;
use test_common::{error_event, replay_s3_client, test_client, TEST_BUCKET};

fn object(key: &str, size: i64) -> Object {
    Object::builder()
        .key(key)
        .size(size)
        .last_modified(DateTime::from_secs(1_700_000_000))
        .build()
}

#[tokio::test]
async fn test_list_files_follows_continuation_tokens() {
    let page1 = mock!(aws_sdk_s3::Client::list_objects_v2)
        .match_requests(|r| {
            r.bucket() == Some(TEST_BUCKET)
                && r.prefix() == Some("documents/")
                && r.continuation_token().is_none()
        })
        .then_output(|| {
            ListObjectsV2Output::builder()
                .contents(object("documents/a.pdf", 10))
                .contents(object("documents/b.zip", 20))
                .is_truncated(true)
                .next_continuation_token("token1")
                .build()
        });
    let page2 = mock!(aws_sdk_s3::Client::list_objects_v2)
        .match_requests(|r| r.continuation_token() == Some("token1"))
        .then_output(|| {
            ListObjectsV2Output::builder()
                .contents(object("documents/c.txt", 0))
                .is_truncated(false)
                .build()
        });
    let client = test_client(mock_client!(
        aws_sdk_s3,
        RuleMode::Sequential,
        &[&page1, &page2]
    ));

    let files = client.list_files("documents/").await;
    let keys: Vec<&str> = files.iter().map(|f| f.key()).collect();
    assert_eq!(
        vec!["documents/a.pdf", "documents/b.zip", "documents/c.txt"],
        keys
    );

    let first = &files[0];
    assert_eq!(10, first.size());
    assert_eq!("2023-11-14 22:13:20", first.modified());
    assert_eq!("https://pub.example.com/documents/a.pdf", first.url());
    assert_eq!(0, files[2].size());
}

#[tokio::test]
async fn test_list_files_no_matches_is_empty() {
    let list = mock!(aws_sdk_s3::Client::list_objects_v2)
        .match_requests(|r| r.prefix() == Some("nothing-here/"))
        .then_output(|| ListObjectsV2Output::builder().key_count(0).build());
    let client = test_client(mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&list]));

    assert!(client.list_files("nothing-here/").await.is_empty());
}

#[tokio::test]
async fn test_list_files_service_error_is_empty() {
    let (_guard, rx) = capture_test_logs();
    let http_client = StaticReplayClient::new(vec![error_event(
        404,
        "NoSuchBucket",
        "The specified bucket does not exist",
    )]);
    let client = test_client(replay_s3_client(http_client.clone()));

    assert!(client.list_files("").await.is_empty());
    assert_eq!(1, http_client.actual_requests().count());
    assert!(rx.contents().contains("error listing files"));
}

#[tokio::test]
async fn test_delete_file() {
    let delete = mock!(aws_sdk_s3::Client::delete_object)
        .match_requests(|r| r.bucket() == Some(TEST_BUCKET) && r.key() == Some("documents/a.pdf"))
        .then_output(|| DeleteObjectOutput::builder().build());
    let client = test_client(mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&delete]));

    assert!(client.delete_file("documents/a.pdf").await);
}

// DeleteObject succeeds for keys that do not exist, and so does `delete_file`.
#[tokio::test]
async fn test_delete_missing_key_is_idempotent() {
    let delete = mock!(aws_sdk_s3::Client::delete_object)
        .match_requests(|r| r.key() == Some("documents/never-uploaded.pdf"))
        .then_output(|| DeleteObjectOutput::builder().build());
    let client = test_client(mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&delete]));

    assert!(client.delete_file("documents/never-uploaded.pdf").await);
}

#[tokio::test]
async fn test_delete_service_error_returns_false() {
    let (_guard, rx) = capture_test_logs();
    let http_client = StaticReplayClient::new(vec![error_event(
        403,
        "AccessDenied",
        "Access Denied",
    )]);
    let client = test_client(replay_s3_client(http_client.clone()));

    assert!(!client.delete_file("documents/a.pdf").await);
    assert_eq!(1, http_client.actual_requests().count());
    assert!(rx.contents().contains("error deleting documents/a.pdf"));
}
