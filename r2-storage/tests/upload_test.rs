/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Output;
use aws_sdk_s3::operation::put_object::PutObjectOutput;
use aws_sdk_s3::types::Object;
use aws_smithy_http_client::test_util::StaticReplayClient;
use aws_smithy_mocks_experimental::{mock, mock_client, RuleMode};
use aws_smithy_runtime::test_util::capture_test_logs::capture_test_logs;
use r2_storage::error::ErrorKind;
use r2_storage::operation::upload::document_key;
use r2_storage::types::UploadResult;
use test_common::{create_test_dir, error_event, replay_s3_client, test_client, TEST_BUCKET};

#[tokio::test]
async fn test_upload_file() {
    let dir = create_test_dir(vec![("report.PDF", b"%PDF-1.7 quarterly".as_slice())]);
    let path = dir.path().join("report.PDF");

    let put_object = mock!(aws_sdk_s3::Client::put_object)
        .match_requests(|r| {
            r.bucket() == Some(TEST_BUCKET)
                && r.key() == Some("documents/report.PDF")
                && r.content_type() == Some("application/pdf")
        })
        .then_output(|| PutObjectOutput::builder().e_tag("\"etag-1\"").build());
    let client = test_client(mock_client!(
        aws_sdk_s3,
        RuleMode::Sequential,
        &[&put_object]
    ));

    let key = document_key(&path).unwrap();
    let result = client.upload_file(&path, &key).await.unwrap();

    let output = result.output().expect("upload succeeds");
    assert_eq!("documents/report.PDF", output.key());
    assert_eq!(
        "https://pub.example.com/documents/report.PDF",
        output.url()
    );
    assert_eq!(Some("\"etag-1\""), output.e_tag());
}

#[tokio::test]
async fn test_upload_unknown_extension_is_octet_stream() {
    let dir = create_test_dir(vec![("blob.bin", [0u8; 64].as_slice())]);
    let path = dir.path().join("blob.bin");

    let put_object = mock!(aws_sdk_s3::Client::put_object)
        .match_requests(|r| r.content_type() == Some("application/octet-stream"))
        .then_output(|| PutObjectOutput::builder().build());
    let client = test_client(mock_client!(
        aws_sdk_s3,
        RuleMode::Sequential,
        &[&put_object]
    ));

    let result = client.upload_file(&path, "documents/blob.bin").await.unwrap();
    assert!(result.is_success());
    assert_eq!(None, result.output().unwrap().e_tag());
}

#[tokio::test]
async fn test_upload_service_error_is_a_failure_result() {
    let (_guard, rx) = capture_test_logs();
    let dir = create_test_dir(vec![("notes.txt", b"hello".as_slice())]);
    let path = dir.path().join("notes.txt");

    let http_client = StaticReplayClient::new(vec![error_event(
        403,
        "AccessDenied",
        "Access Denied",
    )]);
    let client = test_client(replay_s3_client(http_client.clone()));

    let result = client.upload_file(&path, "documents/notes.txt").await.unwrap();
    match result {
        UploadResult::Failure { message } => {
            assert_eq!("AccessDenied: Access Denied", message);
            assert!(!message.contains("raw: Response"));
        }
        UploadResult::Success(output) => panic!("unexpected success: {output:?}"),
    }
    assert_eq!(1, http_client.actual_requests().count());
    assert!(rx.contents().contains("error uploading documents/notes.txt"));
}

#[tokio::test]
async fn test_upload_missing_file_fails_before_any_request() {
    let dir = create_test_dir(vec![]);
    let path = dir.path().join("missing.pdf");

    let http_client = StaticReplayClient::new(vec![]);
    let client = test_client(replay_s3_client(http_client.clone()));

    let err = client
        .upload_file(&path, "documents/missing.pdf")
        .await
        .unwrap_err();
    assert_eq!(&ErrorKind::IOError, err.kind());
    assert_eq!(0, http_client.actual_requests().count());
}

#[tokio::test]
async fn test_upload_directory_is_invalid_input() {
    let dir = create_test_dir(vec![("nested/a.txt", b"a".as_slice())]);

    let http_client = StaticReplayClient::new(vec![]);
    let client = test_client(replay_s3_client(http_client.clone()));

    let err = client
        .upload_file(dir.path().join("nested"), "documents/nested")
        .await
        .unwrap_err();
    assert_eq!(&ErrorKind::InputInvalid, err.kind());
    assert_eq!(0, http_client.actual_requests().count());
}

#[tokio::test]
async fn test_upload_then_list() {
    let contents = b"%PDF-1.7 upload then list";
    let dir = create_test_dir(vec![("nested/dir/sample.pdf", contents.as_slice())]);
    let path = dir.path().join("nested/dir/sample.pdf");
    let key = document_key(&path).unwrap();
    assert_eq!("documents/sample.pdf", key);

    let put_object = mock!(aws_sdk_s3::Client::put_object)
        .match_requests(|r| r.key() == Some("documents/sample.pdf"))
        .then_output(|| PutObjectOutput::builder().e_tag("\"etag-2\"").build());
    let list_objects = mock!(aws_sdk_s3::Client::list_objects_v2)
        .match_requests(|r| r.prefix() == Some("documents/"))
        .then_output(move || {
            ListObjectsV2Output::builder()
                .contents(
                    Object::builder()
                        .key("documents/sample.pdf")
                        .size(contents.len() as i64)
                        .build(),
                )
                .build()
        });
    let client = test_client(mock_client!(
        aws_sdk_s3,
        RuleMode::Sequential,
        &[&put_object, &list_objects]
    ));

    let result = client.upload_file(&path, &key).await.unwrap();
    assert!(result.is_success());

    let files = client.list_files("documents/").await;
    let listed = files
        .iter()
        .find(|f| f.key() == key)
        .expect("uploaded key is listed");
    assert_eq!(contents.len() as u64, listed.size());
}
