/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::config::Region;
use aws_smithy_http_client::test_util::{ReplayEvent, StaticReplayClient};
use aws_smithy_types::body::SdkBody;
use std::{fs, io::Write, path::PathBuf};
use tempfile::{tempdir, TempDir};

/// Bucket used by [`test_client`]
pub const TEST_BUCKET: &str = "test-bucket";

/// Public endpoint used by [`test_client`]
pub const TEST_PUBLIC_ENDPOINT: &str = "https://pub.example.com/";

/// Wrap an S3 client (usually a mock) in an `r2_storage::Client` for [`TEST_BUCKET`].
pub fn test_client(s3_client: aws_sdk_s3::Client) -> r2_storage::Client {
    let config = r2_storage::Config::builder()
        .bucket(TEST_BUCKET)
        .public_endpoint(TEST_PUBLIC_ENDPOINT)
        .client(s3_client)
        .build()
        .unwrap();
    r2_storage::Client::new(config)
}

/// S3 client that sends its requests to `http_client`.
pub fn replay_s3_client(http_client: StaticReplayClient) -> aws_sdk_s3::Client {
    aws_sdk_s3::Client::from_conf(
        aws_sdk_s3::Config::builder()
            .http_client(http_client)
            .region(Region::from_static("auto"))
            .with_test_defaults()
            .build(),
    )
}

/// Placeholder request for a [`ReplayEvent`]; tests assert on the captured requests instead.
pub fn dummy_expected_request() -> http::Request<SdkBody> {
    http::Request::builder()
        .uri("https://not-used")
        .body(SdkBody::from(&b""[..]))
        .unwrap()
}

/// Replay an S3 XML error document with the given status.
pub fn error_event(status: u16, code: &str, message: &str) -> ReplayEvent {
    let body = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <Error><Code>{code}</Code><Message>{message}</Message>\
         <RequestId>4442587FB7D0A2F9</RequestId></Error>"
    );
    ReplayEvent::new(
        dummy_expected_request(),
        http::Response::builder()
            .status(status)
            .header("Content-Type", "application/xml")
            .body(SdkBody::from(body))
            .unwrap(),
    )
}

/// Create a temporary directory containing `files`, given as (relative path, contents)
pub fn create_test_dir(files: Vec<(&str, &[u8])>) -> TempDir {
    let temp_dir = tempdir().unwrap();

    for (path, contents) in files {
        let full_path = temp_dir.path().join(path);
        let parent = full_path.parent().unwrap();

        // Create the parent directories if they don't exist
        fs::create_dir_all(parent).unwrap();

        let mut file = fs::File::create(&full_path).unwrap();
        file.write_all(contents).unwrap();
    }

    temp_dir
}

/// Write an env file with every required setting into `dir`, followed by `extra` lines.
pub fn write_env_file(dir: &TempDir, extra: &str) -> PathBuf {
    let path = dir.path().join(".env");
    let contents = format!(
        "# R2 settings\n\
         R2_BUCKET_NAME={TEST_BUCKET}\n\
         R2_PUBLIC_ENDPOINT={TEST_PUBLIC_ENDPOINT}\n\
         R2_ENDPOINT=https://account-id.r2.cloudflarestorage.com\n\
         R2_ACCESS_KEY_ID=test-access-key\n\
         R2_SECRET_ACCESS_KEY=test-secret-key\n\
         {extra}"
    );
    fs::write(&path, contents).unwrap();
    path
}
