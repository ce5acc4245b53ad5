/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use r2_storage::cli;
use r2_storage::operation::upload::document_key;
use r2_storage::types::UploadResult;

#[derive(Debug, Clone, clap::Parser)]
#[command(name = "r2-upload")]
#[command(about = "Uploads a local file to the bucket under documents/<file name>.")]
struct Args {
    /// Local file to upload
    file_path: Option<PathBuf>,

    /// Env file holding the R2 settings
    #[arg(long, default_value = cli::DEFAULT_ENV_FILE)]
    env_file: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();
    cli::init_tracing();

    let file_path = match args.file_path {
        Some(ref path) if path.exists() => path,
        _ => cli::exit_with_usage(Args::command(), "r2-upload ./documents/sample.pdf"),
    };
    let key = document_key(file_path)
        .unwrap_or_else(|err| cli::exit_with_error("invalid file path", &err));

    let client = cli::connect(&args.env_file).await;

    println!("Uploading {} to R2...", cli::display_name(file_path));
    match client.upload_file(file_path, &key).await {
        Ok(UploadResult::Success(output)) => {
            println!("✓ Upload successful!");
            println!("Key: {}", output.key());
            println!("Public URL: {}", output.url());
            println!("ETag: {}", output.e_tag().unwrap_or_default());
        }
        Ok(UploadResult::Failure { message }) => {
            println!("✗ Upload failed: {message}");
            std::process::exit(1);
        }
        Err(err) => cli::exit_with_error("✗ Upload failed", &err),
    }
}
