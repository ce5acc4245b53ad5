/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use r2_storage::cli;

#[derive(Debug, Clone, clap::Parser)]
#[command(name = "r2-download")]
#[command(about = "Downloads an object from the bucket to a local file.")]
struct Args {
    /// Key of the object to download
    key: Option<String>,

    /// Local path to write the object to
    save_path: Option<PathBuf>,

    /// Env file holding the R2 settings
    #[arg(long, default_value = cli::DEFAULT_ENV_FILE)]
    env_file: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();
    cli::init_tracing();

    let (key, save_path) = match (&args.key, &args.save_path) {
        (Some(key), Some(save_path)) if !key.is_empty() => (key, save_path),
        _ => cli::exit_with_usage(
            Args::command(),
            "r2-download documents/sample.pdf ./downloaded.pdf",
        ),
    };

    let client = cli::connect(&args.env_file).await;

    println!("Downloading {key} from R2...");
    match client.download_file(key, save_path).await {
        Ok(true) => println!("✓ Download successful to {}", save_path.display()),
        Ok(false) => {
            println!("✗ Download failed");
            std::process::exit(1);
        }
        Err(err) => cli::exit_with_error("✗ Download failed", &err),
    }
}
