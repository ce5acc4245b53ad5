/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
use std::path::PathBuf;

use clap::Parser;
use r2_storage::cli;

#[derive(Debug, Clone, clap::Parser)]
#[command(name = "r2-list")]
#[command(about = "Lists the objects in the bucket under a prefix.")]
struct Args {
    /// Only list keys starting with this prefix
    #[arg(default_value = cli::DEFAULT_LIST_PREFIX)]
    prefix: String,

    /// Env file holding the R2 settings
    #[arg(long, default_value = cli::DEFAULT_ENV_FILE)]
    env_file: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();
    cli::init_tracing();

    let client = cli::connect(&args.env_file).await;

    println!("Listing files in R2 (prefix: {})...", args.prefix);
    let files = client.list_files(&args.prefix).await;
    if files.is_empty() {
        print!("{}", cli::format_listing(&files));
        return;
    }

    println!();
    print!("{}", cli::format_listing(&files));
    println!();
}
