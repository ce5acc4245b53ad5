/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Single object upload
pub mod upload;

/// Single object download
pub mod download;

/// Prefix listing
pub mod list_objects;

/// Single object delete
pub mod delete;

/// Pre-signed URLs
pub mod presign;
