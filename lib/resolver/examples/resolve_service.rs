// SPDX-FileCopyrightText: Copyright (c) 2025 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! Resolve a service identifier against a directory of descriptors.
//!
//! ```text
//! cargo run --example resolve_service -- service:acme:billing:1.2 ./descriptors
//! ```
//!
//! With no directory arguments, search roots come from `CNDR_RESOURCE_PATH`.

use conductor_resolver::{raise, DeploymentOptions, DirResourceLoader, Result, ServiceResolver};

#[tokio::main]
async fn main() -> Result<()> {
    conductor_logging::init();

    let mut args = std::env::args().skip(1);
    let Some(identifier) = args.next() else {
        raise!("usage: resolve_service <identifier> [resource-dir...]");
    };
    let roots: Vec<String> = args.collect();

    let loader = if roots.is_empty() {
        DirResourceLoader::from_env()
    } else {
        DirResourceLoader::new(roots)
    };

    let resolved = ServiceResolver::new()
        .resolve(&identifier, &DeploymentOptions::new(), &loader)
        .await?;

    println!("main: {}", resolved.main);
    println!("options: {}", serde_json::to_string_pretty(&resolved.options)?);
    Ok(())
}
