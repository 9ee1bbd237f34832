// SPDX-FileCopyrightText: Copyright (c) 2025 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! The resolution algorithm: identifier in, target and merged options out.

use tokio::io::AsyncReadExt;

use crate::descriptor::ServiceDescriptor;
use crate::error::ResolveError;
use crate::identifier::{
    ServiceIdentifier, DESCRIPTOR_SUFFIX, IDENTIFIER_SEPARATOR, SERVICE_SCHEME,
};
use crate::loader::ResourceLoader;
use crate::options::DeploymentOptions;

/// Outcome of a successful resolution: the target to instantiate and the
/// fully merged deployment options. The host owns everything after this.
#[derive(Debug, Clone)]
pub struct ResolvedService {
    pub main: String,
    pub options: DeploymentOptions,
}

/// Resolves `service:` identifiers to deployable targets.
///
/// Holds no state: every call independently fetches and parses its
/// descriptor, so concurrent calls are safe and descriptor changes between
/// calls are always observed.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServiceResolver;

impl ServiceResolver {
    pub fn new() -> Self {
        Self
    }

    /// Resolve `raw` against `loader`, merging descriptor options with the
    /// caller's `options`.
    ///
    /// The `service:` scheme tag is stripped if present. The caller's
    /// options are read, never modified; the merged result is returned in
    /// [`ResolvedService`]. Completes exactly once with either the resolved
    /// service or a [`ResolveError`]; nothing is retried or cached.
    pub async fn resolve(
        &self,
        raw: &str,
        options: &DeploymentOptions,
        loader: &dyn ResourceLoader,
    ) -> Result<ResolvedService, ResolveError> {
        let remainder = raw.strip_prefix(SERVICE_SCHEME).unwrap_or(raw);
        if remainder.is_empty() {
            return Err(ResolveError::InvalidIdentifier {
                identifier: raw.to_string(),
            });
        }

        let resource = if remainder.contains(IDENTIFIER_SEPARATOR) {
            ServiceIdentifier::parse(remainder)?.descriptor_resource_name()
        } else {
            format!("{remainder}{DESCRIPTOR_SUFFIX}")
        };
        tracing::debug!(identifier = remainder, resource = %resource, "resolving service");

        let stream = loader
            .fetch(&resource)
            .await
            .map_err(|source| ResolveError::Io {
                resource: resource.clone(),
                source,
            })?;
        let Some(mut stream) = stream else {
            return Err(ResolveError::ResourceNotFound { resource });
        };

        // Read to end and drop the handle before any validation, so it is
        // released on every exit path below.
        let mut bytes = Vec::new();
        stream
            .read_to_end(&mut bytes)
            .await
            .map_err(|source| ResolveError::Io {
                resource: resource.clone(),
                source,
            })?;
        drop(stream);

        let descriptor = ServiceDescriptor::parse(&resource, &bytes)?;
        let (main, descriptor_options) = descriptor.into_parts();
        let merged = options.merge_descriptor(&descriptor_options);

        tracing::debug!(main = %main, "service resolved");
        Ok(ResolvedService {
            main,
            options: merged,
        })
    }
}
