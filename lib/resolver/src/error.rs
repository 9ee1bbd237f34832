// SPDX-FileCopyrightText: Copyright (c) 2025 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! Failure classes for service resolution.
//!
//! Every variant names the identifier or descriptor resource it was detected
//! on. None of these are transient: they indicate a misconfigured identifier
//! or deployment artifact, so the resolver never retries. The one exception
//! is [`ResolveError::Io`], which carries a genuine I/O fault from the
//! resource loader through the same channel.

use thiserror::Error;

/// Errors that can occur while resolving a service identifier.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// The identifier was empty after stripping the scheme tag.
    #[error("Invalid identifier: {identifier}")]
    InvalidIdentifier { identifier: String },

    /// The identifier did not split into 2 or 3 non-empty segments.
    #[error("Invalid service identifier: {identifier}")]
    MalformedIdentifier { identifier: String },

    /// No descriptor resource exists at the derived name.
    #[error("Cannot find service descriptor file {resource}")]
    ResourceNotFound { resource: String },

    /// The descriptor resource exists but contains zero bytes.
    #[error("{resource} is empty")]
    EmptyDescriptor { resource: String },

    /// The descriptor resource is not a valid JSON descriptor document.
    #[error("{resource} contains invalid json")]
    InvalidDescriptor {
        resource: String,
        #[source]
        source: serde_json::Error,
    },

    /// The descriptor parsed but has no usable `main` value.
    #[error("{resource} does not contain a main field")]
    MissingMainField { resource: String },

    /// The resource loader failed with an I/O fault (distinct from absence).
    #[error("Failed to read service descriptor file {resource}")]
    Io {
        resource: String,
        #[source]
        source: std::io::Error,
    },
}
