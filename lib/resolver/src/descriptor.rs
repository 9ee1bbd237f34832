// SPDX-FileCopyrightText: Copyright (c) 2025 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! The service descriptor document.
//!
//! A descriptor is a small JSON object mapping an identifier to the target
//! the host should instantiate, plus default deployment options:
//!
//! ```json
//! {
//!   "main": "acme-billing-service",
//!   "options": {
//!     "worker": true,
//!     "config": { "port": 8080 }
//!   }
//! }
//! ```

use serde::Deserialize;

use crate::error::ResolveError;
use crate::options::DeploymentOptions;

/// Wire shape of a descriptor, before validation. `main` is optional here so
/// that its absence can be reported as a distinct failure class rather than
/// a parse error.
#[derive(Debug, Default, Deserialize)]
struct RawDescriptor {
    #[serde(default)]
    main: Option<String>,
    #[serde(default)]
    options: DeploymentOptions,
}

/// A parsed and validated service descriptor. Read-only.
#[derive(Debug, Clone)]
pub struct ServiceDescriptor {
    main: String,
    options: DeploymentOptions,
}

impl ServiceDescriptor {
    /// Parse and validate descriptor content fetched from `resource`.
    ///
    /// Classifies failures in order: zero bytes, invalid JSON, missing or
    /// empty `main`. The resource name only labels errors.
    pub fn parse(resource: &str, bytes: &[u8]) -> Result<Self, ResolveError> {
        if bytes.is_empty() {
            return Err(ResolveError::EmptyDescriptor {
                resource: resource.to_string(),
            });
        }

        let raw: RawDescriptor =
            serde_json::from_slice(bytes).map_err(|source| ResolveError::InvalidDescriptor {
                resource: resource.to_string(),
                source,
            })?;

        let main = match raw.main {
            Some(main) if !main.is_empty() => main,
            _ => {
                return Err(ResolveError::MissingMainField {
                    resource: resource.to_string(),
                })
            }
        };

        Ok(Self {
            main,
            options: raw.options,
        })
    }

    /// The target the host should instantiate.
    pub fn main(&self) -> &str {
        &self.main
    }

    /// Descriptor-supplied deployment options (empty if the document had
    /// none).
    pub fn options(&self) -> &DeploymentOptions {
        &self.options
    }

    pub fn into_parts(self) -> (String, DeploymentOptions) {
        (self.main, self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let descriptor =
            ServiceDescriptor::parse("audit.json", br#"{"main": "audit-service"}"#).unwrap();
        assert_eq!(descriptor.main(), "audit-service");
        assert_eq!(descriptor.options(), &DeploymentOptions::new());
    }

    #[test]
    fn test_parse_with_options() {
        let descriptor = ServiceDescriptor::parse(
            "audit.json",
            br#"{"main": "audit-service", "options": {"worker": true, "config": {"level": "full"}}}"#,
        )
        .unwrap();
        assert_eq!(descriptor.options().worker, Some(true));
        assert_eq!(
            descriptor.options().config.get("level"),
            Some(&serde_json::json!("full"))
        );
    }

    #[test]
    fn test_parse_empty() {
        let err = ServiceDescriptor::parse("audit.json", b"").unwrap_err();
        assert!(matches!(err, ResolveError::EmptyDescriptor { .. }));
        assert!(err.to_string().starts_with("audit.json is empty"));
    }

    #[test]
    fn test_parse_invalid_json() {
        for bytes in [&b"{ not json"[..], &b"[1, 2]"[..], &b"\"just a string\""[..]] {
            let err = ServiceDescriptor::parse("audit.json", bytes).unwrap_err();
            assert!(
                matches!(err, ResolveError::InvalidDescriptor { .. }),
                "{bytes:?} should be invalid, got {err:?}"
            );
            assert!(err
                .to_string()
                .starts_with("audit.json contains invalid json"));
        }
    }

    #[test]
    fn test_parse_missing_or_empty_main() {
        for bytes in [&br#"{"options": {}}"#[..], &br#"{"main": ""}"#[..]] {
            let err = ServiceDescriptor::parse("audit.json", bytes).unwrap_err();
            assert!(matches!(err, ResolveError::MissingMainField { .. }));
            assert!(err
                .to_string()
                .starts_with("audit.json does not contain a main field"));
        }
    }
}
