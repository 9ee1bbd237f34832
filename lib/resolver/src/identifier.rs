// SPDX-FileCopyrightText: Copyright (c) 2025 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! Structured service identifiers and descriptor name derivation.
//!
//! A service identifier arrives as `service:<remainder>`. The remainder has
//! one canonical grammar: if it contains `':'`, the separator is structural
//! and the remainder must parse as `owner:name[:version]` with exactly 2 or 3
//! non-empty segments; a remainder with no `':'` is a free-form name used
//! verbatim as the descriptor stem. There is no input for which `':'` is
//! treated as a literal character.

use std::fmt;
use std::str::FromStr;

use crate::error::ResolveError;

/// Scheme tag the host deployer uses to route identifiers to this resolver.
pub const SERVICE_SCHEME: &str = "service:";

/// Separator between identifier segments.
pub const IDENTIFIER_SEPARATOR: char = ':';

/// Suffix appended to a descriptor stem to form the resource name.
pub const DESCRIPTOR_SUFFIX: &str = ".json";

/// A structured `owner:name[:version]` service identifier.
///
/// Immutable once parsed. The descriptor resource name joins the segments
/// with `'.'` rather than the identifier's own separator, because `':'` is
/// not a legal file-name character on every filesystem the descriptor may
/// live on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServiceIdentifier {
    owner: String,
    name: String,
    version: Option<String>,
}

impl ServiceIdentifier {
    /// Parse a raw `owner:name[:version]` token.
    ///
    /// Fails with [`ResolveError::MalformedIdentifier`] unless the token
    /// splits into exactly 2 or 3 non-empty segments on `':'`.
    pub fn parse(raw: &str) -> Result<Self, ResolveError> {
        let segments: Vec<&str> = raw.split(IDENTIFIER_SEPARATOR).collect();
        if !(2..=3).contains(&segments.len()) || segments.iter().any(|s| s.is_empty()) {
            return Err(ResolveError::MalformedIdentifier {
                identifier: raw.to_string(),
            });
        }

        Ok(Self {
            owner: segments[0].to_string(),
            name: segments[1].to_string(),
            version: segments.get(2).map(|v| v.to_string()),
        })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Name of the descriptor resource for this identifier.
    ///
    /// The version does not participate: `owner.name.json` regardless of
    /// whether a version was supplied.
    pub fn descriptor_resource_name(&self) -> String {
        format!("{}.{}{}", self.owner, self.name, DESCRIPTOR_SUFFIX)
    }
}

impl FromStr for ServiceIdentifier {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ServiceIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.owner, IDENTIFIER_SEPARATOR, self.name)?;
        if let Some(version) = &self.version {
            write!(f, "{}{}", IDENTIFIER_SEPARATOR, version)?;
        }
        Ok(())
    }
}
