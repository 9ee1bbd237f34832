// SPDX-FileCopyrightText: Copyright (c) 2024-2025 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Name-based service resolution for the Conductor deployment platform.
//!
//! A caller asks the platform to deploy `service:<identifier>`. This crate
//! turns that identifier into the concrete target to instantiate and the
//! final deployment options: it derives a descriptor resource name from the
//! identifier, fetches the descriptor through a host-supplied
//! [`ResourceLoader`], validates it, and merges the descriptor's options
//! with the caller's. Descriptor options win on deployment shape; the
//! caller's `config` keys win over the descriptor's config defaults.
//!
//! The platform's loader and component lifecycle live elsewhere; this crate
//! only computes what to instantiate and with what configuration.

pub use anyhow::{Context as ErrorContext, Error, Result, anyhow as error, bail as raise};

pub mod descriptor;
mod error;
pub mod identifier;
pub mod loader;
pub mod options;
pub mod resolver;

pub use descriptor::ServiceDescriptor;
pub use error::ResolveError;
pub use identifier::{ServiceIdentifier, DESCRIPTOR_SUFFIX, IDENTIFIER_SEPARATOR, SERVICE_SCHEME};
pub use loader::{DirResourceLoader, ResourceLoader, ResourceStream, StaticResourceLoader};
pub use options::{ConfigMap, DeploymentOptions};
pub use resolver::{ResolvedService, ServiceResolver};
