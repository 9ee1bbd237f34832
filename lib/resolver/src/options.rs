// SPDX-FileCopyrightText: Copyright (c) 2025 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! Deployment options and the asymmetric option merge.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Free-form JSON object used for `config` and for option fields the
/// platform does not model.
pub type ConfigMap = Map<String, Value>;

/// The bag of instantiation parameters passed between caller, descriptor,
/// and host deployer.
///
/// `config` is the component's own configuration. The remaining fields shape
/// the deployment itself; descriptor-authored fields outside this set are
/// carried opaquely in `extra` and merged by the same rule as the named
/// fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeploymentOptions {
    /// Component configuration, key to value.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub config: ConfigMap,

    /// Deploy the component as a worker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker: Option<bool>,

    /// Isolation group the component instance joins.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isolation_group: Option<String>,

    /// Additional resource search paths for the instantiated component.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_search_paths: Option<Vec<String>>,

    /// Number of instances to deploy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instances: Option<u32>,

    /// Option fields this platform version does not model.
    #[serde(flatten)]
    pub extra: ConfigMap,
}

impl DeploymentOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: ConfigMap) -> Self {
        self.config = config;
        self
    }

    pub fn with_worker(mut self, worker: bool) -> Self {
        self.worker = Some(worker);
        self
    }

    pub fn with_isolation_group(mut self, group: impl Into<String>) -> Self {
        self.isolation_group = Some(group.into());
        self
    }

    pub fn with_extra_search_paths(mut self, paths: Vec<String>) -> Self {
        self.extra_search_paths = Some(paths);
        self
    }

    pub fn with_instances(mut self, instances: u32) -> Self {
        self.instances = Some(instances);
        self
    }

    /// Layer descriptor-supplied options over this caller-supplied set,
    /// returning the merged result. Neither input is modified.
    ///
    /// Precedence is asymmetric. Every option field present in the
    /// descriptor overwrites the caller's value: the descriptor author owns
    /// deployment-shape decisions. The descriptor's `config` is only a set
    /// of defaults: the merged `config` starts from it and every key in the
    /// caller's `config` overwrites the same key, one key at a time, so a
    /// caller can override individual entries without repeating the rest.
    pub fn merge_descriptor(&self, descriptor: &DeploymentOptions) -> DeploymentOptions {
        let mut merged = self.clone();

        if let Some(worker) = descriptor.worker {
            merged.worker = Some(worker);
        }
        if let Some(group) = &descriptor.isolation_group {
            merged.isolation_group = Some(group.clone());
        }
        if let Some(paths) = &descriptor.extra_search_paths {
            merged.extra_search_paths = Some(paths.clone());
        }
        if let Some(instances) = descriptor.instances {
            merged.instances = Some(instances);
        }
        for (key, value) in &descriptor.extra {
            merged.extra.insert(key.clone(), value.clone());
        }

        let mut config = descriptor.config.clone();
        for (key, value) in &self.config {
            config.insert(key.clone(), value.clone());
        }
        merged.config = config;

        merged
    }
}
