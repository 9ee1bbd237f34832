// SPDX-FileCopyrightText: Copyright (c) 2025 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! The resource-fetch capability the resolver consumes.
//!
//! The host supplies the loader; the resolver only requires read-to-end
//! semantics and a presence/absence signal. `Ok(None)` means the resource
//! does not exist; `Err` is a genuine I/O fault.

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use std::pin::Pin;
use std::sync::RwLock;

use async_trait::async_trait;
use tokio::io::AsyncRead;

/// A readable byte stream handed back by a [`ResourceLoader`]. Dropping the
/// stream releases the underlying handle.
pub type ResourceStream = Pin<Box<dyn AsyncRead + Send>>;

/// Capability to locate a resource by exact name.
#[async_trait]
pub trait ResourceLoader: Send + Sync {
    /// Fetch the resource named `name`, or `None` if it does not exist.
    async fn fetch(&self, name: &str) -> io::Result<Option<ResourceStream>>;
}

/// Environment variable holding `':'`-separated descriptor search roots for
/// [`DirResourceLoader::from_env`].
pub const RESOURCE_PATH_ENV: &str = "CNDR_RESOURCE_PATH";

/// Loads resources from an ordered list of directories; the first directory
/// containing the file wins.
#[derive(Debug, Clone, Default)]
pub struct DirResourceLoader {
    roots: Vec<PathBuf>,
}

impl DirResourceLoader {
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a loader from the `CNDR_RESOURCE_PATH` environment variable.
    /// Unset or empty yields a loader that finds nothing.
    pub fn from_env() -> Self {
        let roots = std::env::var_os(RESOURCE_PATH_ENV)
            .map(|paths| std::env::split_paths(&paths).collect())
            .unwrap_or_default();
        Self { roots }
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }
}

#[async_trait]
impl ResourceLoader for DirResourceLoader {
    async fn fetch(&self, name: &str) -> io::Result<Option<ResourceStream>> {
        for root in &self.roots {
            let path = root.join(name);
            match tokio::fs::File::open(&path).await {
                Ok(file) => {
                    tracing::trace!(path = %path.display(), "found descriptor resource");
                    return Ok(Some(Box::pin(file)));
                }
                Err(err) if err.kind() == io::ErrorKind::NotFound => continue,
                Err(err) => return Err(err),
            }
        }
        Ok(None)
    }
}

/// In-memory loader keyed by resource name.
///
/// Content can be replaced or removed between fetches, so tests can exercise
/// the resolver's fetch-fresh-on-every-call behavior.
#[derive(Debug, Default)]
pub struct StaticResourceLoader {
    resources: RwLock<HashMap<String, Vec<u8>>>,
}

impl StaticResourceLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the content of `name`.
    pub fn insert(&self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.resources
            .write()
            .unwrap()
            .insert(name.into(), bytes.into());
    }

    /// Remove `name`; subsequent fetches see it as absent.
    pub fn remove(&self, name: &str) {
        self.resources.write().unwrap().remove(name);
    }
}

#[async_trait]
impl ResourceLoader for StaticResourceLoader {
    async fn fetch(&self, name: &str) -> io::Result<Option<ResourceStream>> {
        let bytes = self.resources.read().unwrap().get(name).cloned();
        Ok(bytes.map(|bytes| Box::pin(io::Cursor::new(bytes)) as ResourceStream))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;

    #[tokio::test]
    async fn test_static_loader_fetch_and_remove() {
        let loader = StaticResourceLoader::new();
        loader.insert("a.json", &b"{}"[..]);

        let mut stream = loader.fetch("a.json").await.unwrap().unwrap();
        let mut bytes = Vec::new();
        stream.read_to_end(&mut bytes).await.unwrap();
        assert_eq!(bytes, b"{}");

        loader.remove("a.json");
        assert!(loader.fetch("a.json").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_dir_loader_absent() {
        let loader = DirResourceLoader::new(["/nonexistent-conductor-root"]);
        assert!(loader.fetch("a.json").await.unwrap().is_none());
    }
}
