//! Bundled asset lookup and texture decoding.

use crate::error::AssetError;
use greenviews_core::Texture;
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};

/// Read-only store of named binary assets.
pub trait AssetStore {
    /// Read the full contents of an asset.
    fn open(&self, name: &str) -> Result<Vec<u8>, AssetError>;
}

/// Assets stored as files beneath a root directory.
#[derive(Debug, Clone)]
pub struct DirAssetStore {
    root: PathBuf,
}

impl DirAssetStore {
    /// Serve assets from `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map an asset name to a path, refusing names that leave the root.
    fn resolve(&self, name: &str) -> Result<PathBuf, AssetError> {
        let relative = Path::new(name);
        let plain = !name.is_empty()
            && relative
                .components()
                .all(|c| matches!(c, Component::Normal(_)));
        if !plain {
            return Err(AssetError::InvalidName(name.to_string()));
        }
        Ok(self.root.join(relative))
    }
}

impl AssetStore for DirAssetStore {
    fn open(&self, name: &str) -> Result<Vec<u8>, AssetError> {
        let path = self.resolve(name)?;
        std::fs::read(&path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                AssetError::NotFound(name.to_string())
            } else {
                AssetError::Io {
                    name: name.to_string(),
                    source,
                }
            }
        })
    }
}

/// Assets held in memory, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct MemoryAssetStore {
    assets: HashMap<String, Vec<u8>>,
}

impl MemoryAssetStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an asset, returning the store.
    #[must_use]
    pub fn with_asset(mut self, name: impl Into<String>, bytes: Vec<u8>) -> Self {
        self.insert(name, bytes);
        self
    }

    /// Add or replace an asset.
    pub fn insert(&mut self, name: impl Into<String>, bytes: Vec<u8>) {
        self.assets.insert(name.into(), bytes);
    }
}

impl AssetStore for MemoryAssetStore {
    fn open(&self, name: &str) -> Result<Vec<u8>, AssetError> {
        self.assets
            .get(name)
            .cloned()
            .ok_or_else(|| AssetError::NotFound(name.to_string()))
    }
}

/// Read `name` from `store` and decode it into an RGBA8 texture.
///
/// The container format (WebP, PNG) is detected from the bytes, not the name.
pub fn load_texture(store: &dyn AssetStore, name: &str) -> Result<Texture, AssetError> {
    let bytes = store.open(name)?;
    let decoded = image::load_from_memory(&bytes).map_err(|source| AssetError::Decode {
        name: name.to_string(),
        source,
    })?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Texture::from_rgba8(name, width, height, rgba.into_raw())
        .filter(|texture| !texture.is_empty())
        .ok_or_else(|| AssetError::Empty(name.to_string()))
}
