// crates/maillage-core/src/loader/mod.rs

//! # Data Loader
//!
//! Fills a [`MemoryStore`] from a JSON export of the mesh table.
//!
//! - `*.json` / `*.json.gz`: parsed, converted, and cached next to the source
//!   as `<file>.bin` (bincode, gzip with `compact`).
//! - `*.bin`: a cache written by [`MemoryStore::save_as`], loaded directly.
//!
//! A stale or unreadable cache is rebuilt from the source. Writing the cache
//! is best-effort.

use crate::convert;
use crate::error::Result;
use crate::model::MeshUnit;
use crate::raw::MeshUnitsRaw;
use crate::store::MemoryStore;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;

mod cache;
mod common_io;

pub use cache::CompressionMode;

/// Extension of binary caches.
pub const CACHE_SUFFIX: &str = "bin";

/// Directory holding the bundled dataset.
pub fn default_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

pub fn default_dataset_filename() -> &'static str {
    "sample_maillage.json"
}

pub fn default_dataset_path() -> PathBuf {
    default_data_dir().join(default_dataset_filename())
}

impl MemoryStore {
    /// Load the bundled sample dataset.
    pub fn load_default() -> Result<Self> {
        Self::load_from_path(default_dataset_path())
    }

    /// **Smart Load:** binary cache if fresh, otherwise parse the JSON source
    /// and refresh the cache.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let started = Instant::now();

        if path.extension().is_some_and(|ext| ext == CACHE_SUFFIX) {
            let units: Vec<MeshUnit> = cache::read_generic(path, CompressionMode::for_build())?;
            let store = MemoryStore::new(units)?;
            tracing::debug!(
                path = %path.display(),
                units = store.len(),
                elapsed = ?started.elapsed(),
                "loaded binary dataset"
            );
            return Ok(store);
        }

        let cache_path = common_io::get_cache_path(path, CACHE_SUFFIX)?;

        if cache::is_cache_fresh(path, &cache_path) {
            match cache::read_generic::<Vec<MeshUnit>>(&cache_path, CompressionMode::for_build())
                .and_then(MemoryStore::new)
            {
                Ok(store) => {
                    tracing::debug!(
                        cache = %cache_path.display(),
                        units = store.len(),
                        elapsed = ?started.elapsed(),
                        "loaded from cache"
                    );
                    return Ok(store);
                }
                Err(e) => {
                    tracing::warn!(
                        cache = %cache_path.display(),
                        error = %e,
                        "cache unreadable, rebuilding"
                    );
                }
            }
        }

        let store = Self::load_raw_json(path)?;

        if let Err(e) = store.write_cache(&cache_path) {
            tracing::warn!(cache = %cache_path.display(), error = %e, "could not write cache");
        }
        tracing::debug!(
            path = %path.display(),
            units = store.len(),
            elapsed = ?started.elapsed(),
            "loaded from source"
        );

        Ok(store)
    }

    /// Parse a JSON (or `.json.gz`) export, bypassing any cache.
    pub fn load_raw_json(path: impl AsRef<Path>) -> Result<Self> {
        let reader = common_io::open_stream(path.as_ref())?;
        Self::from_json_reader(reader)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: MeshUnitsRaw = serde_json::from_reader(reader)?;
        MemoryStore::new(convert::from_raw(raw)?)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: MeshUnitsRaw = serde_json::from_str(json)?;
        MemoryStore::new(convert::from_raw(raw)?)
    }

    /// Write the units as a binary dataset loadable by [`MemoryStore::load_from_path`].
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        self.write_cache(path.as_ref())
    }

    fn write_cache(&self, path: &Path) -> Result<()> {
        cache::write_generic(path, &self.units(), CompressionMode::for_build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Level;
    use crate::store::MeshStore;
    use std::fs;

    const TWO_UNITS: &str = r#"[
        {"id": "210000000", "code": "27", "libelle": "Bourgogne", "niveau": "region",
         "centre": {"type": "Point", "coordinates": [[47.23, 4.80]]}},
        {"id": "212100000", "code": "21", "libelle": "Côte-d'Or", "niveau": "departement",
         "shape": null, "centre": "[47.42, 4.70]"}
    ]"#;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir =
            std::env::temp_dir().join(format!("maillage-loader-{}-{name}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn parses_json_text() {
        let store = MemoryStore::from_json_str(TWO_UNITS).unwrap();
        assert_eq!(store.len(), 2);
        let dept = store.find_by_code_and_level("21", Level::Departement).unwrap().unwrap();
        let at = dept.lat_lng().unwrap();
        assert_eq!((at.lat, at.lon), (47.42, 4.70));
    }

    #[test]
    fn builds_and_reuses_cache() {
        let dir = scratch_dir("cache");
        let source = dir.join("maillage.json");
        fs::write(&source, TWO_UNITS).unwrap();

        let first = MemoryStore::load_from_path(&source).unwrap();
        let cache_path = dir.join("maillage.json.bin");
        assert!(cache_path.exists());

        let second = MemoryStore::load_from_path(&source).unwrap();
        assert_eq!(first.units(), second.units());

        let direct = MemoryStore::load_from_path(&cache_path).unwrap();
        assert_eq!(direct.len(), 2);

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn missing_dataset_is_an_error() {
        let err = MemoryStore::load_from_path("/nonexistent/maillage.json").unwrap_err();
        assert!(matches!(err, crate::MeshError::InvalidData(_)));
    }

    #[test]
    fn rejects_malformed_identifier() {
        let json = r#"[{"id": "21A100000", "code": "21", "libelle": "x", "niveau": "departement"}]"#;
        assert!(MemoryStore::from_json_str(json).is_err());
    }
}
