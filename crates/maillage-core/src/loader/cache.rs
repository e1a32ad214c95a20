// crates/maillage-core/src/loader/cache.rs
use crate::error::Result;
use bincode::Options;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::{read::GzDecoder, write::GzEncoder, Compression};

/// Refuse cache payloads above 256 MiB.
const CACHE_LIMIT: u64 = 256 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMode {
    Gzip,
    None,
}

impl CompressionMode {
    /// Gzip when the crate is built with `compact`.
    pub fn for_build() -> Self {
        #[cfg(feature = "compact")]
        {
            CompressionMode::Gzip
        }
        #[cfg(not(feature = "compact"))]
        {
            CompressionMode::None
        }
    }
}

// One options value for both directions, so the integer encoding always agrees.
fn options() -> impl Options {
    bincode::DefaultOptions::new().with_limit(CACHE_LIMIT)
}

/// Writes any serializable value to disk as bincode.
pub fn write_generic<T: Serialize>(
    path: &Path,
    value: &T,
    compression: CompressionMode,
) -> Result<()> {
    let writer = BufWriter::new(File::create(path)?);

    let mut encoder: Box<dyn Write> = match compression {
        #[cfg(feature = "compact")]
        CompressionMode::Gzip => Box::new(GzEncoder::new(writer, Compression::default())),
        #[cfg(not(feature = "compact"))]
        CompressionMode::Gzip => {
            return Err(crate::error::MeshError::InvalidData(
                "gzip requested but 'compact' disabled".into(),
            ))
        }
        CompressionMode::None => Box::new(writer),
    };

    options().serialize_into(&mut encoder, value)?;
    encoder.flush()?;
    Ok(())
}

/// Reads back a value written by [`write_generic`] with the same mode.
pub fn read_generic<T: DeserializeOwned>(path: &Path, compression: CompressionMode) -> Result<T> {
    let reader = BufReader::new(File::open(path)?);

    let decoder: Box<dyn Read> = match compression {
        #[cfg(feature = "compact")]
        CompressionMode::Gzip => Box::new(GzDecoder::new(reader)),
        #[cfg(not(feature = "compact"))]
        CompressionMode::Gzip => {
            return Err(crate::error::MeshError::InvalidData(
                "gzip requested but 'compact' disabled".into(),
            ))
        }
        CompressionMode::None => Box::new(reader),
    };

    Ok(options().deserialize_from(decoder)?)
}

/// A cache is fresh when it exists and is not older than its source.
pub fn is_cache_fresh(source_path: &Path, cache_path: &Path) -> bool {
    let cache_time = match fs::metadata(cache_path).and_then(|m| m.modified()) {
        Ok(t) => t,
        Err(_) => return false,
    };
    match fs::metadata(source_path).and_then(|m| m.modified()) {
        Ok(source_time) => source_time <= cache_time,
        // source gone, the cache is all there is
        Err(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Centre;
    use crate::model::{Level, MeshUnit};

    fn scratch(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("maillage-cache-{}-{name}", std::process::id()))
    }

    #[test]
    fn write_then_read_units() {
        let units = vec![MeshUnit {
            id: "212121231".into(),
            code: "21231".into(),
            libelle: "Dijon".into(),
            niveau: Level::Commune,
            shape: Some(r#"{"type":"Polygon","coordinates":[]}"#.into()),
            centre: Some(Centre::GeoJson {
                coordinates: vec![vec![47.3216, 5.0415]],
            }),
        }];

        for mode in [CompressionMode::None, CompressionMode::for_build()] {
            let path = scratch(&format!("{mode:?}"));
            write_generic(&path, &units, mode).unwrap();
            let back: Vec<MeshUnit> = read_generic(&path, mode).unwrap();
            fs::remove_file(&path).ok();
            assert_eq!(back, units);
        }
    }

    #[test]
    fn missing_cache_is_stale() {
        assert!(!is_cache_fresh(Path::new("Cargo.toml"), &scratch("absent")));
    }
}
