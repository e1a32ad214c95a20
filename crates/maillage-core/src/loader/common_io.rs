// crates/maillage-core/src/loader/common_io.rs
use crate::error::{MeshError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Opens a dataset file and buffers it. Files ending in `.gz` are decoded
/// on the fly.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        MeshError::InvalidData(format!("dataset not readable at {}: {e}", path.display()))
    })?;
    let reader = BufReader::new(file);

    if !is_gzip(path) {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(MeshError::InvalidData(format!(
            "{} is gzip compressed but the 'compact' feature is disabled",
            path.display()
        )))
    }
}

pub fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// `<dataset file name>.<suffix>` next to the dataset.
pub fn get_cache_path(json_path: &Path, suffix: &str) -> Result<PathBuf> {
    let filename = json_path.file_name().ok_or_else(|| {
        MeshError::InvalidData(format!("{} has no file name", json_path.display()))
    })?;
    Ok(json_path.with_file_name(format!("{}.{suffix}", filename.to_string_lossy())))
}
