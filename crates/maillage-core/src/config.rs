// crates/maillage-core/src/config.rs
use crate::error::{MeshError, Result};
use crate::proximity::ProximityOptions;
use crate::search::MAX_SEARCH_LIMIT;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Tunables of [`MeshResolver`](crate::MeshResolver).
///
/// Every field has a default, so a config file only needs the keys it
/// overrides:
///
/// ```json
/// { "proximity": { "limit": 12 }, "max_search_limit": 50 }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Neighbour options of the single-unit path.
    pub proximity: ProximityOptions,
    /// Neighbour options of the secondary path.
    pub secondary_proximity: ProximityOptions,
    /// Hard cap on search results, whatever the caller asks for.
    pub max_search_limit: usize,
    /// How many coarse matches the store may hand over for ranking. A store
    /// over the cap keeps its best-tier matches.
    pub search_candidate_limit: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        ResolverConfig {
            proximity: ProximityOptions::single_unit(),
            secondary_proximity: ProximityOptions::secondary(),
            max_search_limit: MAX_SEARCH_LIMIT,
            search_candidate_limit: 2000,
        }
    }
}

impl ResolverConfig {
    /// Read and validate a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let config: ResolverConfig = serde_json::from_str(&text)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), ?config, "resolver config loaded");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let limits = [
            ("proximity.limit", self.proximity.limit),
            ("secondary_proximity.limit", self.secondary_proximity.limit),
            ("max_search_limit", self.max_search_limit),
            ("search_candidate_limit", self.search_candidate_limit),
        ];
        for (name, value) in limits {
            if value == 0 {
                return Err(MeshError::InvalidData(format!("{name} must be at least 1")));
            }
        }
        if self.search_candidate_limit < self.max_search_limit {
            return Err(MeshError::InvalidData(format!(
                "search_candidate_limit ({}) is below max_search_limit ({})",
                self.search_candidate_limit, self.max_search_limit
            )));
        }
        Ok(())
    }
}
