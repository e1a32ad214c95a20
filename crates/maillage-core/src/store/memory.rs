// crates/maillage-core/src/store/memory.rs
use super::MeshStore;
use crate::codec::IdPattern;
use crate::error::{MeshError, Result};
use crate::model::{Level, MeshStats, MeshUnit};
use crate::search::{rank_search, SearchTerm};
use std::collections::HashMap;

/// In-process mesh table, indexed by identifier and by (level, code).
///
/// Units keep their dataset order; pattern and level scans return them in
/// that order.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    units: Vec<MeshUnit>,
    by_id: HashMap<String, usize>,
    by_code: HashMap<(Level, String), usize>,
}

impl MemoryStore {
    /// Build the store, rejecting duplicate identifiers and duplicate
    /// (level, code) pairs.
    pub fn new(units: Vec<MeshUnit>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(units.len());
        let mut by_code = HashMap::with_capacity(units.len());

        for (idx, unit) in units.iter().enumerate() {
            if by_id.insert(unit.id.clone(), idx).is_some() {
                return Err(MeshError::InvalidData(format!(
                    "duplicate identifier {}",
                    unit.id
                )));
            }
            if by_code.insert((unit.niveau, unit.code.clone()), idx).is_some() {
                return Err(MeshError::InvalidData(format!(
                    "duplicate {} code {}",
                    unit.niveau, unit.code
                )));
            }
        }

        Ok(MemoryStore {
            units,
            by_id,
            by_code,
        })
    }

    /// All units, in dataset order.
    pub fn units(&self) -> &[MeshUnit] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    fn at_level(&self, niveau: Level) -> impl Iterator<Item = &MeshUnit> {
        self.units.iter().filter(move |u| u.niveau == niveau)
    }
}

impl MeshStore for MemoryStore {
    fn find_by_code_and_level(&self, code: &str, niveau: Level) -> Result<Option<MeshUnit>> {
        Ok(self
            .by_code
            .get(&(niveau, code.to_owned()))
            .map(|&idx| self.units[idx].clone()))
    }

    fn find_by_id(&self, id: &str) -> Result<Option<MeshUnit>> {
        Ok(self.by_id.get(id).map(|&idx| self.units[idx].clone()))
    }

    fn find_by_id_pattern(&self, pattern: &IdPattern, niveau: Level) -> Result<Vec<MeshUnit>> {
        Ok(self
            .at_level(niveau)
            .filter(|u| pattern.matches(&u.id))
            .cloned()
            .collect())
    }

    fn find_all_by_level(&self, niveau: Level, limit: Option<usize>) -> Result<Vec<MeshUnit>> {
        let limit = limit.filter(|&n| n > 0).unwrap_or(usize::MAX);
        Ok(self.at_level(niveau).take(limit).cloned().collect())
    }

    fn search_by_term(
        &self,
        term: &str,
        niveau: Option<Level>,
        limit: usize,
    ) -> Result<Vec<MeshUnit>> {
        let Some(parsed) = SearchTerm::parse(term) else {
            return Ok(Vec::new());
        };
        let matches: Vec<MeshUnit> = self
            .units
            .iter()
            .filter(|u| niveau.map_or(true, |n| u.niveau == n))
            .filter(|u| parsed.matches_coarse(&u.libelle))
            .cloned()
            .collect();
        if matches.len() <= limit {
            return Ok(matches);
        }
        // the cap must keep the best tiers, not the first rows
        Ok(rank_search(term, matches, limit)
            .into_iter()
            .map(|hit| hit.unit)
            .collect())
    }

    fn stats(&self) -> Result<MeshStats> {
        let mut stats = MeshStats::default();
        for unit in &self.units {
            stats.bump(unit.niveau);
        }
        Ok(stats)
    }
}
