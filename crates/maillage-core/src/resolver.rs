// crates/maillage-core/src/resolver.rs

//! # Mesh Resolver
//!
//! The query surface over a [`MeshStore`]: lookups, children, breadcrumbs,
//! nearest siblings and ranked search. Every operation is a stateless
//! function of the store contents and the [`ResolverConfig`], so a resolver
//! can be shared across threads whenever its store can.

use crate::breadcrumb::resolve_breadcrumb;
use crate::codec::MeshId;
use crate::config::ResolverConfig;
use crate::error::{MeshError, Result};
use crate::model::{BreadcrumbEntry, Level, MeshStats, MeshUnit};
use crate::proximity::{resolve_proximity, Proximity, ProximityOptions};
use crate::search::{clamp_limit, rank_search, SearchHit};
use crate::store::MeshStore;
use std::time::Instant;

/// Run `f`, logging how long it took at debug level.
fn timed<T>(operation: &'static str, f: impl FnOnce() -> Result<T>) -> Result<T> {
    let started = Instant::now();
    let out = f();
    tracing::debug!(operation, elapsed = ?started.elapsed(), ok = out.is_ok(), "query finished");
    out
}

#[derive(Clone, Debug)]
pub struct MeshResolver<S> {
    store: S,
    config: ResolverConfig,
}

impl<S: MeshStore> MeshResolver<S> {
    /// Resolver with the default configuration.
    pub fn new(store: S) -> Self {
        Self::with_config(store, ResolverConfig::default())
    }

    pub fn with_config(store: S, config: ResolverConfig) -> Self {
        MeshResolver { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Give the store back, ending the resolver.
    pub fn into_store(self) -> S {
        self.store
    }

    /// The unit with this code at this level.
    pub fn unit(&self, code: &str, niveau: Level) -> Result<Option<MeshUnit>> {
        timed("unit", || self.store.find_by_code_and_level(code, niveau))
    }

    /// The unit with this identifier. The identifier is validated first.
    pub fn unit_by_id(&self, id: &str) -> Result<Option<MeshUnit>> {
        let id = MeshId::parse(id)?;
        timed("unit_by_id", || self.store.find_by_id(id.as_str()))
    }

    /// Every unit at `niveau`. `None` or `Some(0)` means no limit.
    pub fn units_by_level(&self, niveau: Level, limit: Option<usize>) -> Result<Vec<MeshUnit>> {
        timed("units_by_level", || self.store.find_all_by_level(niveau, limit))
    }

    /// Direct children of `(code, niveau)`: departments of a region, communes
    /// of a department. Communes have none.
    ///
    /// Fails with [`MeshError::NotFound`] when the parent does not exist.
    pub fn children(
        &self,
        code: &str,
        niveau: Level,
        limit: Option<usize>,
    ) -> Result<Vec<MeshUnit>> {
        timed("children", || {
            let parent = self
                .store
                .find_by_code_and_level(code, niveau)?
                .ok_or_else(|| MeshError::not_found(code, niveau))?;

            let id = MeshId::parse(&parent.id)?;
            let Some((pattern, child_level)) = id.children_pattern(niveau) else {
                tracing::debug!(code, %niveau, "level has no children");
                return Ok(Vec::new());
            };

            let mut children = self.store.find_by_id_pattern(&pattern, child_level)?;
            if let Some(limit) = limit.filter(|&n| n > 0) {
                children.truncate(limit);
            }
            Ok(children)
        })
    }

    /// Ancestor chain of `(code, niveau)`, region first.
    pub fn breadcrumb(&self, code: &str, niveau: Level) -> Result<Vec<BreadcrumbEntry>> {
        timed("breadcrumb", || resolve_breadcrumb(&self.store, code, niveau))
    }

    /// Nearest same-region peers with the single-unit options.
    pub fn neighbours(&self, code: &str, niveau: Level) -> Result<Option<Proximity>> {
        self.neighbours_with(code, niveau, &self.config.proximity)
    }

    /// Nearest same-region peers with the secondary options.
    pub fn neighbours_secondary(&self, code: &str, niveau: Level) -> Result<Option<Proximity>> {
        self.neighbours_with(code, niveau, &self.config.secondary_proximity)
    }

    pub fn neighbours_with(
        &self,
        code: &str,
        niveau: Level,
        options: &ProximityOptions,
    ) -> Result<Option<Proximity>> {
        timed("neighbours", || resolve_proximity(&self.store, code, niveau, options))
    }

    /// Ranked search on labels, optionally restricted to one level.
    ///
    /// `limit` is clamped to the configured maximum. A blank term or a zero
    /// limit returns nothing.
    pub fn search(
        &self,
        term: &str,
        niveau: Option<Level>,
        limit: usize,
    ) -> Result<Vec<SearchHit>> {
        let limit = clamp_limit(limit, self.config.max_search_limit);
        if limit == 0 || term.trim().is_empty() {
            return Ok(Vec::new());
        }
        timed("search", || {
            let cap = self.config.search_candidate_limit;
            let candidates = self.store.search_by_term(term, niveau, cap)?;
            Ok(rank_search(term, candidates, limit))
        })
    }

    pub fn stats(&self) -> Result<MeshStats> {
        timed("stats", || self.store.stats())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Centre;
    use crate::search::MatchTier;
    use crate::store::MemoryStore;

    fn unit(id: &str, code: &str, libelle: &str, niveau: Level) -> MeshUnit {
        MeshUnit {
            id: id.into(),
            code: code.into(),
            libelle: libelle.into(),
            niveau,
            shape: None,
            centre: Some(Centre::Pair(vec![47.3, 5.0])),
        }
    }

    fn resolver() -> MeshResolver<MemoryStore> {
        let store = MemoryStore::new(vec![
            unit("210000000", "27", "Bourgogne", Level::Region),
            unit("212100000", "21", "Côte-d'Or", Level::Departement),
            unit("215800000", "58", "Nièvre", Level::Departement),
            unit("212121231", "21231", "Dijon", Level::Commune),
            unit("212121054", "21054", "Beaune", Level::Commune),
            unit("215858194", "58194", "Nevers", Level::Commune),
        ])
        .unwrap();
        MeshResolver::new(store)
    }

    #[test]
    fn children_of_each_level() {
        let r = resolver();
        let depts = r.children("27", Level::Region, None).unwrap();
        assert_eq!(depts.len(), 2);
        let communes = r.children("21", Level::Departement, None).unwrap();
        let codes: Vec<_> = communes.iter().map(|u| u.code.as_str()).collect();
        assert_eq!(codes, ["21231", "21054"]);
        assert!(r.children("21231", Level::Commune, None).unwrap().is_empty());
        assert_eq!(r.children("21", Level::Departement, Some(1)).unwrap().len(), 1);
    }

    #[test]
    fn children_of_unknown_parent() {
        let err = resolver().children("99", Level::Departement, None).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn unit_by_id_validates() {
        let r = resolver();
        assert_eq!(r.unit_by_id("212121231").unwrap().unwrap().libelle, "Dijon");
        assert!(matches!(
            r.unit_by_id("2121"),
            Err(MeshError::InvalidIdentifier { .. })
        ));
    }

    #[test]
    fn search_clamps_and_ranks() {
        let r = resolver();
        let hits = r.search("ne", None, 1_000).unwrap();
        let labels: Vec<_> = hits.iter().map(|h| h.unit.libelle.as_str()).collect();
        // prefix first, then substring matches with the region ahead of the commune
        assert_eq!(labels, ["Nevers", "Bourgogne", "Beaune"]);
        assert!(r.search("ne", None, 0).unwrap().is_empty());
        assert!(r.search("  ", None, 10).unwrap().is_empty());
        let depts = r.search("nievre", Some(Level::Departement), 10).unwrap();
        assert_eq!(depts.len(), 1);
    }

    #[test]
    fn exact_match_survives_many_substring_matches() {
        let cap = ResolverConfig::default().search_candidate_limit;
        let mut units: Vec<MeshUnit> = (1..=cap)
            .map(|i| {
                unit(
                    &format!("2121{i:05}"),
                    &format!("{i:05}"),
                    &format!("Le Saint-Village {i}"),
                    Level::Commune,
                )
            })
            .collect();
        units.push(unit("212199999", "99999", "Saint", Level::Commune));
        let r = MeshResolver::new(MemoryStore::new(units).unwrap());

        let hits = r.search("saint", None, 5).unwrap();
        assert_eq!(hits.len(), 5);
        assert_eq!(hits[0].unit.libelle, "Saint");
        assert_eq!(hits[0].tier, MatchTier::Exact);
        assert!(hits[1..].iter().all(|h| h.tier == MatchTier::Contains));
    }

    #[test]
    fn proximity_presets_differ_in_size() {
        let r = resolver();
        let near = r.neighbours("21231", Level::Commune).unwrap().unwrap();
        assert_eq!(near.neighbours.len(), 3);
        let opts = ProximityOptions::single_unit().with_limit(1).excluding_self();
        let one = r.neighbours_with("21231", Level::Commune, &opts).unwrap().unwrap();
        assert_eq!(one.neighbours.len(), 1);
        assert_ne!(one.neighbours[0].unit.code, "21231");
        assert!(r.neighbours("00000", Level::Commune).unwrap().is_none());
    }
}
