// crates/maillage-core/src/proximity.rs
use crate::codec::MeshId;
use crate::error::Result;
use crate::geometry::LatLng;
use crate::model::{Level, MeshUnit};
use crate::store::MeshStore;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// How many neighbours to return, and whether the target may be one of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProximityOptions {
    pub limit: usize,
    /// Keep the target in its own candidate set (it ranks first, at 0 m).
    pub include_self: bool,
}

impl ProximityOptions {
    pub const SINGLE_UNIT_LIMIT: usize = 9;
    pub const SECONDARY_LIMIT: usize = 6;

    /// Options of the single-unit query path.
    pub fn single_unit() -> Self {
        ProximityOptions {
            limit: Self::SINGLE_UNIT_LIMIT,
            include_self: true,
        }
    }

    /// Options of the secondary (map side panel) path.
    pub fn secondary() -> Self {
        ProximityOptions {
            limit: Self::SECONDARY_LIMIT,
            include_self: true,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn excluding_self(mut self) -> Self {
        self.include_self = false;
        self
    }
}

impl Default for ProximityOptions {
    fn default() -> Self {
        Self::single_unit()
    }
}

/// A ranked peer and its distance from the target.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Neighbour {
    pub unit: MeshUnit,
    /// Geodesic distance in meters; `None` when the peer has no usable centre.
    pub distance_m: Option<f64>,
}

/// The target unit and its nearest same-level, same-region peers.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Proximity {
    pub target: MeshUnit,
    pub neighbours: Vec<Neighbour>,
}

impl Proximity {
    fn alone(target: MeshUnit) -> Self {
        Proximity {
            target,
            neighbours: Vec::new(),
        }
    }
}

/// Sort `candidates` by geodesic distance from `origin`, nearest first, and
/// keep `limit` of them.
///
/// The sort is stable. Candidates without a usable centre are kept but sort
/// after every measured one, in their original order.
pub fn rank_proximity(
    origin: LatLng,
    candidates: Vec<MeshUnit>,
    limit: usize,
) -> Vec<Neighbour> {
    let mut ranked: Vec<Neighbour> = candidates
        .into_iter()
        .map(|unit| {
            let distance_m = unit.lat_lng().map(|p| origin.geodesic_distance(&p));
            Neighbour { unit, distance_m }
        })
        .collect();

    ranked.sort_by(|a, b| match (a.distance_m, b.distance_m) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    ranked.truncate(limit);
    ranked
}

/// Resolve `(code, niveau)` and its nearest peers in the same region.
///
/// - `Ok(None)`: no such unit.
/// - Regions and departments never get neighbours.
/// - A target without a usable centre, a malformed stored identifier or a
///   failing candidate query all yield the target with no neighbours.
///
/// Only a failure of the target lookup itself is returned as an error.
pub fn resolve_proximity<S: MeshStore + ?Sized>(
    store: &S,
    code: &str,
    niveau: Level,
    options: &ProximityOptions,
) -> Result<Option<Proximity>> {
    let Some(target) = store.find_by_code_and_level(code, niveau)? else {
        return Ok(None);
    };

    if matches!(niveau, Level::Region | Level::Departement) {
        return Ok(Some(Proximity::alone(target)));
    }

    let origin = match target.centre.as_ref().map(|c| c.normalize()) {
        Some(Ok(origin)) => origin,
        Some(Err(e)) => {
            tracing::warn!(code, error = %e, "target centre unusable, no neighbours");
            return Ok(Some(Proximity::alone(target)));
        }
        None => {
            tracing::warn!(code, "target has no centre, no neighbours");
            return Ok(Some(Proximity::alone(target)));
        }
    };

    let id = match MeshId::parse(&target.id) {
        Ok(id) => id,
        Err(e) => {
            tracing::warn!(code, error = %e, "stored identifier is malformed, no neighbours");
            return Ok(Some(Proximity::alone(target)));
        }
    };

    let pattern = id.sibling_pattern();
    let mut candidates = match store.find_by_id_pattern(&pattern, niveau) {
        Ok(candidates) => candidates,
        Err(e) => {
            tracing::warn!(
                code,
                pattern = %pattern,
                error = %e,
                "candidate query failed, no neighbours"
            );
            return Ok(Some(Proximity::alone(target)));
        }
    };

    if !options.include_self {
        candidates.retain(|u| u.id != target.id);
    }

    let neighbours = rank_proximity(origin, candidates, options.limit);
    tracing::debug!(code, neighbours = neighbours.len(), "proximity ranked");

    Ok(Some(Proximity { target, neighbours }))
}
