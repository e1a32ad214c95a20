// crates/maillage-core/src/model.rs
use crate::error::{MeshError, Result};
use crate::geometry::{Centre, LatLng};
use crate::text::fold_key;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Administrative level ("niveau") of a mesh unit.
///
/// The derived ordering is the fixed total order used when ranking:
/// `Region < Departement < Commune`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Region,
    Departement,
    Commune,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Region, Level::Departement, Level::Commune];

    /// Canonical lowercase spelling, as stored in the `niveau` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Region => "region",
            Level::Departement => "departement",
            Level::Commune => "commune",
        }
    }

    /// The next deeper level, if any.
    pub fn child(self) -> Option<Level> {
        match self {
            Level::Region => Some(Level::Departement),
            Level::Departement => Some(Level::Commune),
            Level::Commune => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = MeshError;

    /// Accepts `region`, `departement` and `commune`, ignoring case and accents
    /// (`Département` parses).
    fn from_str(s: &str) -> Result<Self> {
        match fold_key(s.trim()).as_str() {
            "region" => Ok(Level::Region),
            "departement" => Ok(Level::Departement),
            "commune" => Ok(Level::Commune),
            _ => Err(MeshError::InvalidData(format!(
                "unknown level {s:?}, expected one of: region, departement, commune"
            ))),
        }
    }
}

/// One administrative unit as held by the mesh store.
///
/// Records are owned by the store; the resolver only reads them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeshUnit {
    /// 9-character hierarchical identifier (region 2 + department 2 + commune 5).
    pub id: String,
    /// Public administrative code (e.g. INSEE code); not tied to the segment layout.
    pub code: String,
    pub libelle: String,
    pub niveau: Level,
    /// Polygon or multipolygon as GeoJSON text. Passed through untouched.
    pub shape: Option<String>,
    pub centre: Option<Centre>,
}

impl MeshUnit {
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn libelle(&self) -> &str {
        &self.libelle
    }

    /// Representative point as `(lat, lon)`, or `None` when the stored centre is
    /// missing or not in an admissible shape.
    pub fn lat_lng(&self) -> Option<LatLng> {
        self.centre.as_ref().and_then(|c| c.normalize().ok())
    }

    /// Breadcrumb projection of this unit.
    pub fn to_crumb(&self) -> BreadcrumbEntry {
        BreadcrumbEntry {
            code: self.code.clone(),
            libelle: self.libelle.clone(),
            niveau: self.niveau,
        }
    }
}

/// One step of a breadcrumb ("fil d'Ariane").
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbEntry {
    pub code: String,
    pub libelle: String,
    pub niveau: Level,
}

/// Number of units per level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeshStats {
    pub regions: usize,
    pub departements: usize,
    pub communes: usize,
}

impl MeshStats {
    pub fn total(&self) -> usize {
        self.regions + self.departements + self.communes
    }

    pub fn count(&self, level: Level) -> usize {
        match level {
            Level::Region => self.regions,
            Level::Departement => self.departements,
            Level::Commune => self.communes,
        }
    }

    pub(crate) fn bump(&mut self, level: Level) {
        match level {
            Level::Region => self.regions += 1,
            Level::Departement => self.departements += 1,
            Level::Commune => self.communes += 1,
        }
    }
}
