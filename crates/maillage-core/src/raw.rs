// crates/maillage-core/src/raw.rs
use serde::Deserialize;
use serde_json::Value;

/// Raw mesh record as it comes from a JSON export of the `maillage` table:
///
/// ```json
/// {
///   "id": "212100000",
///   "code": "21",
///   "libelle": "Côte-d'Or",
///   "niveau": "departement",
///   "shape": {"type": "MultiPolygon", "coordinates": [...]},
///   "centre": {"type": "Point", "coordinates": [[47.42216, 4.70093]]}
/// }
/// ```
///
/// `shape` and `centre` are left as arbitrary JSON here; classification into
/// the domain types happens in [`crate::convert`].
#[derive(Debug, Deserialize)]
pub struct MeshUnitRaw {
    pub id: String,
    pub code: String,
    pub libelle: String,
    pub niveau: String,
    #[serde(default)]
    pub shape: Option<Value>,
    #[serde(default)]
    pub centre: Option<Value>,
}

pub type MeshUnitsRaw = Vec<MeshUnitRaw>;
