// crates/maillage-core/src/api.rs

//! JSON views for HTTP-style consumers.
//!
//! The views borrow domain values and serialize them in the public shape:
//! `centre` becomes a plain `[lat, lon]` pair (or `null`) and `shape` is
//! emitted as parsed GeoJSON rather than text.

use crate::model::MeshUnit;
use crate::proximity::{Neighbour, Proximity};
use crate::search::SearchHit;
use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;
use serde_json::Value;

/// A unit as `{code, libelle, niveau, shape, centre}`.
pub struct MeshUnitView<'a>(pub &'a MeshUnit);

impl MeshUnitView<'_> {
    fn centre_pair(&self) -> Option<[f64; 2]> {
        self.0.lat_lng().map(|p| [p.lat, p.lon])
    }

    // Invalid shape text is dropped rather than sent as a string.
    fn shape_json(&self) -> Option<Value> {
        let text = self.0.shape.as_deref()?;
        serde_json::from_str(text).ok()
    }
}

impl Serialize for MeshUnitView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let unit = self.0;
        let mut s = serializer.serialize_struct("MeshUnit", 5)?;
        s.serialize_field("code", &unit.code)?;
        s.serialize_field("libelle", &unit.libelle)?;
        s.serialize_field("niveau", &unit.niveau)?;
        s.serialize_field("shape", &self.shape_json())?;
        s.serialize_field("centre", &self.centre_pair())?;
        s.end()
    }
}

/// A ranked neighbour: the unit view plus `distance_m`.
pub struct NeighbourView<'a>(pub &'a Neighbour);

impl Serialize for NeighbourView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let view = MeshUnitView(&self.0.unit);
        let mut s = serializer.serialize_struct("Neighbour", 6)?;
        s.serialize_field("code", &view.0.code)?;
        s.serialize_field("libelle", &view.0.libelle)?;
        s.serialize_field("niveau", &view.0.niveau)?;
        s.serialize_field("shape", &view.shape_json())?;
        s.serialize_field("centre", &view.centre_pair())?;
        s.serialize_field("distance_m", &self.0.distance_m)?;
        s.end()
    }
}

/// `{target, neighbours}`.
pub struct ProximityView<'a>(pub &'a Proximity);

impl Serialize for ProximityView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let neighbours: Vec<NeighbourView<'_>> =
            self.0.neighbours.iter().map(NeighbourView).collect();
        let mut s = serializer.serialize_struct("Proximity", 2)?;
        s.serialize_field("target", &MeshUnitView(&self.0.target))?;
        s.serialize_field("neighbours", &neighbours)?;
        s.end()
    }
}

/// A search hit as the unit view plus its `tier`.
pub struct SearchHitView<'a>(pub &'a SearchHit);

impl Serialize for SearchHitView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("SearchHit", 2)?;
        s.serialize_field("tier", &self.0.tier)?;
        s.serialize_field("unit", &MeshUnitView(&self.0.unit))?;
        s.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Centre;
    use crate::model::Level;
    use serde_json::json;

    fn dijon() -> MeshUnit {
        MeshUnit {
            id: "212121231".into(),
            code: "21231".into(),
            libelle: "Dijon".into(),
            niveau: Level::Commune,
            shape: Some(r#"{"type":"Polygon","coordinates":[]}"#.into()),
            centre: Some(Centre::Point { x: 5.04, y: 47.32 }),
        }
    }

    #[test]
    fn unit_view_shape() {
        let value = serde_json::to_value(MeshUnitView(&dijon())).unwrap();
        assert_eq!(
            value,
            json!({
                "code": "21231",
                "libelle": "Dijon",
                "niveau": "commune",
                "shape": {"type": "Polygon", "coordinates": []},
                "centre": [47.32, 5.04]
            })
        );
    }

    #[test]
    fn unusable_centre_and_bad_shape_become_null() {
        let mut unit = dijon();
        unit.centre = Some(Centre::Unrecognized("\"?\"".into()));
        unit.shape = Some("not json".into());
        let value = serde_json::to_value(MeshUnitView(&unit)).unwrap();
        assert_eq!(value["centre"], json!(null));
        assert_eq!(value["shape"], json!(null));
    }

    #[test]
    fn neighbour_view_carries_distance() {
        let neighbour = Neighbour {
            unit: dijon(),
            distance_m: Some(1234.5),
        };
        let value = serde_json::to_value(NeighbourView(&neighbour)).unwrap();
        assert_eq!(value["distance_m"], json!(1234.5));
        assert_eq!(value["code"], json!("21231"));
    }
}
