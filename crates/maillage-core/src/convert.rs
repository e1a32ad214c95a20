// crates/maillage-core/src/convert.rs
use crate::codec::MeshId;
use crate::error::{MeshError, Result};
use crate::geometry::Centre;
use crate::model::{Level, MeshUnit};
use crate::raw::MeshUnitRaw;
use serde_json::Value;

/// **Standard Converter:** Raw -> Domain.
///
/// Validates every identifier, checks that the stored `niveau` agrees with the
/// level implied by the identifier, classifies `centre` and keeps `shape` as
/// GeoJSON text.
pub fn from_raw(raw_units: Vec<MeshUnitRaw>) -> Result<Vec<MeshUnit>> {
    raw_units.into_iter().map(unit_from_raw).collect()
}

pub fn unit_from_raw(raw: MeshUnitRaw) -> Result<MeshUnit> {
    let id = MeshId::parse(raw.id.trim())
        .map_err(|e| MeshError::InvalidData(format!("record {:?}: {e}", raw.code)))?;
    let niveau: Level = raw.niveau.parse()?;

    if id.level() != niveau {
        return Err(MeshError::InvalidData(format!(
            "record {id}: stored level {niveau} but identifier encodes {}",
            id.level()
        )));
    }

    let centre = raw.centre.as_ref().and_then(Centre::from_value);
    if let Some(Centre::Unrecognized(shape)) = &centre {
        tracing::warn!(
            id = %id,
            centre = %shape,
            "centre in unsupported shape, unit will not be ranked by distance"
        );
    }

    Ok(MeshUnit {
        id: id.into_string(),
        code: raw.code.trim().to_owned(),
        libelle: raw.libelle,
        niveau,
        shape: raw.shape.and_then(shape_text),
        centre,
    })
}

fn shape_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}
