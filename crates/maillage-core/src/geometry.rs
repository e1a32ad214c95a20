// crates/maillage-core/src/geometry.rs
use crate::error::{MeshError, Result};
use geo::{GeodesicDistance, Point};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A latitude/longitude pair in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lon: f64,
}

impl LatLng {
    /// Build a point, rejecting non-finite values and latitudes outside ±90°.
    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(MeshError::UnrecognizedGeometry(format!(
                "non-finite coordinate ({lat}, {lon})"
            )));
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(MeshError::UnrecognizedGeometry(format!(
                "latitude {lat} out of range"
            )));
        }
        Ok(LatLng { lat, lon })
    }

    /// Geodesic distance in meters on the WGS84 ellipsoid.
    pub fn geodesic_distance(&self, other: &LatLng) -> f64 {
        self.to_point().geodesic_distance(&other.to_point())
    }

    fn to_point(self) -> Point<f64> {
        Point::new(self.lon, self.lat)
    }
}

/// The admissible shapes of a stored `centre`.
///
/// The set is closed: whatever the store hands over is classified once, at
/// conversion time, and anything else lands in [`Centre::Unrecognized`] so it
/// can never reach distance arithmetic.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Centre {
    /// GeoJSON-like object whose `coordinates[0]` is a `[lat, lon]` pair.
    ///
    /// Note the order: the first element is read as the latitude, unlike
    /// standard GeoJSON. Relative ranking is unaffected as long as every
    /// record follows the same convention.
    GeoJson { coordinates: Vec<Vec<f64>> },
    /// Geometry object exposing `x` (longitude) and `y` (latitude).
    Point { x: f64, y: f64 },
    /// Raw ordered pair `[lat, lon, ...]`.
    Pair(Vec<f64>),
    /// Anything else, kept as JSON text for diagnostics.
    Unrecognized(String),
}

impl Centre {
    /// Classify an arbitrary JSON value. `null` is not a centre at all.
    ///
    /// A JSON string is parsed once and classified by its content, since
    /// stores commonly hand geometry over as GeoJSON text.
    pub fn from_value(value: &Value) -> Option<Centre> {
        match value {
            Value::Null => None,
            Value::String(text) => match serde_json::from_str::<Value>(text) {
                Ok(Value::Null) => None,
                Ok(inner @ (Value::Object(_) | Value::Array(_))) => Some(Self::classify(&inner)),
                _ => Some(Centre::Unrecognized(value.to_string())),
            },
            other => Some(Self::classify(other)),
        }
    }

    fn classify(value: &Value) -> Centre {
        let recognized = match value {
            Value::Object(map) => match map.get("coordinates") {
                Some(coords) => coords
                    .get(0)
                    .and_then(leading_pair)
                    .map(|pair| Centre::GeoJson {
                        coordinates: vec![pair],
                    }),
                None => match (
                    map.get("x").and_then(Value::as_f64),
                    map.get("y").and_then(Value::as_f64),
                ) {
                    (Some(x), Some(y)) => Some(Centre::Point { x, y }),
                    _ => None,
                },
            },
            Value::Array(_) => leading_pair(value).map(Centre::Pair),
            _ => None,
        };
        recognized.unwrap_or_else(|| Centre::Unrecognized(value.to_string()))
    }

    /// Canonical `(lat, lon)` for this centre.
    ///
    /// Fails with [`MeshError::UnrecognizedGeometry`] for unrecognized shapes,
    /// short coordinate lists and out-of-range values.
    pub fn normalize(&self) -> Result<LatLng> {
        match self {
            Centre::GeoJson { coordinates } => match coordinates.first() {
                Some(first) if first.len() >= 2 => LatLng::new(first[0], first[1]),
                _ => Err(MeshError::UnrecognizedGeometry(
                    "coordinates[0] is not a pair".into(),
                )),
            },
            Centre::Point { x, y } => LatLng::new(*y, *x),
            Centre::Pair(values) if values.len() >= 2 => LatLng::new(values[0], values[1]),
            Centre::Pair(values) => Err(MeshError::UnrecognizedGeometry(format!(
                "pair needs two values, got {}",
                values.len()
            ))),
            Centre::Unrecognized(raw) => Err(MeshError::UnrecognizedGeometry(raw.clone())),
        }
    }
}

/// The first two elements of a JSON array, when both are numbers. Anything
/// after them is ignored.
fn leading_pair(value: &Value) -> Option<Vec<f64>> {
    let first = value.get(0)?.as_f64()?;
    let second = value.get(1)?.as_f64()?;
    Some(vec![first, second])
}
