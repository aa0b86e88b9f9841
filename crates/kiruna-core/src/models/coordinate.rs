//! Coordinate entities and geometry validation.
//!
//! A coordinate is either a single point or a polygon boundary. The wire
//! payload is `{type, coordinates, name}` where the coordinate order depends
//! on the type tag: `Point` carries `[latitude, longitude]` while each
//! `Polygon` vertex carries `[longitude, latitude]`. The asymmetry is part
//! of the public contract consumed by the map frontend and is validated as
//! stated, not normalized.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;

use crate::error::{ValidationError, ValidationErrorKind};

/// Latitude bound in degrees
pub const LAT_BOUND: f64 = 90.0;
/// Longitude bound in degrees
pub const LON_BOUND: f64 = 180.0;

/// Unique identifier for a coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CoordinateId(pub Uuid);

impl CoordinateId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CoordinateId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CoordinateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Geometry carried by a coordinate
///
/// Serializes to the tagged wire form, e.g.
/// `{"type": "Point", "coordinates": [67.85, 20.22]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    /// Single location as `[latitude, longitude]`
    Point { coordinates: [f64; 2] },
    /// Boundary vertices, each as `[longitude, latitude]`
    Polygon { coordinates: Vec<[f64; 2]> },
}

impl Geometry {
    /// Create a Point geometry (latitude first)
    pub fn point(lat: f64, lon: f64) -> Self {
        Geometry::Point { coordinates: [lat, lon] }
    }

    /// Create a Polygon geometry (vertices longitude-first)
    pub fn polygon(vertices: Vec<[f64; 2]>) -> Self {
        Geometry::Polygon { coordinates: vertices }
    }
}

/// A persisted coordinate entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Unique identifier, immutable once assigned
    pub id: CoordinateId,

    /// Point or polygon payload
    #[serde(flatten)]
    pub geometry: Geometry,

    /// Required display name
    pub name: String,

    /// When the coordinate was created
    pub created_at: DateTime<Utc>,
}

/// Loosely typed coordinate creation payload.
///
/// Deserialized before validation so that a missing or malformed field
/// surfaces as a field-level error rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoordinateInput {
    #[serde(rename = "type")]
    pub geometry_type: Option<String>,
    pub coordinates: Option<JsonValue>,
    pub name: Option<String>,
}

impl CoordinateInput {
    /// Validate the payload, returning the parsed geometry and name or the
    /// full list of field errors. Runs before any write.
    pub fn validate(&self) -> Result<(Geometry, String), Vec<ValidationError>> {
        let mut errors = Vec::new();

        let geometry = match self.geometry_type.as_deref() {
            Some("Point") => self.validate_point(&mut errors),
            Some("Polygon") => self.validate_polygon(&mut errors),
            Some(other) => {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidType,
                    "type",
                    format!("expected 'Point' or 'Polygon', got '{other}'"),
                ));
                None
            }
            None => {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidType,
                    "type",
                    "required field",
                ));
                None
            }
        };

        let name = match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => Some(name.to_string()),
            _ => {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidName,
                    "name",
                    "required non-empty string",
                ));
                None
            }
        };

        match (geometry, name) {
            (Some(geometry), Some(name)) if errors.is_empty() => Ok((geometry, name)),
            _ => Err(errors),
        }
    }

    /// Point coordinates are exactly `[latitude, longitude]`.
    fn validate_point(&self, errors: &mut Vec<ValidationError>) -> Option<Geometry> {
        let pair = match parse_pair(self.coordinates.as_ref()) {
            Ok(pair) => pair,
            Err(message) => {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidShape,
                    "coordinates",
                    message,
                ));
                return None;
            }
        };

        let mut in_range = true;
        if pair[0].abs() > LAT_BOUND {
            errors.push(out_of_range("coordinates[0]", "latitude", pair[0], LAT_BOUND));
            in_range = false;
        }
        if pair[1].abs() > LON_BOUND {
            errors.push(out_of_range("coordinates[1]", "longitude", pair[1], LON_BOUND));
            in_range = false;
        }

        in_range.then(|| Geometry::Point { coordinates: pair })
    }

    /// Polygon coordinates are a non-empty list of `[longitude, latitude]`
    /// pairs. The order is reversed relative to Point.
    fn validate_polygon(&self, errors: &mut Vec<ValidationError>) -> Option<Geometry> {
        let Some(JsonValue::Array(items)) = self.coordinates.as_ref() else {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidShape,
                "coordinates",
                "expected an array of [longitude, latitude] pairs",
            ));
            return None;
        };

        if items.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidShape,
                "coordinates",
                "polygon must have at least one vertex",
            ));
            return None;
        }

        let mut vertices = Vec::with_capacity(items.len());
        let mut valid = true;
        for (i, item) in items.iter().enumerate() {
            let pair = match parse_pair(Some(item)) {
                Ok(pair) => pair,
                Err(message) => {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::InvalidShape,
                        format!("coordinates[{i}]"),
                        message,
                    ));
                    valid = false;
                    continue;
                }
            };

            if pair[0].abs() > LON_BOUND {
                errors.push(out_of_range(
                    format!("coordinates[{i}][0]"),
                    "longitude",
                    pair[0],
                    LON_BOUND,
                ));
                valid = false;
            }
            if pair[1].abs() > LAT_BOUND {
                errors.push(out_of_range(
                    format!("coordinates[{i}][1]"),
                    "latitude",
                    pair[1],
                    LAT_BOUND,
                ));
                valid = false;
            }

            vertices.push(pair);
        }

        valid.then(|| Geometry::Polygon { coordinates: vertices })
    }
}

/// Parse a JSON value as a 2-element array of finite numbers.
fn parse_pair(value: Option<&JsonValue>) -> Result<[f64; 2], String> {
    let Some(JsonValue::Array(items)) = value else {
        return Err("expected a 2-element numeric array".to_string());
    };
    if items.len() != 2 {
        return Err(format!("expected exactly 2 elements, got {}", items.len()));
    }

    let mut pair = [0.0; 2];
    for (i, item) in items.iter().enumerate() {
        match item.as_f64() {
            Some(n) if n.is_finite() => pair[i] = n,
            _ => return Err(format!("element {i} is not a finite number")),
        }
    }
    Ok(pair)
}

fn out_of_range(field: impl Into<String>, axis: &str, value: f64, bound: f64) -> ValidationError {
    ValidationError::new(
        ValidationErrorKind::InvalidCoordinateRange,
        field,
        format!("{axis} {value} outside [-{bound}, {bound}]"),
    )
}
