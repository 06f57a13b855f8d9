use crate::data::cell_type::SemanticCellType;
use crate::data::type_inference::TypeInference;

/// A latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    /// Returns `None` when either part is outside its valid range.
    pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
        if (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude) {
            Some(Self {
                latitude,
                longitude,
            })
        } else {
            None
        }
    }
}

/// A field converted to its column's semantic representation.
///
/// Conversion happens at query time; the table itself only stores text.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Floating(f64),
    Boolean(bool),
    GeoCoordinate(GeoCoordinate),
}

impl CellValue {
    /// Convert `text` to the representation used by `data_type`.
    ///
    /// Returns `None` when the text cannot be read as that type, and always
    /// for `Undetermined` and `Tags`, which have no equality representation.
    pub fn convert(text: &str, data_type: SemanticCellType) -> Option<Self> {
        match data_type {
            SemanticCellType::Text => Some(CellValue::Text(text.to_string())),
            SemanticCellType::Integer => text.parse::<i64>().ok().map(CellValue::Integer),
            SemanticCellType::Floating => {
                TypeInference::parse_floating(text).map(CellValue::Floating)
            }
            SemanticCellType::Boolean => TypeInference::parse_boolean(text).map(CellValue::Boolean),
            SemanticCellType::GeoCoordinate => {
                TypeInference::parse_geo_coordinate(text).map(CellValue::GeoCoordinate)
            }
            SemanticCellType::Undetermined | SemanticCellType::Tags => None,
        }
    }
}
