//! Field-level type inference
//!
//! Classifies one raw CSV field into a [`SemanticCellType`]. The lexical
//! helpers here are shared with query-time conversion so a query value and a
//! stored field are always read the same way.

use regex::Regex;
use std::sync::LazyLock;

use crate::data::cell_type::SemanticCellType;
use crate::data::cell_value::GeoCoordinate;

static INTEGER_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-?[0-9]+$").unwrap());

static FLOATING_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?[0-9]+\.[0-9]+$").unwrap());

/// Two decimal numbers, latitude then longitude, separated by ',' or ';'.
/// Parentheses are stripped before matching.
static GEO_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([+-]?[0-9]+\.[0-9]+)\s*[,;]\s*([+-]?[0-9]+\.[0-9]+)\s*$").unwrap()
});

/// Two or more tokens separated by '|' or ';'
static TAGS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_#-]+(?:\s*[|;]\s*[A-Za-z0-9_#-]+)+$").unwrap()
});

const TRUE_WORDS: [&str; 2] = ["true", "yes"];
const FALSE_WORDS: [&str; 2] = ["false", "no"];

/// Type inference utilities
pub struct TypeInference;

impl TypeInference {
    /// Infer the semantic type of a single field.
    ///
    /// Total and deterministic. More specific types are tried first and
    /// anything unrecognised is `Text`.
    pub fn classify(value: &str) -> SemanticCellType {
        if value.is_empty() {
            return SemanticCellType::Undetermined;
        }

        if INTEGER_PATTERN.is_match(value) {
            // Digits that do not fit an i64 are still a number, just not an integer
            return if value.parse::<i64>().is_ok() {
                SemanticCellType::Integer
            } else {
                SemanticCellType::Floating
            };
        }

        if FLOATING_PATTERN.is_match(value) {
            return SemanticCellType::Floating;
        }

        if Self::parse_boolean(value).is_some() {
            return SemanticCellType::Boolean;
        }

        if Self::parse_geo_coordinate(value).is_some() {
            return SemanticCellType::GeoCoordinate;
        }

        if TAGS_PATTERN.is_match(value) {
            return SemanticCellType::Tags;
        }

        SemanticCellType::Text
    }

    /// Look a value up in the boolean vocabulary, ignoring case.
    pub fn parse_boolean(value: &str) -> Option<bool> {
        if TRUE_WORDS.iter().any(|w| value.eq_ignore_ascii_case(w)) {
            Some(true)
        } else if FALSE_WORDS.iter().any(|w| value.eq_ignore_ascii_case(w)) {
            Some(false)
        } else {
            None
        }
    }

    /// Parse `lat,lon`, `lat;lon` or `(lat, lon)`. Both parts need a fraction
    /// and must be in range.
    pub fn parse_geo_coordinate(value: &str) -> Option<GeoCoordinate> {
        let trimmed = value.trim();
        let body = match trimmed.strip_prefix('(') {
            Some(inner) => inner.strip_suffix(')')?,
            None => trimmed,
        };

        let caps = GEO_PATTERN.captures(body)?;
        let latitude = caps[1].parse::<f64>().ok()?;
        let longitude = caps[2].parse::<f64>().ok()?;

        GeoCoordinate::new(latitude, longitude)
    }

    /// Parse a value the way a `Floating` field is read: any integer or
    /// decimal lexeme.
    pub fn parse_floating(value: &str) -> Option<f64> {
        if INTEGER_PATTERN.is_match(value) || FLOATING_PATTERN.is_match(value) {
            value.parse::<f64>().ok()
        } else {
            None
        }
    }
}
