//! Semantic cell types and the lattice used to unify them per column.

use std::fmt;

/// The inferred domain meaning of a field, independent of its raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SemanticCellType {
    /// No information yet (empty field, or a column with no data rows)
    #[default]
    Undetermined,
    Text,
    Integer,
    Floating,
    Boolean,
    GeoCoordinate,
    Tags,
}

impl SemanticCellType {
    pub const ALL: [SemanticCellType; 7] = [
        SemanticCellType::Undetermined,
        SemanticCellType::Text,
        SemanticCellType::Integer,
        SemanticCellType::Floating,
        SemanticCellType::Boolean,
        SemanticCellType::GeoCoordinate,
        SemanticCellType::Tags,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            SemanticCellType::Undetermined => "undetermined",
            SemanticCellType::Text => "text",
            SemanticCellType::Integer => "integer",
            SemanticCellType::Floating => "floating",
            SemanticCellType::Boolean => "boolean",
            SemanticCellType::GeoCoordinate => "geo-coordinate",
            SemanticCellType::Tags => "tags",
        }
    }

    /// Combine two guesses for the same column.
    ///
    /// `Undetermined` is the identity, equal types stay as they are, and any
    /// conflict between two concrete types widens to `Text`. The operation is
    /// commutative, associative and idempotent, so folding a column in any
    /// order gives the same answer.
    pub fn join(self, other: SemanticCellType) -> SemanticCellType {
        use SemanticCellType::*;

        match (self, other) {
            (Undetermined, t) | (t, Undetermined) => t,
            (a, b) if a == b => a,
            _ => Text,
        }
    }

    /// Fold `join` over every type in the iterator, starting from `Undetermined`.
    pub fn join_all<I>(types: I) -> SemanticCellType
    where
        I: IntoIterator<Item = SemanticCellType>,
    {
        types
            .into_iter()
            .fold(SemanticCellType::Undetermined, SemanticCellType::join)
    }
}

impl fmt::Display for SemanticCellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::SemanticCellType::*;
    use super::*;

    #[test]
    fn test_join_identity() {
        for t in SemanticCellType::ALL {
            assert_eq!(Undetermined.join(t), t);
            assert_eq!(t.join(Undetermined), t);
        }
    }

    #[test]
    fn test_join_conflicts_widen_to_text() {
        assert_eq!(Integer.join(Floating), Text);
        assert_eq!(Boolean.join(Integer), Text);
        assert_eq!(GeoCoordinate.join(Tags), Text);
        assert_eq!(Text.join(Integer), Text);
    }

    #[test]
    fn test_join_all() {
        assert_eq!(SemanticCellType::join_all([]), Undetermined);
        assert_eq!(
            SemanticCellType::join_all([Undetermined, Integer, Integer, Undetermined]),
            Integer
        );
        assert_eq!(SemanticCellType::join_all([Integer, Text, Integer]), Text);
    }

    #[test]
    fn test_display() {
        assert_eq!(GeoCoordinate.to_string(), "geo-coordinate");
        assert_eq!(Undetermined.to_string(), "undetermined");
    }
}
