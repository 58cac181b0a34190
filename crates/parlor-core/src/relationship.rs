use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, de};

use crate::error::LoadError;

/// A directed edge between two items, referenced by name.
///
/// The relationship does not own either item; names are resolved through
/// the room's registry when the graph is walked.
///
/// Documents may spell the kind as `"kind"` or `"relationship"`. When both
/// are present `"relationship"` wins.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Relationship {
    /// The structural meaning of the edge.
    pub kind: RelationshipKind,
    /// The item the edge starts from.
    pub source: String,
    /// The item the edge points to.
    pub target: String,
}

impl Relationship {
    /// Creates a relationship from `source` to `target` with the given kind.
    pub fn new(source: impl Into<String>, kind: RelationshipKind, target: impl Into<String>) -> Self {
        Self {
            kind,
            source: source.into(),
            target: target.into(),
        }
    }

    /// The sentence stating this edge, e.g. `The [desk] has a [drawer]`.
    pub fn fact(&self) -> String {
        format!("The [{}] {} a [{}]", self.source, self.kind, self.target)
    }

    /// Returns true if walking the graph descends through this edge.
    pub fn is_structural(&self) -> bool {
        matches!(self.kind, RelationshipKind::Has | RelationshipKind::Contains)
    }
}

#[derive(Deserialize)]
struct RawRelationship {
    #[serde(default)]
    kind: Option<RelationshipKind>,
    #[serde(default)]
    relationship: Option<RelationshipKind>,
    source: String,
    target: String,
}

impl<'de> Deserialize<'de> for Relationship {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawRelationship::deserialize(deserializer)?;
        let kind = raw
            .relationship
            .or(raw.kind)
            .ok_or_else(|| de::Error::missing_field("kind"))?;
        Ok(Self {
            kind,
            source: raw.source,
            target: raw.target,
        })
    }
}

/// The kind of structural composition an edge expresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationshipKind {
    /// The target is a part of the source.
    Has,
    /// The target is inside the source.
    Contains,
    /// The target rests on the source.
    Supports,
}

impl RelationshipKind {
    /// The verb used in facts and documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Has => "has",
            Self::Contains => "contains",
            Self::Supports => "supports",
        }
    }
}

impl fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RelationshipKind {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "has" => Ok(Self::Has),
            "contains" => Ok(Self::Contains),
            "supports" => Ok(Self::Supports),
            other => Err(LoadError::UnknownRelationshipKind(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fact_sentence() {
        let rel = Relationship::new("drawer", RelationshipKind::Contains, "key");
        assert_eq!(rel.fact(), "The [drawer] contains a [key]");
        let rel = Relationship::new("table", RelationshipKind::Supports, "lamp");
        assert_eq!(rel.fact(), "The [table] supports a [lamp]");
    }

    #[test]
    fn supports_is_not_structural() {
        assert!(Relationship::new("a", RelationshipKind::Has, "b").is_structural());
        assert!(Relationship::new("a", RelationshipKind::Contains, "b").is_structural());
        assert!(!Relationship::new("a", RelationshipKind::Supports, "b").is_structural());
    }

    #[test]
    fn parse_kind() {
        assert_eq!("has".parse::<RelationshipKind>().unwrap(), RelationshipKind::Has);
        assert!(matches!(
            "beside".parse::<RelationshipKind>(),
            Err(LoadError::UnknownRelationshipKind(k)) if k == "beside"
        ));
    }

    #[test]
    fn deserialize_accepts_kind_or_relationship_key() {
        let a: Relationship =
            serde_json::from_str(r#"{"kind": "has", "source": "desk", "target": "drawer"}"#)
                .unwrap();
        let b: Relationship = serde_json::from_str(
            r#"{"relationship": "has", "source": "desk", "target": "drawer"}"#,
        )
        .unwrap();
        assert_eq!(a, b);
        assert!(
            serde_json::from_str::<Relationship>(
                r#"{"kind": "under", "source": "desk", "target": "rug"}"#
            )
            .is_err()
        );
    }

    #[test]
    fn relationship_key_wins_over_kind() {
        let rel: Relationship = serde_json::from_str(
            r#"{"relationship": "contains", "kind": "has", "source": "drawer", "target": "key"}"#,
        )
        .unwrap();
        assert_eq!(rel.kind, RelationshipKind::Contains);

        let same: Relationship = serde_json::from_str(
            r#"{"relationship": "has", "kind": "has", "source": "desk", "target": "drawer"}"#,
        )
        .unwrap();
        assert_eq!(same, Relationship::new("desk", RelationshipKind::Has, "drawer"));
    }

    #[test]
    fn missing_kind_is_rejected() {
        let err = serde_json::from_str::<Relationship>(r#"{"source": "desk", "target": "drawer"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("missing field `kind`"), "{err}");
    }
}
