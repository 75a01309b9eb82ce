//! The triple data model.
//!
//! A [`Triple`] is the only entity in the system: a flat
//! subject–relation–object fact record. Relations are structured values so
//! the dynamically built `likes_to_<verb>_under` tags keep their verb
//! without string surgery at query time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::canon::canonicalize;

/// Relation tag of a stored fact.
///
/// Parsing is case-sensitive: relation strings from the fact table are
/// taken as-is, and an unrecognized tag is preserved verbatim in
/// [`Relation::Other`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    /// "X is in/at Y".
    LocatedIn,
    /// "X is ADJ".
    Attr,
    /// "X lives in Y".
    LivesIn,
    /// "child likes to VERB under Y"; carries the verb.
    LikesToUnder(String),
    /// Any other tag the fact table declares, kept verbatim.
    Other(String),
}

impl Relation {
    /// Parse a relation tag.
    ///
    /// Any tag starting with `likes_to_` becomes [`Relation::LikesToUnder`]
    /// with the prefix and the optional `_under` suffix stripped, so the
    /// dynamically interpolated tags round-trip through their verb.
    #[must_use]
    pub fn parse(tag: &str) -> Self {
        match tag {
            "located_in" => Self::LocatedIn,
            "attr" => Self::Attr,
            "lives_in" => Self::LivesIn,
            _ => tag.strip_prefix("likes_to_").map_or_else(
                || Self::Other(tag.to_string()),
                |rest| {
                    Self::LikesToUnder(rest.strip_suffix("_under").unwrap_or(rest).to_string())
                },
            ),
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LocatedIn => f.write_str("located_in"),
            Self::Attr => f.write_str("attr"),
            Self::LivesIn => f.write_str("lives_in"),
            Self::LikesToUnder(verb) => write!(f, "likes_to_{verb}_under"),
            Self::Other(tag) => f.write_str(tag),
        }
    }
}

impl FromStr for Relation {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

/// A single stored fact.
///
/// Construction canonicalizes the subject and the object, so raw text
/// never reaches the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Triple {
    /// Canonical subject key.
    pub subject: String,

    /// Relation tag.
    pub relation: Relation,

    /// Canonical object key; `None` when the source field was empty.
    pub object: Option<String>,
}

impl Triple {
    /// Build a triple from raw text fields.
    #[must_use]
    pub fn new(subject: &str, relation: Relation, object: Option<&str>) -> Self {
        Self {
            subject: canonicalize(subject),
            relation,
            object: object.and_then(|o| (!o.is_empty()).then(|| canonicalize(o))),
        }
    }
}
