//! Extraction rule definitions.
//!
//! Rules are data: each definition names a sentence regex and the kind of
//! triple a match emits. The default set is fixed and its order is part of
//! the extraction semantics, so the list must not be reordered.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::BuildError;

/// What a matching rule emits, and how it interacts with the running
/// current-subject context.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// `w1[s] live[s] in the w2` emits `(w1, lives_in, w2)`.
    Habitat,
    /// `w1 ... in [my|the] w2` emits `(w1, located_in, w2)` and sets the
    /// current subject to the raw `w1`.
    Location,
    /// `it is [very] w` emits `(current subject, attr, w)`. Only
    /// considered while a current subject is set; leaves it unchanged.
    PronounContinuation,
    /// `w1 is [very] w2` emits `(w1, attr, w2)` and sets the current
    /// subject to the raw `w1`.
    Attribute,
    /// `i|the child like[s] to VERB under the w` emits
    /// `(child, likes_to_VERB_under, w)`.
    ActivityUnder,
}

impl RuleKind {
    /// Returns the string representation of this kind.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::Habitat => "habitat",
            Self::Location => "location",
            Self::PronounContinuation => "pronoun_continuation",
            Self::Attribute => "attribute",
            Self::ActivityUnder => "activity_under",
        }
    }
}

impl FromStr for RuleKind {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "habitat" => Ok(Self::Habitat),
            "location" => Ok(Self::Location),
            "pronoun_continuation" => Ok(Self::PronounContinuation),
            "attribute" => Ok(Self::Attribute),
            "activity_under" => Ok(Self::ActivityUnder),
            _ => Err("unknown rule kind"),
        }
    }
}

/// Definition of a single extraction rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleDef {
    /// Unique identifier for this rule.
    pub id: String,

    /// Regex applied to one sentence.
    pub pattern: String,

    /// The kind of triple a match emits.
    pub kind: String,
}

impl RuleDef {
    /// Compile into an applicable rule.
    ///
    /// # Errors
    /// Returns an error if the regex is invalid or the kind is unknown.
    pub fn build(&self) -> Result<ExtractionRule, BuildError> {
        let kind = RuleKind::from_str(&self.kind)
            .map_err(|_| BuildError::Kind(self.kind.clone()))?;
        Ok(ExtractionRule {
            id: self.id.clone(),
            regex: Regex::new(&self.pattern)?,
            kind,
        })
    }
}

/// A compiled, applicable extraction rule.
#[derive(Debug)]
pub struct ExtractionRule {
    /// Identifier from the definition.
    pub id: String,

    /// Compiled sentence pattern.
    pub regex: Regex,

    /// Emission kind.
    pub kind: RuleKind,
}

/// The fixed extraction rule set, in evaluation order.
///
/// Habitat precedes location, and pronoun continuation precedes
/// attribute: habitat and pronoun sentences also satisfy the looser
/// location and attribute shapes, and the more specific rule must win.
/// Location stays ahead of attribute. The coarse, unanchored shapes are
/// deliberate; sentences outside the expected forms may extract odd facts
/// or none at all.
#[must_use]
pub fn default_rules() -> Vec<RuleDef> {
    vec![
        RuleDef {
            id: "habitat".to_string(),
            pattern: r"(\b\w+\b)s?\s+live[s]?\s+in\s+the\s+(\b\w+\b)".to_string(),
            kind: "habitat".to_string(),
        },
        RuleDef {
            id: "location".to_string(),
            pattern: r"(\b\w+\b)[^.]*?\bin (?:my |the )?(\b\w+\b)".to_string(),
            kind: "location".to_string(),
        },
        RuleDef {
            id: "pronoun_continuation".to_string(),
            pattern: r"(?i)^it\s+is\s+(?:very\s+)?(\w+)".to_string(),
            kind: "pronoun_continuation".to_string(),
        },
        RuleDef {
            id: "attribute".to_string(),
            pattern: r"(\b\w+\b)\s+is\s+(?:very\s+)?(\b\w+\b)".to_string(),
            kind: "attribute".to_string(),
        },
        RuleDef {
            id: "activity_under".to_string(),
            pattern: r"(?i)(?:i|the child)\s+like[s]?\s+to\s+(\w+)\s+under\s+the\s+(\w+)"
                .to_string(),
            kind: "activity_under".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_default_rules_build() {
        for def in default_rules() {
            def.build().expect("default rule should compile");
        }
    }

    #[test]
    fn test_default_rule_order() {
        let kinds: Vec<String> = default_rules().into_iter().map(|d| d.kind).collect();
        assert_eq!(
            kinds,
            [
                "habitat",
                "location",
                "pronoun_continuation",
                "attribute",
                "activity_under"
            ]
        );
    }

    #[test]
    fn test_invalid_regex_fails_build() {
        let def = RuleDef {
            id: "broken".to_string(),
            pattern: r"(\w+".to_string(),
            kind: "habitat".to_string(),
        };
        assert!(matches!(def.build(), Err(BuildError::Regex(_))));
    }

    #[test]
    fn test_unknown_kind_fails_build() {
        let def = RuleDef {
            id: "mystery".to_string(),
            pattern: r"\w+".to_string(),
            kind: "telepathy".to_string(),
        };
        assert!(matches!(def.build(), Err(BuildError::Kind(_))));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_rule_def_serialization() {
        let def = RuleDef {
            id: "habitat".to_string(),
            pattern: r"\w+".to_string(),
            kind: "habitat".to_string(),
        };

        let json = serde_json::to_string(&def).expect("rule def should serialize");
        let deserialized: RuleDef =
            serde_json::from_str(&json).expect("valid JSON should deserialize");

        assert_eq!(deserialized.id, def.id);
        assert_eq!(deserialized.pattern, def.pattern);
    }
}
