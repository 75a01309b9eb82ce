//! Question template definitions.
//!
//! Templates are tried in order against the trimmed, lowercased question.
//! The first template whose shape matches answers the question, even when
//! the answer turns out to be "I don't know.", so list order is part of
//! the dispatch semantics.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::BuildError;

/// The four supported question categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum QueryKind {
    /// "where is (the) X?"
    Where,
    /// "what color is (the) X?"
    Color,
    /// "what lives in (the) X?"
    Inhabitants,
    /// "what does (the) child like to do under (the) X?"
    ActivityUnder,
}

impl QueryKind {
    /// Returns the string representation of this kind.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::Where => "where",
            Self::Color => "color",
            Self::Inhabitants => "inhabitants",
            Self::ActivityUnder => "activity_under",
        }
    }
}

impl FromStr for QueryKind {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "where" => Ok(Self::Where),
            "color" => Ok(Self::Color),
            "inhabitants" => Ok(Self::Inhabitants),
            "activity_under" => Ok(Self::ActivityUnder),
            _ => Err("unknown query kind"),
        }
    }
}

/// Definition of one question template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateDef {
    /// The question category this template answers.
    pub kind: QueryKind,

    /// Anchored regex over the trimmed, lowercased question. Group 1
    /// captures the raw topic, canonicalized before lookup.
    pub pattern: String,
}

impl TemplateDef {
    /// Create a new template definition.
    #[must_use]
    pub fn new(kind: QueryKind, pattern: impl Into<String>) -> Self {
        Self {
            kind,
            pattern: pattern.into(),
        }
    }

    /// Compile into a matchable template.
    ///
    /// # Errors
    /// Returns an error if the regex is invalid.
    pub fn build(&self) -> Result<QueryTemplate, BuildError> {
        Ok(QueryTemplate {
            kind: self.kind,
            regex: Regex::new(&self.pattern)?,
        })
    }
}

/// A compiled question template.
#[derive(Debug)]
pub struct QueryTemplate {
    /// The question category this template answers.
    pub kind: QueryKind,

    /// Compiled question pattern.
    pub regex: Regex,
}

/// The fixed question templates, in dispatch order.
///
/// The trailing `?` is required by every shape; a question without it
/// matches nothing and is reported as unrecognised.
#[must_use]
pub fn default_templates() -> Vec<TemplateDef> {
    vec![
        TemplateDef::new(QueryKind::Where, r"^where is (?:the |a |an )?([\w\s]+)\?"),
        TemplateDef::new(QueryKind::Color, r"^what color is (?:the |a )?([\w\s]+)\?"),
        TemplateDef::new(
            QueryKind::Inhabitants,
            r"^what lives in (?:the |a )?([\w\s]+)\?",
        ),
        TemplateDef::new(
            QueryKind::ActivityUnder,
            r"^what does (?:the )?child like to do under (?:the )?([\w\s]+)\?",
        ),
    ]
}
