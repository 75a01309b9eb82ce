//! The query dispatcher.
//!
//! Questions are matched against the ordered template list; the first
//! structurally matching template wins and is answered with one linear
//! scan of the store. Unknown shapes and missing facts are ordinary
//! answer strings, never errors.

use regex::Captures;
use tracing::debug;

use trivium_kb::{Relation, TripleStore, canonicalize};

use super::templates::{QueryKind, QueryTemplate, TemplateDef, default_templates};
use crate::error::BuildError;

/// Answer for a recognized question with no matching fact.
pub const UNKNOWN_ANSWER: &str = "I don't know.";

/// Answer for a question matching none of the templates.
pub const UNRECOGNISED_ANSWER: &str = "Query type not recognised.";

fn capture<'t>(caps: &Captures<'t>, index: usize) -> &'t str {
    caps.get(index).map_or("", |m| m.as_str())
}

/// Matches questions against an ordered template list and answers them
/// from a [`TripleStore`].
#[derive(Debug)]
pub struct QueryEngine {
    templates: Vec<QueryTemplate>,
}

impl QueryEngine {
    /// Compile an engine from template definitions, preserving their
    /// order.
    ///
    /// # Errors
    /// Returns an error if any definition fails to compile.
    pub fn new(defs: &[TemplateDef]) -> Result<Self, BuildError> {
        let templates = defs
            .iter()
            .map(TemplateDef::build)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { templates })
    }

    /// Engine over the fixed default templates.
    ///
    /// # Errors
    /// Returns an error if a default template fails to compile.
    pub fn with_defaults() -> Result<Self, BuildError> {
        Self::new(&default_templates())
    }

    /// Answer one question from the store.
    ///
    /// The question is trimmed and lowercased before matching. The first
    /// template whose shape matches wins; the question is never retried
    /// against a later template, even when the answer is
    /// [`UNKNOWN_ANSWER`].
    #[must_use]
    pub fn answer(&self, store: &TripleStore, question: &str) -> String {
        let question = question.trim().to_lowercase();

        for template in &self.templates {
            if let Some(caps) = template.regex.captures(&question) {
                let key = canonicalize(capture(&caps, 1));
                debug!(kind = template.kind.as_str(), key, "question matched");
                return Self::resolve(store, template.kind, &key);
            }
        }
        UNRECOGNISED_ANSWER.to_string()
    }

    /// One linear scan per question, first match in insertion order.
    fn resolve(store: &TripleStore, kind: QueryKind, key: &str) -> String {
        match kind {
            QueryKind::Where => store
                .first_object(key, &Relation::LocatedIn)
                .map_or_else(|| UNKNOWN_ANSWER.to_string(), str::to_string),
            QueryKind::Color => store
                .first_object(key, &Relation::Attr)
                .map_or_else(|| UNKNOWN_ANSWER.to_string(), str::to_string),
            QueryKind::Inhabitants => {
                let inhabitants: Vec<&str> =
                    store.subjects_for(&Relation::LivesIn, key).collect();
                if inhabitants.is_empty() {
                    UNKNOWN_ANSWER.to_string()
                } else {
                    inhabitants.join(", ")
                }
            }
            QueryKind::ActivityUnder => store
                .iter()
                .find_map(|t| match (&t.relation, t.object.as_deref()) {
                    (Relation::LikesToUnder(verb), Some(object))
                        if t.subject == "child" && object == key =>
                    {
                        Some(verb.clone())
                    }
                    _ => None,
                })
                .unwrap_or_else(|| UNKNOWN_ANSWER.to_string()),
        }
    }
}
