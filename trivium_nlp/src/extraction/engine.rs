//! Sentence-by-sentence rule evaluation.
//!
//! The engine splits a passage into sentences and evaluates the ordered
//! rule list against each one; the first matching rule fires and the
//! sentence is done, so no sentence emits more than one triple. A
//! one-slot current-subject context carries the last explicitly named
//! subject across sentences, which is what lets "it is ..." sentences
//! resolve.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::debug;

use trivium_kb::{Relation, Triple};

use super::rules::{ExtractionRule, RuleDef, RuleKind, default_rules};
use crate::error::BuildError;

/// Sentence boundary: `.`, `!` or `?` plus any following whitespace.
#[expect(clippy::expect_used, reason = "literal pattern is known valid")]
static SENTENCE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]\s*").expect("sentence boundary pattern compiles"));

fn capture<'t>(caps: &Captures<'t>, index: usize) -> &'t str {
    caps.get(index).map_or("", |m| m.as_str())
}

/// Applies an ordered extraction rule list to free text.
#[derive(Debug)]
pub struct ExtractionEngine {
    rules: Vec<ExtractionRule>,
}

impl ExtractionEngine {
    /// Compile an engine from rule definitions, preserving their order.
    ///
    /// # Errors
    /// Returns an error if any definition fails to compile.
    pub fn new(defs: &[RuleDef]) -> Result<Self, BuildError> {
        let rules = defs
            .iter()
            .map(RuleDef::build)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    /// Engine over the fixed default rule set.
    ///
    /// # Errors
    /// Returns an error if a default rule fails to compile.
    pub fn with_defaults() -> Result<Self, BuildError> {
        Self::new(&default_rules())
    }

    /// Extract triples from a passage, in sentence order.
    ///
    /// The current-subject context starts unset and is scoped to this
    /// call.
    #[must_use]
    pub fn ingest(&self, passage: &str) -> Vec<Triple> {
        let mut triples = Vec::new();
        let mut current_subject: Option<String> = None;

        for sentence in SENTENCE_BOUNDARY.split(passage.trim()) {
            if sentence.is_empty() {
                continue;
            }
            if let Some(triple) = self.apply_first(sentence, &mut current_subject) {
                triples.push(triple);
            }
        }

        debug!("extracted {} triples from passage", triples.len());
        triples
    }

    /// Evaluate the rule list in order; the first match emits.
    fn apply_first(
        &self,
        sentence: &str,
        current_subject: &mut Option<String>,
    ) -> Option<Triple> {
        for rule in &self.rules {
            if rule.kind == RuleKind::PronounContinuation && current_subject.is_none() {
                continue;
            }
            let Some(caps) = rule.regex.captures(sentence) else {
                continue;
            };
            let triple = match rule.kind {
                RuleKind::Habitat => Triple::new(
                    capture(&caps, 1),
                    Relation::LivesIn,
                    Some(capture(&caps, 2)),
                ),
                RuleKind::Location => {
                    let subject = capture(&caps, 1);
                    *current_subject = Some(subject.to_string());
                    Triple::new(subject, Relation::LocatedIn, Some(capture(&caps, 2)))
                }
                RuleKind::PronounContinuation => {
                    let subject = current_subject.clone().unwrap_or_default();
                    Triple::new(&subject, Relation::Attr, Some(capture(&caps, 1)))
                }
                RuleKind::Attribute => {
                    let subject = capture(&caps, 1);
                    *current_subject = Some(subject.to_string());
                    Triple::new(subject, Relation::Attr, Some(capture(&caps, 2)))
                }
                RuleKind::ActivityUnder => Triple::new(
                    "child",
                    Relation::LikesToUnder(capture(&caps, 1).to_string()),
                    Some(capture(&caps, 2)),
                ),
            };
            return Some(triple);
        }
        None
    }
}
