#![warn(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Pattern-based passage extraction and question answering over a
//! [`trivium_kb::TripleStore`].

mod error;
pub mod extraction;
pub mod query;

pub use error::BuildError;
pub use extraction::engine::ExtractionEngine;
pub use extraction::rules::{ExtractionRule, RuleDef, RuleKind, default_rules};
pub use query::engine::{QueryEngine, UNKNOWN_ANSWER, UNRECOGNISED_ANSWER};
pub use query::templates::{QueryKind, QueryTemplate, TemplateDef, default_templates};
