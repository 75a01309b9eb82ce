use thiserror::Error;

/// Error building a rule or question template from its definition.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("invalid regex: {0}")]
    Regex(#[from] regex::Error),

    #[error("invalid rule kind: {0}")]
    Kind(String),
}
