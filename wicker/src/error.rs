use crate::lifecycle::ErrorPtr;
use thiserror::Error;

/// Errors surfaced by scope lookups and lifecycle transitions.
#[derive(Error, Clone, Debug)]
pub enum ScopeError {
    /// More than one `Primary` candidate at a populated ladder tier.
    #[error("Multiple primary beans registered for '{type_key}' when expecting one: {candidates:?}")]
    MultiplePrimary {
        type_key: String,
        candidates: Vec<String>,
    },
    /// More than one unmarked candidate and no primary to break the tie.
    #[error("Multiple beans registered for '{type_key}' when expecting one - mark one as Primary or Secondary: {candidates:?}")]
    MultipleCandidates {
        type_key: String,
        candidates: Vec<String>,
    },
    /// More than one `Secondary` candidate and nothing above them.
    #[error("Multiple secondary beans registered for '{type_key}' when expecting one: {candidates:?}")]
    MultipleSecondary {
        type_key: String,
        candidates: Vec<String>,
    },
    /// A registered bean could not be cast to the requested contract.
    #[error("Bean registered for '{type_key}' cannot be cast to the requested type")]
    IncompatibleHandle { type_key: String },
    /// A priority annotation without a readable integer value.
    #[error("Priority annotation '{annotation}' on bean {bean} is missing an integer value")]
    MalformedPriority { annotation: String, bean: String },
    #[error("post_construct failed: {0}")]
    PostConstruct(ErrorPtr),
    #[error("pre_destroy failed: {0}")]
    PreDestroy(ErrorPtr),
}
