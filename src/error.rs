//! Error types for the check-in engine.

/// Top-level error type for the engine.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Flow error: {0}")]
    Flow(#[from] FlowError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Catalog construction/lookup errors.
///
/// These indicate a malformed or misaddressed catalog — fatal to the
/// session, never retried.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog has no sections")]
    Empty,

    #[error("Section not found: {key}")]
    SectionNotFound { key: String },

    #[error("Section index {index} out of range (catalog has {len} sections)")]
    SectionIndexOutOfRange { index: usize, len: usize },

    #[error("Duplicate section key: {key}")]
    DuplicateSectionKey { key: String },

    #[error("Duplicate question id: {id}")]
    DuplicateQuestionId { id: String },

    #[error("Section {key} has no questions")]
    EmptySection { key: String },
}

/// Traversal/submission errors.
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    #[error("Conversation is already complete")]
    AlreadyComplete,

    #[error("Response submitted for {submitted}, but current question is {current}")]
    UnexpectedQuestion { submitted: String, current: String },
}

/// Input validation errors, rejected before anything is recorded.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Blank input submitted for question {question_id}")]
    BlankInput { question_id: String },
}

/// Result type alias for the engine.
pub type Result<T> = std::result::Result<T, Error>;
