use thiserror::Error;

/// Errors surfaced while assembling the content store.
///
/// These are authoring bugs (two modules claiming the same category, or a
/// duplicated topic inside one category), not runtime conditions: the
/// built-in catalog is verified by tests and the binary treats an assembly
/// failure as fatal before any UI exists.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("duplicate category: {0}")]
    DuplicateCategory(String),
    #[error("duplicate topic {topic:?} in category {category:?}")]
    DuplicateTopic { category: String, topic: String },
    #[error("empty {0} name")]
    EmptyName(&'static str),
}

pub type Result<T> = std::result::Result<T, ContentError>;
