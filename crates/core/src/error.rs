#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    #[error("unknown symptom: {0}")]
    UnknownSymptom(String),
    #[error("duplicate vocabulary entry: {0}")]
    DuplicateEntry(String),
    #[error("invalid symptom identifier: {0}")]
    InvalidIdentifier(#[from] sympick_types::IdentifierError),
}

pub type SelectionResult<T> = std::result::Result<T, SelectionError>;
