use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContactError {
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),
}

impl ContactError {
    /// Message safe to show to the visitor.
    ///
    /// Client-facing variants carry their message verbatim; storage
    /// failures collapse to a fixed text so no detail leaks out.
    pub fn public_message(&self) -> &str {
        match self {
            ContactError::MalformedBody(message) | ContactError::Validation(message) => message.as_str(),
            ContactError::Database(_) => crate::messages::STORAGE_FAILURE,
        }
    }
}

pub type ContactResult<T> = Result<T, ContactError>;
