use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// `register` has not been called yet.
    #[error("NOT_REGISTERED: {0}")]
    NotRegistered(String),
    /// Nothing is published under this name.
    #[error("UNKNOWN_NAME: {0}")]
    UnknownName(String),
}
