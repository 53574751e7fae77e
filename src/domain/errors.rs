//! Error kinds raised by the store and the shortener.
//!
//! Neither layer logs or terminates on error; callers decide.

use thiserror::Error;

/// Errors returned by [`crate::domain::repositories::RedirectionStore`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The identifier is already taken. Used as the collision signal.
    #[error("{0} key already exists")]
    AlreadyExists(String),

    #[error("{0} key not exists")]
    NotFound(String),
}

/// Errors returned by [`crate::application::services::ShortenerService`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortenerError {
    #[error("long url cannot be empty")]
    EmptyInput,

    #[error("{0} not found")]
    NotFound(String),

    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for ShortenerError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::NotFound(id) => Self::NotFound(id),
            other => Self::Store(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_not_found_maps_to_shortener_not_found() {
        let err: ShortenerError = StoreError::NotFound("abc1234".to_string()).into();
        assert_eq!(err, ShortenerError::NotFound("abc1234".to_string()));
    }

    #[test]
    fn test_store_conflict_is_wrapped() {
        let err: ShortenerError = StoreError::AlreadyExists("abc1234".to_string()).into();
        assert!(matches!(err, ShortenerError::Store(StoreError::AlreadyExists(_))));
        assert_eq!(err.to_string(), "abc1234 key already exists");
    }
}
