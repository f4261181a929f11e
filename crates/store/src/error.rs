use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error.
///
/// Driver errors are wrapped as-is; handlers echo their text back to the
/// caller, which doubles as the information-disclosure exhibit.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("username already exists")]
    DuplicateUsername,
}
