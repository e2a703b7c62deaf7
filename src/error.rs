use thiserror::Error;

/// Business-rule and store failures surfaced by the core components.
///
/// Lifecycle guard failures (checking in a non-confirmed reservation,
/// cancelling a terminal one) are not errors; those operations return
/// `Ok(false)` and leave the record untouched.
#[derive(Debug, Error)]
pub enum Error {
    #[error("room number {0} already exists")]
    DuplicateRoomNumber(String),

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("{0}")]
    InvalidInput(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl Error {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
