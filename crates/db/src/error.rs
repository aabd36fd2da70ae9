use snipbin_core::error::CoreError;

/// Failure of a [`crate::SnippetStore`] operation.
///
/// Absence is not an error: `get` returns `Ok(None)` and `delete` returns
/// `Ok(false)`. Every variant here is something the caller must be able to
/// tell apart from a business-level miss.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Caller input rejected before any store interaction.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Every candidate slug collided within the retry bound.
    #[error("No free slug found after {attempts} attempts")]
    AllocationExhausted { attempts: u32 },

    /// The backing store could not be reached.
    #[error("Store unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),

    /// The backing store was reached but the statement failed.
    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if is_connectivity_error(&err) {
            StoreError::Unavailable(err)
        } else {
            StoreError::Database(err)
        }
    }
}

/// Whether `err` means the database never got to run the statement.
pub fn is_connectivity_error(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed
    )
}
