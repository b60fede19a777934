/// Error taxonomy returned by the service layer.
///
/// The boundary layer dispatches on the variant tag, never on downcasting:
/// `Validation` maps to a client error, everything else to a server error.
/// "Not found" is deliberately absent — reads signal it with `Ok(None)` and
/// updates/deletes with zero rows affected.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Operation timed out")]
    Timeout,
}

impl CoreError {
    /// Whether the caller can recover by correcting its input.
    pub fn is_client_error(&self) -> bool {
        matches!(self, CoreError::Validation(_))
    }
}

impl From<sqlx::Error> for CoreError {
    fn from(err: sqlx::Error) -> Self {
        CoreError::Storage(err.to_string())
    }
}
