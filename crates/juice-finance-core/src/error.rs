use thiserror::Error;

#[derive(Debug, Error)]
pub enum FinanceError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },
}

impl FinanceError {
    /// Field name carried by an `InvalidInput` error.
    pub fn field(&self) -> Option<&str> {
        match self {
            FinanceError::InvalidInput { field, .. } => Some(field),
        }
    }
}
