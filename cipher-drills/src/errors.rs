#[derive(thiserror::Error, Debug)]
pub enum CipherDrillsError {
    /// Error when a cipher argument is not a usable string (wrong type, empty or non-letter keyword).
    #[error("InvalidArgument: {0}")]
    InvalidArgument(String),
    /// Error when creating a ring with an invalid modulus (k <= 1).
    #[error("InvalidModulus: {0}")]
    InvalidModulus(String),
    #[error("DimensionMismatch: {0}")]
    DimensionMismatch(String),

    #[error("Matrix must have at least one row")]
    EmptyMatrix,
    #[error("Internal error: Overflow during calculation")]
    CalculationOverflow,

    #[error("Data serialization: {0}")]
    SerializationError(#[from] serde_json::Error),
}
