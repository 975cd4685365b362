/// Error type for the Common module
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input could not be decoded (malformed hex, oversized address, ...)
    #[error("Decode error: {0}")]
    DecodeError(String),
    /// Generic internal error
    #[error("Internal error: {0}")]
    Eyre(#[from] eyre::Report),
}
