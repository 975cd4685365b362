/// Error type for the Exec module
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The bytecode, call input, or an address option could not be decoded
    #[error("Decode error: {0}")]
    DecodeError(String),
    /// The engine rejected or aborted the call
    #[error("Engine error: {0}")]
    EngineError(String),
    /// The engine's state reported an error after the call returned
    #[error("State error: {0}")]
    StateError(String),
    /// Writing the trace failed
    #[error("IO error: {0}")]
    IOError(#[from] std::io::Error),
    /// Serializing a trace step failed
    #[error("Json error: {0}")]
    SerdeError(#[from] serde_json::Error),
    /// Generic internal error
    #[error("Internal error: {0}")]
    Eyre(#[from] eyre::Report),
}

impl From<evm_common::Error> for Error {
    fn from(err: evm_common::Error) -> Self {
        Error::DecodeError(err.to_string())
    }
}
