/// Error type for the Disassembler module
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The target could not be decoded into bytecode
    #[error("Decode error: {0}")]
    DecodeError(#[from] evm_common::Error),
    /// Generic internal error that may occur during disassembly
    #[error("Internal error: {0}")]
    Eyre(#[from] eyre::Report),
}
