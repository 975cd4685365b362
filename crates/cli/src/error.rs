#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
    #[error("IO error: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Disassemble error: {0}")]
    DisassembleError(#[from] evm_disassembler::Error),
    #[error("Exec error: {0}")]
    ExecError(#[from] evm_exec::Error),
}
