use clap::Parser;
use derive_builder::Builder;

#[derive(Debug, Clone, Parser, Builder)]
#[clap(
    about = "Disassemble bytecode",
    override_usage = "evm disasm [OPTIONS] <TARGET>"
)]
/// Arguments for the disassemble operation
pub struct DisassemblerArgs {
    /// The bytecode to disassemble, either hex (optionally 0x-prefixed) or a path to a file
    /// containing hex.
    #[clap(default_value = "", hide_default_value = true)]
    pub target: String,
}

impl DisassemblerArgsBuilder {
    /// Creates a new DisassemblerArgsBuilder with default values
    pub fn new() -> Self {
        Self { target: Some(String::new()) }
    }
}
