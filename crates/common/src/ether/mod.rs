/// Resolution of user supplied targets into raw bytecode.
pub mod bytecode;

/// The EVM opcode table.
pub mod opcodes;
