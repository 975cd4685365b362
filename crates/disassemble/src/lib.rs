//! The Disassembler module converts EVM bytecode into a human-readable instruction listing.
//!
//! Disassembly is a single forward pass over the bytes: every byte at the cursor is an opcode,
//! and push opcodes additionally consume their immediate operand. Undefined opcodes and
//! truncated trailing operands are listed as they are found rather than rejected.

/// Error types for the disassembler module
pub mod error;

mod core;
mod interfaces;

// re-export the public interface
pub use core::{disassemble, instructions, Instruction, Instructions};
pub use error::Error;
pub use interfaces::{DisassemblerArgs, DisassemblerArgsBuilder};
