use std::collections::BTreeMap;

use alloy_primitives::{Bytes, U256};
use evm_common::ether::opcodes::opcode_name;
use serde::Serialize;

mod render;

pub use render::{write_json_trace, write_result, write_trace};

/// A single traced step of an execution, recorded by the engine before the opcode runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructLog {
    /// The program counter.
    pub pc: u64,
    /// The opcode byte.
    pub op: u8,
    /// Gas remaining before the step.
    pub gas: u64,
    /// Gas charged by the step.
    pub gas_cost: u64,
    /// Call depth, 1 for the outermost frame.
    pub depth: u64,
    /// Why the step halted its frame, if it did.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// The stack, bottom first.
    pub stack: Vec<U256>,
    /// The memory of the current frame.
    pub memory: Bytes,
    /// The storage slots of the executing contract observed so far. Only populated on SLOAD and
    /// SSTORE steps.
    pub storage: BTreeMap<U256, U256>,
}

impl StructLog {
    /// The mnemonic of the step's opcode.
    pub fn op_name(&self) -> &'static str {
        opcode_name(self.op)
    }
}
