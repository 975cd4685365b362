use std::collections::{BTreeMap, HashMap};

use alloy_primitives::{Address, Bytes, U256};
use evm_common::ether::opcodes::{SLOAD, SSTORE};
use revm::{
    interpreter::{InstructionResult, Interpreter},
    Database, EvmContext, Inspector,
};

use crate::trace::StructLog;

/// A revm [`Inspector`] that records a [`StructLog`] for every executed step.
#[derive(Debug, Default)]
pub struct StructLogger {
    enabled: bool,
    logs: Vec<StructLog>,
    storage: HashMap<Address, BTreeMap<U256, U256>>,
    pending_sload: Option<(Address, U256)>,
}

impl StructLogger {
    /// Creates a logger. A disabled logger records nothing.
    pub fn new(enabled: bool) -> Self {
        Self { enabled, ..Default::default() }
    }

    /// Consumes the logger, returning the recorded steps.
    pub fn into_logs(self) -> Vec<StructLog> {
        self.logs
    }
}

impl<DB: Database> Inspector<DB> for StructLogger {
    fn step(&mut self, interp: &mut Interpreter, context: &mut EvmContext<DB>) {
        if !self.enabled {
            return;
        }

        let op = interp.current_opcode();
        let stack = interp.stack.data().clone();
        let address = interp.contract.target_address;

        // SSTORE is visible before it runs, SLOAD's value only once it has run
        let mut storage = BTreeMap::new();
        match (op, stack.as_slice()) {
            (SSTORE, [.., value, key]) => {
                let slots = self.storage.entry(address).or_default();
                slots.insert(*key, *value);
                storage = slots.clone();
            }
            (SLOAD, [.., key]) => self.pending_sload = Some((address, *key)),
            _ => {}
        }

        self.logs.push(StructLog {
            pc: interp.program_counter() as u64,
            op,
            gas: interp.gas.remaining(),
            gas_cost: 0,
            depth: context.journaled_state.depth() as u64,
            error: None,
            stack,
            memory: Bytes::copy_from_slice(interp.shared_memory.context_memory()),
            storage,
        });
    }

    fn step_end(&mut self, interp: &mut Interpreter, _context: &mut EvmContext<DB>) {
        if !self.enabled {
            return;
        }
        let Some(log) = self.logs.last_mut() else {
            return;
        };

        log.gas_cost = log.gas.saturating_sub(interp.gas.remaining());

        if let Some((address, key)) = self.pending_sload.take() {
            if let Some(value) = interp.stack.data().last() {
                let slots = self.storage.entry(address).or_default();
                slots.insert(key, *value);
                log.storage = slots.clone();
            }
        }

        let result = interp.instruction_result;
        if result == InstructionResult::Revert {
            log.error = Some("execution reverted".to_string());
        } else if result.is_error() {
            log.error = Some(format!("{result:?}"));
        }
    }
}
