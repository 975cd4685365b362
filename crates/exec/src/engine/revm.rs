use alloy_primitives::{Bytes, B256, U256};
use evm_common::constants::CONTRACT_ADDRESS;
use revm::{
    db::{CacheDB, EmptyDB},
    inspector_handle_register,
    interpreter::gas::validate_initial_tx_gas,
    primitives::{
        AccountInfo, Bytecode, EVMError, ExecutionResult, ResultAndState, SpecId, TxKind,
    },
    Evm,
};
use tracing::{debug, trace};

use crate::{
    engine::{logger::StructLogger, Engine, Execution},
    interfaces::ExecutionContext,
};

/// Error type for the immediate failure channel of [`RevmEngine`]
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// The transaction was rejected before execution, or revm failed internally
    #[error("transaction failed: {0}")]
    Transaction(String),
    /// The call ran to a REVERT
    #[error("execution reverted: 0x{}", evm_common::utils::strings::encode_hex(.0))]
    Reverted(Bytes),
    /// The call halted exceptionally
    #[error("execution halted: {0}")]
    Halted(String),
}

/// An [`Engine`] backed by revm, running each call against a fresh in-memory state.
///
/// The code is installed at [`CONTRACT_ADDRESS`] and the origin is funded so that fee checks pass.
#[derive(Debug, Clone, Copy)]
pub struct RevmEngine {
    spec_id: SpecId,
}

impl RevmEngine {
    /// Creates an engine running the latest supported hardfork.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the hardfork rules to execute under.
    pub fn with_spec_id(mut self, spec_id: SpecId) -> Self {
        self.spec_id = spec_id;
        self
    }
}

impl Default for RevmEngine {
    fn default() -> Self {
        Self { spec_id: SpecId::CANCUN }
    }
}

impl Engine for RevmEngine {
    type Error = RuntimeError;

    fn execute(
        &mut self,
        code: &[u8],
        input: &[u8],
        ctx: &ExecutionContext,
    ) -> Result<Execution, RuntimeError> {
        let mut db = CacheDB::new(EmptyDB::default());

        db.insert_account_info(ctx.origin, AccountInfo { balance: U256::MAX, ..Default::default() });
        let bytecode = Bytecode::new_raw(Bytes::copy_from_slice(code));
        db.insert_account_info(
            CONTRACT_ADDRESS,
            AccountInfo {
                balance: if ctx.origin == CONTRACT_ADDRESS { U256::MAX } else { U256::ZERO },
                nonce: 0,
                code_hash: bytecode.hash_slow(),
                code: Some(bytecode),
            },
        );
        trace!("installed {} bytes of code at {}", code.len(), CONTRACT_ADDRESS);

        // the code itself receives the full gas limit, on top of the transaction's intrinsic cost
        let intrinsic_gas = validate_initial_tx_gas(self.spec_id, input, false, &[], 0);
        let tx_gas_limit = ctx.gas_limit.saturating_add(intrinsic_gas);

        let mut evm = Evm::builder()
            .with_db(db)
            .with_external_context(StructLogger::new(ctx.tracing))
            .with_spec_id(self.spec_id)
            .modify_block_env(|block| {
                block.number = U256::from(ctx.block_number);
                block.coinbase = ctx.coinbase;
                block.difficulty = U256::from(ctx.difficulty);
                block.prevrandao = Some(B256::from(U256::from(ctx.difficulty)));
                block.gas_limit = U256::from(tx_gas_limit);
            })
            .modify_tx_env(|tx| {
                tx.caller = ctx.origin;
                tx.transact_to = TxKind::Call(CONTRACT_ADDRESS);
                tx.data = Bytes::copy_from_slice(input);
                tx.value = U256::from(ctx.value);
                tx.gas_limit = tx_gas_limit;
                tx.gas_price = U256::from(ctx.gas_price);
                tx.nonce = None;
            })
            .append_handler_register(inspector_handle_register)
            .build();

        let outcome = evm.transact();
        let logs = std::mem::take(&mut evm.context.external).into_logs();
        debug!("engine recorded {} steps", logs.len());

        match outcome {
            Ok(ResultAndState { result, .. }) => match result {
                ExecutionResult::Success { output, gas_used, .. } => Ok(Execution {
                    return_data: output.into_data(),
                    logs,
                    gas_used: gas_used.saturating_sub(intrinsic_gas),
                    state_error: None,
                }),
                ExecutionResult::Revert { output, .. } => Err(RuntimeError::Reverted(output)),
                ExecutionResult::Halt { reason, .. } => {
                    Err(RuntimeError::Halted(format!("{reason:?}")))
                }
            },
            Err(EVMError::Database(e)) => Ok(Execution {
                return_data: Bytes::new(),
                logs,
                gas_used: 0,
                state_error: Some(e.to_string()),
            }),
            Err(e) => Err(RuntimeError::Transaction(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::Address;

    fn run(code: &[u8], input: &[u8]) -> Result<Execution, RuntimeError> {
        RevmEngine::new().execute(code, input, &ExecutionContext::default())
    }

    #[test]
    fn test_simple_addition_is_traced() {
        let execution = run(&[0x60, 0x01, 0x60, 0x02, 0x01, 0x00], &[]).expect("should execute");

        assert!(execution.return_data.is_empty());
        assert!(execution.state_error.is_none());
        let ops: Vec<u8> = execution.logs.iter().map(|log| log.op).collect();
        assert_eq!(ops, vec![0x60, 0x60, 0x01, 0x00]);
        let pcs: Vec<u64> = execution.logs.iter().map(|log| log.pc).collect();
        assert_eq!(pcs, vec![0, 2, 4, 5]);

        // stack before ADD holds both operands, bottom first
        assert_eq!(execution.logs[2].stack, vec![U256::from(1), U256::from(2)]);
        assert_eq!(execution.logs[3].stack, vec![U256::from(3)]);
        assert!(execution.logs.iter().all(|log| log.depth == 1));
        assert_eq!(execution.logs[0].gas_cost, 3);
        assert_eq!(execution.logs[2].gas_cost, 3);
        assert_eq!(execution.logs[1].gas, execution.logs[0].gas - 3);
    }

    #[test]
    fn test_return_data_is_captured() {
        // PUSH1 0x2a PUSH1 0 MSTORE PUSH1 0x20 PUSH1 0 RETURN
        let code = [0x60, 0x2a, 0x60, 0x00, 0x52, 0x60, 0x20, 0x60, 0x00, 0xf3];
        let execution = run(&code, &[]).expect("should execute");

        let mut expected = [0u8; 32];
        expected[31] = 0x2a;
        assert_eq!(execution.return_data.as_ref(), &expected);
        assert_eq!(execution.logs.last().map(|log| log.memory.len()), Some(32));
    }

    #[test]
    fn test_call_input_is_visible() {
        // PUSH1 0 CALLDATALOAD PUSH1 0 MSTORE PUSH1 0x20 PUSH1 0 RETURN
        let code = [0x60, 0x00, 0x35, 0x60, 0x00, 0x52, 0x60, 0x20, 0x60, 0x00, 0xf3];
        let input = [0xab; 32];
        let execution = run(&code, &input).expect("should execute");
        assert_eq!(execution.return_data.as_ref(), &input);
    }

    #[test]
    fn test_storage_is_attached_to_storage_steps() {
        // PUSH1 0x2a PUSH1 1 SSTORE PUSH1 1 SLOAD STOP
        let code = [0x60, 0x2a, 0x60, 0x01, 0x55, 0x60, 0x01, 0x54, 0x00];
        let execution = run(&code, &[]).expect("should execute");

        let sstore = &execution.logs[2];
        assert_eq!(sstore.op, 0x55);
        assert_eq!(sstore.storage.get(&U256::from(1)), Some(&U256::from(0x2a)));

        let sload = &execution.logs[4];
        assert_eq!(sload.op, 0x54);
        assert_eq!(sload.storage.get(&U256::from(1)), Some(&U256::from(0x2a)));

        assert!(execution.logs[0].storage.is_empty());
        assert!(execution.logs[5].storage.is_empty());
    }

    #[test]
    fn test_revert_is_an_immediate_error() {
        // PUSH1 0 PUSH1 0 REVERT
        let result = run(&[0x60, 0x00, 0x60, 0x00, 0xfd], &[]);
        assert!(matches!(result, Err(RuntimeError::Reverted(data)) if data.is_empty()));
    }

    #[test]
    fn test_halt_is_an_immediate_error() {
        assert!(matches!(run(&[0xfe], &[]), Err(RuntimeError::Halted(_))));
    }

    #[test]
    fn test_code_receives_the_full_gas_limit() {
        let execution = run(&[0x60, 0x01, 0x00], &[]).expect("should execute");
        assert_eq!(execution.logs[0].gas, ExecutionContext::default().gas_limit);

        // call input is paid for by the transaction, not by the code
        let execution = run(&[0x60, 0x01, 0x00], &[0xff; 4]).expect("should execute");
        assert_eq!(execution.logs[0].gas, ExecutionContext::default().gas_limit);
        assert_eq!(execution.gas_used, 3);
    }

    #[test]
    fn test_gas_limit_below_intrinsic_cost_is_accepted() {
        let ctx = ExecutionContext { gas_limit: 100, ..Default::default() };
        let execution = RevmEngine::new().execute(&[0x00], &[], &ctx).expect("should execute");
        assert_eq!(execution.logs.len(), 1);
        assert_eq!(execution.logs[0].gas, 100);
    }

    #[test]
    fn test_running_out_of_gas_halts() {
        // PUSH1 1 PUSH1 1 SSTORE needs far more than 10 gas
        let ctx = ExecutionContext { gas_limit: 10, ..Default::default() };
        let result = RevmEngine::new().execute(&[0x60, 0x01, 0x60, 0x01, 0x55], &[], &ctx);
        assert!(matches!(result, Err(RuntimeError::Halted(_))));
    }

    #[test]
    fn test_spec_id_selects_the_hardfork() {
        // PUSH0 STOP only decodes from shanghai onwards
        let code = [0x5f, 0x00];
        let ctx = ExecutionContext::default();

        let shanghai = RevmEngine::new().with_spec_id(SpecId::SHANGHAI).execute(&code, &[], &ctx);
        assert!(shanghai.is_ok());

        let london = RevmEngine::new().with_spec_id(SpecId::LONDON).execute(&code, &[], &ctx);
        assert!(matches!(london, Err(RuntimeError::Halted(_))));
    }

    #[test]
    fn test_context_is_exposed_to_the_code() {
        // NUMBER PUSH1 0 MSTORE PUSH1 0x20 PUSH1 0 RETURN
        let code = [0x43, 0x60, 0x00, 0x52, 0x60, 0x20, 0x60, 0x00, 0xf3];
        let ctx = ExecutionContext { block_number: 0x1234, ..Default::default() };
        let execution = RevmEngine::new().execute(&code, &[], &ctx).expect("should execute");
        assert_eq!(&execution.return_data[30..], &[0x12, 0x34]);
    }

    /// Runs `op PUSH1 0 MSTORE PUSH1 0x20 PUSH1 0 RETURN` and returns the stored word.
    fn observe(op: u8, ctx: &ExecutionContext) -> Bytes {
        let code = [op, 0x60, 0x00, 0x52, 0x60, 0x20, 0x60, 0x00, 0xf3];
        RevmEngine::new().execute(&code, &[], ctx).expect("should execute").return_data
    }

    #[test]
    fn test_coinbase_is_exposed_to_the_code() {
        let coinbase = Address::from([0xcb; 20]);
        let ctx = ExecutionContext { coinbase, ..Default::default() };
        assert_eq!(&observe(0x41, &ctx)[12..], coinbase.as_slice());
    }

    #[test]
    fn test_value_is_exposed_to_the_code() {
        let ctx = ExecutionContext { value: 0x0506, ..Default::default() };
        assert_eq!(&observe(0x34, &ctx)[30..], &[0x05, 0x06]);
    }

    #[test]
    fn test_origin_is_exposed_to_the_code() {
        let origin = Address::from([0x0a; 20]);
        let ctx = ExecutionContext { origin, ..Default::default() };
        assert_eq!(&observe(0x32, &ctx)[12..], origin.as_slice());
        assert_eq!(&observe(0x33, &ctx)[12..], origin.as_slice());
    }

    #[test]
    fn test_disabled_tracing_records_nothing() {
        let ctx = ExecutionContext { tracing: false, ..Default::default() };
        let execution = RevmEngine::new().execute(&[0x00], &[], &ctx).expect("should execute");
        assert!(execution.logs.is_empty());
    }
}
