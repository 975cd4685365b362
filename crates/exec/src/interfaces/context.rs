use alloy_primitives::Address;
use evm_common::{
    constants::{DEFAULT_GAS_LIMIT, DEFAULT_GAS_PRICE, ZERO_ADDRESS},
    ether::bytecode::get_bytecode_from_target,
    utils::strings::{decode_address, decode_hex},
};

use crate::{error::Error, interfaces::ExecArgs};

/// The transaction and block environment a piece of bytecode is executed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionContext {
    /// The block number.
    pub block_number: u64,
    /// The block beneficiary.
    pub coinbase: Address,
    /// The block difficulty.
    pub difficulty: u64,
    /// The gas limit of both the call and the block.
    pub gas_limit: u64,
    /// The gas price of the call.
    pub gas_price: u64,
    /// The transaction origin and caller.
    pub origin: Address,
    /// The call value, in wei.
    pub value: u64,
    /// Whether the engine records a [`crate::StructLog`] per step.
    pub tracing: bool,
}

impl Default for ExecutionContext {
    fn default() -> Self {
        Self {
            block_number: 0,
            coinbase: ZERO_ADDRESS,
            difficulty: 0,
            gas_limit: DEFAULT_GAS_LIMIT,
            gas_price: DEFAULT_GAS_PRICE,
            origin: ZERO_ADDRESS,
            value: 0,
            tracing: true,
        }
    }
}

/// Everything needed for one execution: the context, the code to run and the call input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionConfig {
    /// The execution context.
    pub context: ExecutionContext,
    /// The decoded bytecode.
    pub code: Vec<u8>,
    /// The decoded call input.
    pub input: Vec<u8>,
}

impl ExecutionConfig {
    /// Resolves the target, decodes the call input and addresses, and builds the context.
    /// Tracing is always enabled.
    pub fn from_args(args: &ExecArgs) -> Result<Self, Error> {
        let code = get_bytecode_from_target(&args.target)?;
        let input = decode_hex(&args.input)
            .map_err(|e| Error::DecodeError(format!("invalid input: {e}")))?;
        let coinbase = decode_address(&args.coinbase)
            .map_err(|e| Error::DecodeError(format!("invalid coinbase: {e}")))?;
        let origin = decode_address(&args.origin)
            .map_err(|e| Error::DecodeError(format!("invalid origin: {e}")))?;

        Ok(Self {
            context: ExecutionContext {
                block_number: args.number,
                coinbase,
                difficulty: args.difficulty,
                gas_limit: args.gaslimit,
                gas_price: args.gasprice,
                origin,
                value: args.value,
                tracing: true,
            },
            code,
            input,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::ExecArgsBuilder;

    #[test]
    fn test_default_args_build_default_context() {
        let args = ExecArgsBuilder::new().target("0x00".to_string()).build().expect("should build");
        let config = ExecutionConfig::from_args(&args).expect("should build config");

        assert_eq!(config.context, ExecutionContext::default());
        assert_eq!(config.code, vec![0x00]);
        assert!(config.input.is_empty());
    }

    #[test]
    fn test_options_are_mapped() {
        let args = ExecArgsBuilder::new()
            .target("0x6001".to_string())
            .number(12)
            .coinbase("0xc0ffee".to_string())
            .difficulty(3)
            .gaslimit(21_000)
            .gasprice(9)
            .input("0xabcd".to_string())
            .origin("0x01".to_string())
            .value(5)
            .build()
            .expect("should build");
        let config = ExecutionConfig::from_args(&args).expect("should build config");

        let mut coinbase = [0u8; 20];
        coinbase[17..].copy_from_slice(&[0xc0, 0xff, 0xee]);
        let mut origin = [0u8; 20];
        origin[19] = 0x01;

        assert_eq!(
            config.context,
            ExecutionContext {
                block_number: 12,
                coinbase: Address::from(coinbase),
                difficulty: 3,
                gas_limit: 21_000,
                gas_price: 9,
                origin: Address::from(origin),
                value: 5,
                tracing: true,
            }
        );
        assert_eq!(config.code, vec![0x60, 0x01]);
        assert_eq!(config.input, vec![0xab, 0xcd]);
    }

    #[test]
    fn test_malformed_options_are_decode_errors() {
        let bad_input =
            ExecArgsBuilder::new().input("0x123".to_string()).build().expect("should build");
        assert!(matches!(ExecutionConfig::from_args(&bad_input), Err(Error::DecodeError(_))));

        let bad_origin = ExecArgsBuilder::new()
            .origin("0x000000000000000000000000000000000000000001".to_string())
            .build()
            .expect("should build");
        assert!(matches!(ExecutionConfig::from_args(&bad_origin), Err(Error::DecodeError(_))));

        let bad_code =
            ExecArgsBuilder::new().target("0xnothex".to_string()).build().expect("should build");
        assert!(matches!(ExecutionConfig::from_args(&bad_code), Err(Error::DecodeError(_))));
    }
}
