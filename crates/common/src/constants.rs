use alloy_primitives::{address, Address};

/// The zero address, used as the default coinbase and origin.
pub const ZERO_ADDRESS: Address = Address::ZERO;

/// The address the executed bytecode is installed at: the bytes of `"contract"`,
/// left-padded to 20 bytes.
pub const CONTRACT_ADDRESS: Address = address!("000000000000000000000000636f6e7472616374");

/// Default gas limit for `exec`.
pub const DEFAULT_GAS_LIMIT: u64 = 100_000;

/// Default gas price for `exec`.
pub const DEFAULT_GAS_PRICE: u64 = 1;
