use clap::Parser;
use derive_builder::Builder;
use evm_common::constants::{DEFAULT_GAS_LIMIT, DEFAULT_GAS_PRICE};

#[derive(Debug, Clone, Parser, Builder)]
#[clap(
    about = "Execute bytecode",
    override_usage = "evm exec [OPTIONS] <TARGET>"
)]
/// Arguments for the exec operation
pub struct ExecArgs {
    /// The bytecode to execute, either hex (optionally 0x-prefixed) or a path to a file
    /// containing hex.
    #[clap(default_value = "", hide_default_value = true)]
    pub target: String,

    /// The block number.
    #[clap(long, default_value_t = 0)]
    pub number: u64,

    /// The block coinbase.
    #[clap(long, default_value = "0x0000000000000000000000000000000000000000")]
    pub coinbase: String,

    /// The block difficulty, also used as prevrandao.
    #[clap(long, default_value_t = 0)]
    pub difficulty: u64,

    /// The gas limit of the call and of the block.
    #[clap(long, default_value_t = DEFAULT_GAS_LIMIT)]
    pub gaslimit: u64,

    /// The gas price.
    #[clap(long, default_value_t = DEFAULT_GAS_PRICE)]
    pub gasprice: u64,

    /// The hex-encoded call input.
    #[clap(long, default_value = "", hide_default_value = true)]
    pub input: String,

    /// The transaction origin, which is also the caller.
    #[clap(long, default_value = "0x0000000000000000000000000000000000000000")]
    pub origin: String,

    /// The call value, in wei.
    #[clap(long, default_value_t = 0)]
    pub value: u64,

    /// Print the trace as one JSON object per step.
    #[clap(long)]
    pub json: bool,
}

impl ExecArgsBuilder {
    /// Creates a new ExecArgsBuilder with default values
    pub fn new() -> Self {
        Self {
            target: Some(String::new()),
            number: Some(0),
            coinbase: Some("0x0000000000000000000000000000000000000000".to_string()),
            difficulty: Some(0),
            gaslimit: Some(DEFAULT_GAS_LIMIT),
            gasprice: Some(DEFAULT_GAS_PRICE),
            input: Some(String::new()),
            origin: Some("0x0000000000000000000000000000000000000000".to_string()),
            value: Some(0),
            json: Some(false),
        }
    }
}
