use alloy_primitives::Bytes;

use crate::{interfaces::ExecutionContext, trace::StructLog};

mod logger;
mod revm;

pub use logger::StructLogger;
pub use self::revm::{RevmEngine, RuntimeError};

/// The outcome of a single execution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Execution {
    /// The data returned by the outermost frame.
    pub return_data: Bytes,
    /// One entry per executed step, in execution order. Empty when tracing is disabled.
    pub logs: Vec<StructLog>,
    /// Total gas used by the call.
    pub gas_used: u64,
    /// An error raised by the engine's state after the call returned.
    pub state_error: Option<String>,
}

/// An EVM implementation able to run a piece of bytecode as a single call.
///
/// Implementors report failure on two channels: an immediate `Err` when the call itself could not
/// run to a successful end, and [`Execution::state_error`] when the state backing the call failed.
pub trait Engine {
    /// The immediate error type of [`Engine::execute`].
    type Error: std::error::Error + Send + Sync + 'static;

    /// Installs `code`, calls it with `input` in the given context, and returns its outcome.
    fn execute(
        &mut self,
        code: &[u8],
        input: &[u8],
        ctx: &ExecutionContext,
    ) -> Result<Execution, Self::Error>;
}
