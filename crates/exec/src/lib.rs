//! The Exec module runs EVM bytecode on an external engine and renders the execution trace.
//!
//! The pipeline is: resolve [`ExecArgs`] into an [`ExecutionConfig`], hand the bytecode, call
//! input and [`ExecutionContext`] to an [`Engine`], check both of its failure channels, then
//! write the per-step [`StructLog`]s followed by the return data.
//!
//! The engine is injected: [`exec`] uses [`RevmEngine`], while [`exec_with`] accepts any
//! implementation of [`Engine`].

/// Error types for the exec module
pub mod error;

/// The external engine boundary and its revm implementation.
pub mod engine;

/// Trace records and their renderers.
pub mod trace;

mod core;
mod interfaces;

// re-export the public interface
pub use core::{exec, exec_with};
pub use engine::{Engine, Execution, RevmEngine, RuntimeError, StructLogger};
pub use error::Error;
pub use interfaces::{ExecArgs, ExecArgsBuilder, ExecutionConfig, ExecutionContext};
pub use trace::StructLog;
