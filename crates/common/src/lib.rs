//! Common utilities, constants, and resources used across the evm codebase.
//!
//! This crate provides shared functionality for the evm toolkit: hex decoding,
//! the opcode table, and bytecode target resolution.

/// Error types for the common module
pub mod error;

/// Constants used throughout the evm codebase.
pub mod constants;

/// Utilities for working with EVM bytecode and opcodes.
pub mod ether;

/// General utility functions for hex handling and file access.
pub mod utils;

pub use error::Error;
