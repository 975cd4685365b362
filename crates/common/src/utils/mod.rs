/// Hex dumping utilities.
pub mod hex;

/// Input/output utilities for file access.
pub mod io;

/// String manipulation and hex encoding utilities.
pub mod strings;
