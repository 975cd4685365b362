/// File reading utilities.
pub mod file;
