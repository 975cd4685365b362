mod args;
mod context;

pub use args::*;
pub use context::*;
