use eyre::{Result, WrapErr};

/// Reads the whole file at `path` into a string
///
/// ```no_run
/// use evm_common::utils::io::file::read_file;
///
/// let contents = read_file("/tmp/code.hex");
/// ```
pub fn read_file(path: &str) -> Result<String> {
    std::fs::read_to_string(path).wrap_err_with(|| format!("failed to read '{path}'"))
}
