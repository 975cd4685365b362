use crate::{
    utils::{io::file::read_file, strings::decode_hex},
    Error,
};
use std::path::Path;
use tracing::{debug, error};

/// Given a target, determines whether it is a path to a file containing hex-encoded bytecode or
/// the hex-encoded bytecode itself, and returns the decoded bytes.
///
/// ```
/// use evm_common::ether::bytecode::get_bytecode_from_target;
///
/// let bytecode = get_bytecode_from_target("0x600160020100").expect("should decode");
/// assert_eq!(bytecode, vec![0x60, 0x01, 0x60, 0x02, 0x01, 0x00]);
/// ```
pub fn get_bytecode_from_target(target: &str) -> Result<Vec<u8>, Error> {
    let trimmed = target.trim();

    if !trimmed.is_empty() && Path::new(trimmed).is_file() {
        // Target is a file path, so we need to read the bytecode from the file.
        debug!("reading bytecode from file '{}'", trimmed);
        let contents = read_file(trimmed).map_err(|e| {
            error!("failed to open file '{}' .", trimmed);
            Error::Eyre(e)
        })?;

        let contents: String = contents.split_whitespace().collect();
        return decode_hex(&contents).map_err(|e| {
            error!("file '{}' doesn't contain valid bytecode.", trimmed);
            Error::DecodeError(e.to_string())
        });
    }

    decode_hex(trimmed).map_err(|e| Error::DecodeError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;

    #[test]
    fn test_get_bytecode_when_target_is_bytecode() {
        let bytecode = get_bytecode_from_target("0x600160020100").expect("should decode");
        assert_eq!(bytecode, vec![0x60, 0x01, 0x60, 0x02, 0x01, 0x00]);
    }

    #[test]
    fn test_get_bytecode_when_target_is_empty() {
        let bytecode = get_bytecode_from_target("").expect("should decode");
        assert!(bytecode.is_empty());
    }

    #[test]
    fn test_get_bytecode_when_target_is_malformed() {
        let result = get_bytecode_from_target("0x6001600");
        assert!(matches!(result, Err(Error::DecodeError(_))));
    }

    #[test]
    #[serial]
    fn test_get_bytecode_when_target_is_file() {
        let path = "test_get_bytecode_when_target_is_file";
        fs::write(path, "0x6001\n6002\n0100\n").expect("failed to write file");

        let bytecode = get_bytecode_from_target(path);
        fs::remove_file(path).expect("failed to delete file");

        assert_eq!(bytecode.expect("should decode"), vec![0x60, 0x01, 0x60, 0x02, 0x01, 0x00]);
    }

    #[test]
    #[serial]
    fn test_get_bytecode_when_file_is_malformed() {
        let path = "test_get_bytecode_when_file_is_malformed";
        fs::write(path, "not bytecode").expect("failed to write file");

        let bytecode = get_bytecode_from_target(path);
        fs::remove_file(path).expect("failed to delete file");

        assert!(matches!(bytecode, Err(Error::DecodeError(_))));
    }
}
