use alloy_primitives::Address;
use eyre::{bail, eyre, Result};
use std::fmt::Write;

const ADDRESS_LENGTH: usize = 20;

/// Decodes a hex string into a vector of bytes
///
/// Surrounding whitespace and an optional `0x`/`0X` prefix are stripped first. An empty string
/// decodes to an empty vector.
///
/// ```
/// use evm_common::utils::strings::decode_hex;
///
/// let hex = "0x48656c6c6f20576f726c64"; // "Hello World" in hex
/// let result = decode_hex(hex).expect("should decode hex");
/// assert_eq!(result, vec![72, 101, 108, 108, 111, 32, 87, 111, 114, 108, 100]);
/// ```
pub fn decode_hex(s: &str) -> Result<Vec<u8>> {
    // normalize
    let s = s.trim();
    let s = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s);

    if s.len() % 2 != 0 {
        bail!("invalid hex string: odd number of digits in '{}'", s);
    }

    s.as_bytes()
        .chunks(2)
        .map(|pair| {
            match ((pair[0] as char).to_digit(16), (pair[1] as char).to_digit(16)) {
                (Some(high), Some(low)) => Ok((high << 4 | low) as u8),
                _ => Err(eyre!("invalid hex string: '{}'", s)),
            }
        })
        .collect()
}

/// Encodes a slice of bytes into a lowercase hex string, without prefix
///
/// ```
/// use evm_common::utils::strings::encode_hex;
///
/// let bytes = vec![72, 101, 108, 108, 111, 32, 87, 111, 114, 108, 100];
/// let result = encode_hex(&bytes);
/// assert_eq!(result, "48656c6c6f20576f726c64");
/// ```
pub fn encode_hex(s: &[u8]) -> String {
    s.iter().fold(String::with_capacity(s.len() * 2), |mut acc, b| {
        write!(acc, "{b:02x}").expect("unable to write");
        acc
    })
}

/// Decodes a hex string into an [`Address`]. Shorter inputs are left-padded with zeros, longer
/// inputs are rejected.
///
/// ```
/// use evm_common::utils::strings::decode_address;
///
/// let address = decode_address("0x01").expect("should decode address");
/// assert_eq!(address.to_string(), "0x0000000000000000000000000000000000000001");
/// ```
pub fn decode_address(s: &str) -> Result<Address> {
    let bytes = decode_hex(s)?;
    if bytes.len() > ADDRESS_LENGTH {
        bail!("invalid address: '{}' is longer than {} bytes", s.trim(), ADDRESS_LENGTH);
    }

    let mut padded = [0u8; ADDRESS_LENGTH];
    padded[ADDRESS_LENGTH - bytes.len()..].copy_from_slice(&bytes);
    Ok(Address::from(padded))
}

#[cfg(test)]
mod tests {
    use crate::utils::strings::*;

    #[test]
    fn test_decode_hex() {
        let hex = "48656c6c6f20776f726c64"; // "Hello world"
        let result = decode_hex(hex).expect("should decode hex");
        assert_eq!(result, vec![72, 101, 108, 108, 111, 32, 119, 111, 114, 108, 100]);

        let hex = "abcdef";
        let result = decode_hex(hex).expect("should decode hex");
        assert_eq!(result, vec![171, 205, 239]);

        let hex = "ABCDEF";
        let result = decode_hex(hex).expect("should decode hex");
        assert_eq!(result, vec![171, 205, 239]);
    }

    #[test]
    fn test_decode_hex_prefix_is_optional() {
        let plain = decode_hex("600160020100").expect("should decode hex");
        assert_eq!(decode_hex("0x600160020100").expect("should decode hex"), plain);
        assert_eq!(decode_hex("0X600160020100").expect("should decode hex"), plain);
        assert_eq!(decode_hex("  0x600160020100\n").expect("should decode hex"), plain);
    }

    #[test]
    fn test_decode_hex_empty() {
        assert!(decode_hex("").expect("should decode hex").is_empty());
        assert!(decode_hex("0x").expect("should decode hex").is_empty());
        assert!(decode_hex("   ").expect("should decode hex").is_empty());
    }

    #[test]
    fn test_decode_hex_rejects_odd_length() {
        assert!(decode_hex("0x123").is_err());
        assert!(decode_hex("f").is_err());
    }

    #[test]
    fn test_decode_hex_rejects_non_hex() {
        assert!(decode_hex("0xzz").is_err());
        assert!(decode_hex("60g1").is_err());
        assert!(decode_hex("0x0x").is_err());
        assert!(decode_hex("ü1").is_err());
    }

    #[test]
    fn test_encode_hex() {
        let bytes = vec![72, 101, 108, 108, 111, 32, 119, 111, 114, 108, 100]; // "Hello world"
        let result = encode_hex(&bytes);
        assert_eq!(result, "48656c6c6f20776f726c64");

        assert_eq!(encode_hex(&[]), "");
        assert_eq!(encode_hex(&[0, 1, 255]), "0001ff");
    }

    #[test]
    fn test_hex_round_trip() {
        let bytes: Vec<u8> = (0..=255).collect();
        let decoded = decode_hex(&encode_hex(&bytes)).expect("should decode hex");
        assert_eq!(decoded, bytes);
    }

    #[test]
    fn test_decode_address() {
        let address = decode_address("0x0000000000000000000000000000000000000000")
            .expect("should decode address");
        assert_eq!(address, Address::ZERO);

        let address = decode_address("0xdeadbeef").expect("should decode address");
        let mut expected = [0u8; 20];
        expected[16..].copy_from_slice(&[0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(address, Address::from(expected));

        assert!(decode_address("0x000000000000000000000000000000000000000000").is_err());
        assert!(decode_address("0xnothex").is_err());
    }
}
