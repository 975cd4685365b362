use std::fmt::Write;

/// Renders `data` as a canonical hex dump: an 8 digit offset, sixteen space separated bytes split
/// into two groups of eight, and the printable ASCII representation between pipes.
///
/// ```
/// use evm_common::utils::hex::hex_dump;
///
/// assert_eq!(
///     hex_dump(b"evm"),
///     "00000000  65 76 6d                                          |evm|\n"
/// );
/// ```
pub fn hex_dump(data: &[u8]) -> String {
    let mut dump = String::new();

    for (line, chunk) in data.chunks(16).enumerate() {
        write!(dump, "{:08x}  ", line * 16).expect("unable to write");

        for column in 0..16 {
            match chunk.get(column) {
                Some(byte) => write!(dump, "{byte:02x} ").expect("unable to write"),
                None => dump.push_str("   "),
            }

            // extra gap after each group of eight
            if column == 7 || column == 15 {
                dump.push(' ');
            }
        }

        dump.push('|');
        dump.extend(chunk.iter().map(|b| if (0x20..=0x7e).contains(b) { *b as char } else { '.' }));
        dump.push_str("|\n");
    }

    dump
}
