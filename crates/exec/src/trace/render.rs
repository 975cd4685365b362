use std::io::Write;

use alloy_primitives::U256;
use evm_common::utils::{hex::hex_dump, strings::encode_hex};
use serde::Serialize;

use crate::{error::Error, trace::StructLog};

/// Writes the steps of a trace in a human readable form, one block per step.
///
/// ```
/// use evm_exec::{trace::write_trace, StructLog};
///
/// let mut out = Vec::new();
/// write_trace(&mut out, &[StructLog { op: 0x00, gas: 10, ..Default::default() }])
///     .expect("failed to write trace");
/// assert_eq!(String::from_utf8(out).unwrap(), "STOP            pc=00000000 gas=10 cost=0\n\n");
/// ```
pub fn write_trace<W: Write>(out: &mut W, logs: &[StructLog]) -> Result<(), Error> {
    for log in logs {
        write!(out, "{:<16}pc={:08} gas={} cost={}", log.op_name(), log.pc, log.gas, log.gas_cost)?;
        if let Some(err) = &log.error {
            write!(out, " ERROR: {err}")?;
        }
        writeln!(out)?;

        if !log.stack.is_empty() {
            writeln!(out, "Stack:")?;
            for (i, item) in log.stack.iter().rev().enumerate() {
                writeln!(out, "{:08}  {}", i, format_word(item))?;
            }
        }
        if !log.memory.is_empty() {
            writeln!(out, "Memory:")?;
            write!(out, "{}", hex_dump(&log.memory))?;
        }
        if !log.storage.is_empty() {
            writeln!(out, "Storage:")?;
            for (key, value) in &log.storage {
                writeln!(
                    out,
                    "{}: {}",
                    encode_hex(&key.to_be_bytes::<32>()),
                    encode_hex(&value.to_be_bytes::<32>())
                )?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonStructLog<'a> {
    #[serde(flatten)]
    log: &'a StructLog,
    op_name: &'static str,
}

/// Writes the steps of a trace as one JSON object per line.
pub fn write_json_trace<W: Write>(out: &mut W, logs: &[StructLog]) -> Result<(), Error> {
    for log in logs {
        serde_json::to_writer(&mut *out, &JsonStructLog { log, op_name: log.op_name() })?;
        writeln!(out)?;
    }
    Ok(())
}

/// Writes the trailer of a trace: a blank line and the return data.
pub fn write_result<W: Write>(out: &mut W, return_data: &[u8]) -> Result<(), Error> {
    writeln!(out)?;
    writeln!(out, "Return = 0x{}", encode_hex(return_data))?;
    Ok(())
}

/// Formats a stack word as minimal `0x`-prefixed hex, `0x0` for zero.
fn format_word(word: &U256) -> String {
    let trimmed = encode_hex(&word.to_be_bytes::<32>()).trim_start_matches('0').to_string();
    if trimmed.is_empty() {
        "0x0".to_string()
    } else {
        format!("0x{trimmed}")
    }
}
