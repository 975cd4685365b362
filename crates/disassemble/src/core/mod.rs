use std::{fmt, iter::FusedIterator, time::Instant};

use crate::{error::Error, interfaces::DisassemblerArgs};
use evm_common::{
    ether::{
        bytecode::get_bytecode_from_target,
        opcodes::{immediate_size, is_push, opcode_name},
    },
    utils::strings::encode_hex,
};
use tracing::{debug, info};

/// A single disassembled instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction<'a> {
    /// Offset of the opcode byte in the bytecode.
    pub pc: usize,
    /// The opcode byte.
    pub opcode: u8,
    /// The immediate operand of a PUSH1..PUSH32 opcode, clipped to the end of the bytecode.
    /// `None` for every other opcode.
    pub immediate: Option<&'a [u8]>,
}

impl Instruction<'_> {
    /// The canonical mnemonic of the opcode, `unknown` if it is not defined.
    pub fn name(&self) -> &'static str {
        opcode_name(self.opcode)
    }

    /// The number of bytes the instruction declares: the opcode byte plus the declared immediate
    /// length. May extend past the end of the bytecode when the operand is truncated.
    pub fn declared_size(&self) -> usize {
        1 + immediate_size(self.opcode)
    }

    /// Whether the immediate operand is shorter than the opcode declares.
    pub fn is_truncated(&self) -> bool {
        self.immediate.is_some_and(|data| data.len() < immediate_size(self.opcode))
    }
}

impl fmt::Display for Instruction<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:04}] {}", self.pc, self.name())?;
        if let Some(data) = self.immediate {
            write!(f, " 0x{}", encode_hex(data))?;
        }
        Ok(())
    }
}

/// A lazy iterator over the instructions of a bytecode slice. See [`instructions`].
#[derive(Debug, Clone)]
pub struct Instructions<'a> {
    bytecode: &'a [u8],
    cursor: usize,
}

impl<'a> Iterator for Instructions<'a> {
    type Item = Instruction<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let opcode = *self.bytecode.get(self.cursor)?;
        let pc = self.cursor;

        // handle PUSH1 -> PUSH32, which read the next N bytes as their operand
        let immediate = is_push(opcode).then(|| {
            let start = (pc + 1).min(self.bytecode.len());
            let end = (pc + 1 + immediate_size(opcode)).min(self.bytecode.len());
            &self.bytecode[start..end]
        });

        // skip the full declared operand, even if it was truncated
        self.cursor = pc + 1 + immediate_size(opcode);

        Some(Instruction { pc, opcode, immediate })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bytecode.len().saturating_sub(self.cursor);
        (remaining.div_ceil(33), Some(remaining))
    }
}

impl FusedIterator for Instructions<'_> {}

/// Walks `bytecode` and yields one [`Instruction`] per opcode. The instructions cover the whole
/// input without gaps or overlaps; the last one may carry a truncated operand.
///
/// ```
/// use evm_disassembler::instructions;
///
/// let listing: Vec<String> =
///     instructions(&[0x60, 0x01, 0x60, 0x02, 0x01, 0x00]).map(|i| i.to_string()).collect();
/// assert_eq!(listing, vec!["[0000] PUSH1 0x01", "[0002] PUSH1 0x02", "[0004] ADD", "[0005] STOP"]);
/// ```
pub fn instructions(bytecode: &[u8]) -> Instructions<'_> {
    Instructions { bytecode, cursor: 0 }
}

/// Disassembles EVM bytecode into readable assembly instructions
///
/// The target is resolved into bytecode (hex or a file containing hex) and rendered one
/// instruction per line, each line terminated by a newline. Empty bytecode yields an empty
/// string.
///
/// # Arguments
///
/// * `args` - Arguments specifying the target to disassemble
///
/// # Returns
///
/// A string containing the disassembled bytecode
pub fn disassemble(args: DisassemblerArgs) -> Result<String, Error> {
    let start_time = Instant::now();
    let mut asm = String::new();

    // get the bytecode from the target
    let start_fetch_time = Instant::now();
    let contract_bytecode = get_bytecode_from_target(&args.target)?;
    debug!("fetching target bytecode took {:?}", start_fetch_time.elapsed());

    // iterate over the bytecode, disassembling each instruction
    let start_disassemble_time = Instant::now();
    let mut count = 0;
    for instruction in instructions(&contract_bytecode) {
        if instruction.is_truncated() {
            debug!("truncated operand for {} at pc {}", instruction.name(), instruction.pc);
        }
        asm.push_str(&format!("{instruction}\n"));
        count += 1;
    }
    debug!("disassembly took {:?}", start_disassemble_time.elapsed());

    info!("disassembled {} bytes into {} instructions", contract_bytecode.len(), count);
    debug!("disassembly took {:?}", start_time.elapsed());
    Ok(asm)
}
