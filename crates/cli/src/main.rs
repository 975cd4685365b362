pub(crate) mod args;
pub(crate) mod error;
pub(crate) mod log_args;

use std::io::Write;

use args::{parse_command, Command, HELP};
use error::Error;

use evm_disassembler::disassemble;
use evm_exec::exec;

fn main() -> Result<(), Error> {
    let argv: Vec<String> = std::env::args().collect();

    let command = match parse_command(&argv) {
        Ok(Some(command)) => command,
        Ok(None) => {
            std::io::stdout().write_all(HELP.as_bytes())?;
            return Ok(());
        }
        Err(e) => e.exit(),
    };

    match command {
        Command::Disasm(cmd) => {
            // setup logging
            let _ = cmd.logs.init_tracing();

            let assembly = disassemble(cmd.args)?;
            std::io::stdout().write_all(assembly.as_bytes())?;
        }

        Command::Exec(cmd) => {
            // setup logging
            let _ = cmd.logs.init_tracing();

            exec(cmd.args)?;
        }
    }

    Ok(())
}
