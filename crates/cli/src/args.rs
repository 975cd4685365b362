use clap::Parser;
use evm_disassembler::DisassemblerArgs;
use evm_exec::ExecArgs;

use crate::log_args::LogArgs;

/// Printed when no command, or an unknown command, is given.
pub(crate) const HELP: &str = "usage: evm <command> [<args>]

The most commonly used evm commands are:
  disasm     Disassemble bytecode
  exec       Execute bytecode

Run 'evm <command> -h' for more information on a command.
";

/// Long flags that may also be written with a single dash, e.g. `-gaslimit=5`.
const SINGLE_DASH_FLAGS: [&str; 9] =
    ["number", "coinbase", "difficulty", "gaslimit", "gasprice", "input", "origin", "value", "json"];

#[derive(Debug, Parser)]
#[clap(
    name = "disasm",
    about = "Disassemble bytecode",
    override_usage = "evm disasm [OPTIONS] <TARGET>"
)]
pub(crate) struct DisasmCommand {
    #[clap(flatten)]
    pub(crate) args: DisassemblerArgs,

    #[clap(flatten)]
    pub(crate) logs: LogArgs,
}

#[derive(Debug, Parser)]
#[clap(name = "exec", about = "Execute bytecode", override_usage = "evm exec [OPTIONS] <TARGET>")]
pub(crate) struct ExecCommand {
    #[clap(flatten)]
    pub(crate) args: ExecArgs,

    #[clap(flatten)]
    pub(crate) logs: LogArgs,
}

#[derive(Debug)]
pub(crate) enum Command {
    Disasm(DisasmCommand),
    Exec(ExecCommand),
}

/// Parses the full argument vector, program name included. Returns `None` when the help block
/// should be printed instead.
pub(crate) fn parse_command(argv: &[String]) -> Result<Option<Command>, clap::Error> {
    let Some(command) = argv.get(1) else {
        return Ok(None);
    };

    // the command name stands in for the program name of the subcommand parser
    let args = normalize_args(&argv[1..]);
    match command.as_str() {
        "disasm" => Ok(Some(Command::Disasm(DisasmCommand::try_parse_from(args)?))),
        "exec" => Ok(Some(Command::Exec(ExecCommand::try_parse_from(args)?))),
        _ => Ok(None),
    }
}

/// Rewrites single-dash long flags (`-number 5`, `-gaslimit=5`) to their double-dash form.
/// Everything after a `--` terminator is left alone.
pub(crate) fn normalize_args(args: &[String]) -> Vec<String> {
    let mut terminated = false;

    args.iter()
        .map(|arg| {
            if terminated {
                return arg.clone();
            }
            if arg == "--" {
                terminated = true;
                return arg.clone();
            }

            match arg.strip_prefix('-') {
                Some(flag)
                    if !flag.starts_with('-') &&
                        SINGLE_DASH_FLAGS.contains(&flag.split('=').next().unwrap_or(flag)) =>
                {
                    format!("-{arg}")
                }
                _ => arg.clone(),
            }
        })
        .collect()
}
