use std::{io::Write, time::Instant};

use tracing::{debug, error, info};

use crate::{
    engine::{Engine, Execution, RevmEngine},
    error::Error,
    interfaces::{ExecArgs, ExecutionConfig},
    trace::{write_json_trace, write_result, write_trace},
};

/// Executes bytecode on the revm engine and writes its trace to stdout.
///
/// See [`exec_with`].
pub fn exec(args: ExecArgs) -> Result<Execution, Error> {
    let mut engine = RevmEngine::new();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    exec_with(args, &mut engine, &mut out)
}

/// Executes bytecode on the given engine and writes its trace to `out`
///
/// The target and call input are decoded, the context is built from the remaining arguments,
/// and the engine runs one call. Both of the engine's failure channels are fatal: nothing is
/// written when either reports an error.
///
/// # Arguments
///
/// * `args` - Arguments specifying the target and the execution context
/// * `engine` - The engine to run the call on
/// * `out` - Where the trace and the return data are written
///
/// # Returns
///
/// The [`Execution`] reported by the engine
pub fn exec_with<E: Engine, W: Write>(
    args: ExecArgs,
    engine: &mut E,
    out: &mut W,
) -> Result<Execution, Error> {
    let start_time = Instant::now();

    let config = ExecutionConfig::from_args(&args)?;
    debug!(
        "executing {} bytes of code with {} bytes of input",
        config.code.len(),
        config.input.len()
    );

    let start_execute_time = Instant::now();
    let execution = engine.execute(&config.code, &config.input, &config.context).map_err(|e| {
        error!("failed to execute bytecode: {}", e);
        Error::EngineError(e.to_string())
    })?;
    debug!("execution took {:?}", start_execute_time.elapsed());

    if let Some(err) = &execution.state_error {
        error!("execution left the state in error: {}", err);
        return Err(Error::StateError(err.clone()));
    }

    let start_render_time = Instant::now();
    if args.json {
        write_json_trace(out, &execution.logs)?;
    } else {
        write_trace(out, &execution.logs)?;
    }
    write_result(out, &execution.return_data)?;
    out.flush()?;
    debug!("rendering trace took {:?}", start_render_time.elapsed());

    info!("executed {} steps using {} gas", execution.logs.len(), execution.gas_used);
    debug!("exec took {:?}", start_time.elapsed());
    Ok(execution)
}
