use anyhow::{bail, Context, Result};
use log::info;
use std::process::ExitCode;

use colfix::downstream::CommandDownstream;
use colfix::rewrite::{run_with_corrected_notes, Invocation};

use super::Config;

/// Run the downstream pipeline with a corrected notes file
pub fn run(config: &Config, runner: Option<String>, args: Vec<String>) -> Result<ExitCode> {
    let registry = config.registry()?;

    let mut downstream = match (runner, &config.runner.program) {
        (Some(program), _) => CommandDownstream::new(program),
        (None, Some(program)) => {
            CommandDownstream::new(program.as_str()).with_leading_args(config.runner.args.clone())
        }
        (None, None) => bail!(
            "No downstream program configured; pass --runner or set [runner] program in the config file"
        ),
    };

    let invocation = Invocation::new(args);
    match invocation.notes_path() {
        Some(notes) => info!("notes file: {}", notes),
        None => info!("no --notes argument; forwarding arguments unchanged"),
    }

    let code = run_with_corrected_notes(invocation, &registry, &mut downstream).with_context(
        || format!("Failed to run downstream program '{}'", downstream.program()),
    )?;

    info!("downstream exited with code {}", code);
    Ok(exit_code(code))
}

fn exit_code(code: i32) -> ExitCode {
    match u8::try_from(code) {
        Ok(code) => ExitCode::from(code),
        Err(_) => ExitCode::FAILURE,
    }
}
