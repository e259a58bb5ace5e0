//! The scoring pipeline that consumes corrected files, seen as an opaque command.

use std::process::Command;

use log::debug;

/// Errors raised while handing an invocation to the downstream pipeline
#[derive(Debug, thiserror::Error)]
pub enum DownstreamError {
    /// The downstream program could not be started
    #[error("Failed to start downstream program '{program}': {source}")]
    Spawn {
        /// Program that was executed
        program: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Entry point of the downstream pipeline.
///
/// Receives the full, already rewritten argument list and returns the pipeline's
/// exit code.
pub trait Downstream {
    /// Run the pipeline with `args`
    fn invoke(&mut self, args: &[String]) -> Result<i32, DownstreamError>;
}

impl<F> Downstream for F
where
    F: FnMut(&[String]) -> Result<i32, DownstreamError>,
{
    fn invoke(&mut self, args: &[String]) -> Result<i32, DownstreamError> {
        self(args)
    }
}

/// Runs the pipeline as a child process with inherited stdio.
#[derive(Debug, Clone)]
pub struct CommandDownstream {
    program: String,
    leading_args: Vec<String>,
}

impl CommandDownstream {
    /// Run `program` with the invocation's arguments
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            leading_args: Vec::new(),
        }
    }

    /// Arguments placed before the invocation's arguments (e.g. `-m scoring.runner`)
    pub fn with_leading_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.leading_args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Program that will be executed
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Downstream for CommandDownstream {
    fn invoke(&mut self, args: &[String]) -> Result<i32, DownstreamError> {
        debug!(
            "exec {} {} {}",
            self.program,
            self.leading_args.join(" "),
            args.join(" ")
        );

        let status = Command::new(&self.program)
            .args(&self.leading_args)
            .args(args)
            .status()
            .map_err(|source| DownstreamError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        // Killed by a signal: there is no code to forward.
        Ok(status.code().unwrap_or(1))
    }
}
