//! `netplan apply` integration

use std::process::{Command, Stdio};
use std::time::Instant;

use log::{debug, info, warn};

use netswitch_core::error::{ConfigError, SystemError};
use netswitch_core::{NetworkError, Result, DEFAULT_APPLY_COMMAND};

/// Runs the command that activates the written configuration
#[derive(Debug, Clone)]
pub struct NetplanApplier {
    /// Program to execute
    program: String,
    /// Arguments passed to the program
    args: Vec<String>,
}

/// Result of an apply run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyResult {
    /// Whether the command exited with status zero
    pub success: bool,
    /// Exit code, `None` when the command was killed by a signal
    pub exit_code: Option<i32>,
    /// Wall time of the run
    pub duration_ms: u64,
}

impl NetplanApplier {
    /// Create applier running `netplan apply`
    pub fn new() -> Self {
        Self {
            program: DEFAULT_APPLY_COMMAND[0].to_string(),
            args: DEFAULT_APPLY_COMMAND[1..]
                .iter()
                .map(|arg| arg.to_string())
                .collect(),
        }
    }

    /// Create applier running a custom program
    pub fn with_command(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Create applier from a full command line, program first
    pub fn from_command_line(command_line: &[String]) -> Result<Self> {
        match command_line.split_first() {
            Some((program, args)) if !program.is_empty() => {
                Ok(Self::with_command(program.clone(), args.to_vec()))
            }
            _ => Err(NetworkError::Configuration(ConfigError::InvalidValue {
                field: "apply_command".to_string(),
                value: command_line.join(" "),
            })),
        }
    }

    /// Command line as it would be typed in a shell
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run the apply command to completion.
    ///
    /// Output goes straight to the terminal. A non-zero exit is reported in
    /// the result; only a failure to start the program is an error.
    pub fn apply(&self) -> Result<ApplyResult> {
        let command_line = self.command_line();
        info!("Running {}", command_line);

        let start_time = Instant::now();
        let status = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| SystemError::CommandFailed {
                command: command_line.clone(),
                source,
            })?;
        let duration_ms = start_time.elapsed().as_millis() as u64;

        let success = status.success();
        let exit_code = status.code();

        if success {
            debug!("{} completed successfully in {}ms", command_line, duration_ms);
        } else {
            warn!("{} failed with exit code {:?}", command_line, exit_code);
        }

        Ok(ApplyResult {
            success,
            exit_code,
            duration_ms,
        })
    }
}

impl Default for NetplanApplier {
    fn default() -> Self {
        Self::new()
    }
}
