//! Netswitch
//!
//! Rewrites a single-interface netplan file from command line flags and
//! optionally activates it with `netplan apply`.

pub mod cli;
pub mod commands;
pub mod options;
pub mod privilege;
pub mod settings;


use std::ffi::OsString;

use anyhow::Result;
use clap::CommandFactory;
use netswitch_apply::NetplanApplier;
use netswitch_core::NetworkError;
use netswitch_validate::AddressValidator;

pub use cli::{normalize_args, Cli};
pub use options::SwitchOptions;
pub use settings::Settings;

use commands::{PrintCommand, SwitchCommand};

/// Process exit status for success
pub const EXIT_SUCCESS: i32 = 0;

/// Process exit status for every kind of failure
pub const EXIT_FAILURE: i32 = 1;

/// How a run ended when no error was raised
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Success,
    /// The file was written but the apply command failed
    ApplyFailed,
}

/// Run netswitch for parsed arguments.
///
/// `--print` short-circuits everything else: nothing is validated, checked or
/// written. Otherwise addresses are validated before the privilege check, so
/// malformed input never reaches the file.
pub fn run(cli: &Cli, settings: &Settings) -> Result<RunStatus> {
    if cli.print {
        let config_path = options::config_path(cli, settings);
        PrintCommand::new().execute(&config_path)?;
        return Ok(RunStatus::Success);
    }

    let validator = AddressValidator::new();
    let options = SwitchOptions::from_cli(cli, settings, &validator)?;

    privilege::ensure_root()?;

    let applier = NetplanApplier::from_command_line(&settings.apply_command)?;
    let report = SwitchCommand::new(applier).execute(&options)?;

    if report.succeeded() {
        Ok(RunStatus::Success)
    } else {
        Ok(RunStatus::ApplyFailed)
    }
}

/// Whether argv holds nothing but the program name
pub fn is_bare_invocation(args: &[OsString]) -> bool {
    args.len() <= 1
}

/// Full help text, shown when netswitch is run without arguments
pub fn help_text() -> String {
    Cli::command().render_help().to_string()
}

/// Exit status for an argument parsing error.
///
/// `--help` and `--version` surface as clap errors too and exit successfully;
/// real usage errors exit with 1 rather than clap's default of 2.
pub fn parse_error_code(err: &clap::Error) -> i32 {
    if err.use_stderr() {
        EXIT_FAILURE
    } else {
        EXIT_SUCCESS
    }
}

/// Exit status for the result of [`run`]
pub fn exit_code(result: &Result<RunStatus>) -> i32 {
    match result {
        Ok(RunStatus::Success) => EXIT_SUCCESS,
        Ok(RunStatus::ApplyFailed) | Err(_) => EXIT_FAILURE,
    }
}

/// Lines printed to stderr for an error returned by [`run`].
///
/// Mistakes in the input and a missing root privilege get a short message and
/// a pointer to `--help`; anything else is shown with its full cause chain.
pub fn error_report(err: &anyhow::Error) -> Vec<String> {
    let user_error = err
        .downcast_ref::<NetworkError>()
        .is_some_and(NetworkError::is_user_error);

    if user_error {
        vec![
            format!("Error. {}", err),
            "Try 'netswitch --help' for more information.".to_string(),
        ]
    } else {
        std::iter::once(format!("Error: {}", err))
            .chain(err.chain().skip(1).map(|cause| format!("  Caused by: {}", cause)))
            .collect()
    }
}
