//! Netswitch CLI

use clap::Parser;
use netswitch::{
    error_report, exit_code, help_text, is_bare_invocation, normalize_args, parse_error_code, run,
    Cli, Settings, EXIT_FAILURE,
};

fn main() {
    let args = normalize_args(std::env::args_os());

    // Display help menu if no args given
    if is_bare_invocation(&args) {
        print!("{}", help_text());
        std::process::exit(EXIT_FAILURE);
    }

    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(parse_error_code(&e));
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level()))
        .init();

    let settings = Settings::load_with_defaults();

    let result = run(&cli, &settings);
    if let Err(e) = &result {
        for line in error_report(e) {
            eprintln!("{}", line);
        }
    }
    std::process::exit(exit_code(&result));
}
