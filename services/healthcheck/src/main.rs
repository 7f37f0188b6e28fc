//! Healthcheck plugin CLI
//!
//! Command-line entry point invoked by the tsuru client as `tsuru healthcheck <command>`.

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use healthcheck::{run, usage, Command, Config, COMMAND_NAMES};
use tracing::Level;

#[derive(Parser)]
#[command(name = "healthcheck")]
#[command(about = "Manage URL checkers and watchers of a healthcheck service instance")]
#[command(version)]
struct Args {
    /// Log level
    #[arg(short, long, global = true, default_value = "warn", value_parser = parse_log_level)]
    log_level: Level,

    #[command(subcommand)]
    command: Command,
}

fn parse_log_level(s: &str) -> Result<Level, String> {
    s.parse().map_err(|_| {
        format!(
            "Invalid log level: {}. Use: trace, debug, info, warn, error",
            s
        )
    })
}

/// Whether `err` means no known command was named on the command line
fn is_command_lookup_failure(err: &clap::Error, first_arg: Option<&str>) -> bool {
    match err.kind() {
        ErrorKind::InvalidSubcommand
        | ErrorKind::MissingSubcommand
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => true,
        // An unknown flag in place of the command, e.g. `healthcheck -x`
        ErrorKind::UnknownArgument => !first_arg.is_some_and(|arg| COMMAND_NAMES.contains(&arg)),
        _ => false,
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let first_arg = std::env::args_os().nth(1);
            if is_command_lookup_failure(&err, first_arg.as_ref().and_then(|a| a.to_str())) {
                print!("{}", usage());
                return ExitCode::from(2);
            }
            err.exit()
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(
        "Parsed command line arguments: command={:?}, log_level={:?}",
        args.command,
        args.log_level
    );

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            return ExitCode::from(e.exit_code());
        }
    };

    match run(&args.command, &config).await {
        Ok(message) => {
            println!("{}", message);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("ERROR: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
