pub mod commands;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "nextplay",
    about = "NextPlay operator CLI",
    long_about = "Inspect NextPlay configuration, check readiness, and route a message through the reply pipeline.",
    after_help = "Examples:\n  nextplay doctor --json\n  nextplay config\n  nextplay ask \"I want to upgrade my plan\" --channel chat"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(
        about = "Inspect effective configuration values with source attribution and redaction"
    )]
    Config,
    #[command(about = "Validate config and completion credential readiness")]
    Doctor {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "Classify a message and print the routed reply envelope as JSON")]
    Ask {
        #[arg(help = "Message text to route")]
        message: String,
        #[arg(long, help = "Channel tag (chat, email, call)")]
        channel: Option<String>,
        #[arg(long, help = "Display name used by call scheduling replies")]
        customer_name: Option<String>,
    },
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Config => {
            commands::CommandResult { exit_code: 0, output: commands::config::run() }
        }
        Command::Doctor { json } => {
            commands::CommandResult { exit_code: 0, output: commands::doctor::run(json) }
        }
        Command::Ask { message, channel, customer_name } => {
            commands::ask::run(message, channel, customer_name)
        }
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
