use std::process::ExitCode;

fn main() -> ExitCode {
    nextplay_cli::run()
}
