use clap::Parser;
use sigwalk::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
