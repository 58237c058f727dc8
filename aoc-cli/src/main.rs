//! AOC CLI - scaffold and run Advent of Code solutions

use aoc_cli::cli::{Action, Args};
use aoc_cli::commands::{self, RunRequest, Status};
use aoc_cli::config::Config;
use aoc_cli::error::CliError;
use aoc_cli::logging;
use aoc_cli::output::OutputFormatter;
use clap::Parser;

fn main() {
    let args = Args::parse();
    logging::init(args.global.verbose);

    let code = match run(args) {
        Ok(status) => status.exit_code(),
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    };
    std::process::exit(code);
}

fn run(args: Args) -> Result<Status, CliError> {
    let config = Config::from_args(args.year, args.day, &args.global)?;

    match args.action {
        Action::Create { offline, shape } => {
            commands::create(&config, offline, shape)?;
            Ok(Status::Ok)
        }
        Action::Run {
            part,
            target,
            all_tests,
            file,
        } => {
            let request = RunRequest {
                part,
                target,
                include_unchecked: all_tests,
                file,
            };
            let mut formatter = OutputFormatter::new(config.quiet, config.color);
            commands::run(&config, &request, &mut formatter)
        }
    }
}
