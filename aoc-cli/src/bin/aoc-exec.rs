//! Call one solution and print its raw answer

use aoc_cli::cli::ExecArgs;
use aoc_cli::commands;
use aoc_cli::config::resolve_date;
use aoc_cli::error::CliError;
use aoc_cli::logging;
use aoc_harness::SolutionRef;
use aoc_cli::output::write_answer;
use clap::Parser;

fn main() {
    let args = ExecArgs::parse();
    logging::init(args.verbose);

    match run(args) {
        Ok(answer) => {
            if let Err(e) = write_answer(&mut std::io::stdout().lock(), &answer) {
                eprintln!("Error: {}", e);
                std::process::exit(aoc_cli::exit_codes::ERROR);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

fn run(args: ExecArgs) -> Result<String, CliError> {
    let today = chrono::Local::now().date_naive();
    let (year, day) = resolve_date(args.year, args.day, today)?;
    commands::exec(SolutionRef::new(year, day, args.part), args.file.as_deref())
}
