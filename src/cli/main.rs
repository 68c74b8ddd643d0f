#![warn(clippy::all, clippy::pedantic)]

use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use flowcut::{parse_capacity_matrix, render_report, solve};

/// Compute the maximum flow and minimum cut of a capacity matrix.
#[derive(Parser)]
#[command(name = "flowcut-cli", version, about)]
struct Args {
    /// Input file: vertex count on the first line, then the capacity matrix
    input: PathBuf,

    /// Output file for the solution; stdout when omitted
    output: Option<PathBuf>,

    /// Increase log verbosity (-v: debug, -vv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let _ = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let input = fs::read_to_string(&args.input)?;
    let matrix = parse_capacity_matrix::<i64>(&input).map_err(|e| e.to_string())?;
    let solution = solve(&matrix).map_err(|e| e.to_string())?;
    let rendered = render_report(&solution.report());

    match &args.output {
        Some(path) => fs::write(path, rendered)?,
        None => print!("{rendered}"),
    }
    Ok(())
}
