use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use feature_ranker::{config::Config, error::Result, pipeline};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the run configuration file
    config: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = Config::read(&args.config)?;
    let features = pipeline::run(&config)?;

    println!("#### p(f|{})/p(f|{})", config.numerator, config.denominator);
    for feature in features {
        println!("{} {}", feature.ratio, feature.label);
    }

    Ok(())
}
