use clap::Parser;
use std::process;
use weather_summary::cli::{self, Args};

fn main() {
    let args = Args::parse();
    cli::setup_logging(&args);

    let config = match args.resolve_config() {
        Ok(config) => config,
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    };

    match cli::run(&config) {
        Ok(outcome) => {
            if !args.quiet {
                cli::print_summary(&outcome, &config);
            }
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
