use clap::Parser;
use std::process;
use xlsx2geojson::cli::{args::Args, commands};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    match commands::run(args) {
        Ok(_report) => {
            // Success - summary has already been logged by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
