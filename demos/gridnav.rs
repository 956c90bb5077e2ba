//! Generate or load a grid and search it from the command line.
//!
//! Run: cargo run --bin gridnav -- --rows 25 --cols 50 --seed 7 --strategy bfs --show

use clap::Parser;
use gridnav_demos::Cli;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match gridnav_demos::run(&cli) {
        Ok(report) => println!("{report}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
