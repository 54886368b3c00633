mod args;
mod sim;

use clap::Parser;
use log::info;
use snafu::ErrorCompat;

use crate::args::Args;
use crate::sim::run_simulation;

fn main() {
    let args = Args::parse();
    let filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();
    info!("args: {:?}", args);

    if let Err(e) = run_simulation(&args) {
        eprintln!("An error occured {}", e);
        if let Some(bt) = ErrorCompat::backtrace(&e) {
            eprintln!("trace: {}", bt);
        } else {
            eprintln!("No trace found");
        }
        std::process::exit(1);
    }
}
