// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use attrition_inference::cli::args::Cli;
use attrition_inference::cli::predict::run_prediction;
use clap::Parser;

fn main() {
    let cli = Cli::parse();
    run_prediction(&cli);
}
