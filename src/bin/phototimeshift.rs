use clap::Parser;
use photosort::app;
use photosort::cli::ShiftArgs;
use photosort::output as out;

fn main() {
    let args = ShiftArgs::parse();
    if let Err(e) = app::run_shift(args) {
        out::print_error(&format!("{e:#}"));
        std::process::exit(-1);
    }
}
