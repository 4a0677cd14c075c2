use clap::Parser;
use photosort::app;
use photosort::cli::SortArgs;
use photosort::output as out;

fn main() {
    let args = SortArgs::parse();
    if let Err(e) = app::run_sort(args) {
        out::print_error(&format!("{e:#}"));
        std::process::exit(-1);
    }
}
