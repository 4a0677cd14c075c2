//! User-facing console lines.
//!
//! stdout carries the main output (verbose progress, summaries); stderr carries
//! warnings and errors next to the tracing diagnostics. Labels are colored only
//! when the stream is a TTY.

use owo_colors::OwoColorize;

#[derive(Clone, Copy)]
enum Stream {
    Out,
    Err,
}

impl Stream {
    fn is_tty(self) -> bool {
        match self {
            Stream::Out => atty::is(atty::Stream::Stdout),
            Stream::Err => atty::is(atty::Stream::Stderr),
        }
    }
}

fn emit(stream: Stream, label: &str, colored: String, msg: &str) {
    let prefix = if stream.is_tty() { colored } else { label.to_string() };
    match stream {
        Stream::Out => println!("{prefix} {msg}"),
        Stream::Err => eprintln!("{prefix} {msg}"),
    }
}

pub fn print_info(msg: &str) {
    emit(Stream::Out, "info:", "info:".cyan().bold().to_string(), msg);
}

pub fn print_success(msg: &str) {
    emit(Stream::Out, "ok:", "ok:".green().bold().to_string(), msg);
}

pub fn print_warn(msg: &str) {
    emit(Stream::Err, "warn:", "warn:".yellow().bold().to_string(), msg);
}

pub fn print_error(msg: &str) {
    emit(Stream::Err, "error:", "error:".red().bold().to_string(), msg);
}

/// Plain line on stdout with no prefix. Verbose progress goes through here so
/// it stays easy to grep and script against.
pub fn print_user(msg: &str) {
    println!("{msg}");
}
