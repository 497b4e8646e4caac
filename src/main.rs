// src/main.rs
use clap::Parser;
use std::process::ExitCode;
use stream_wc::app;
use stream_wc::args::Args;

fn main() -> ExitCode {
    let args = Args::parse();
    app::init_logging(args.verbose);

    match app::run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("stream_wc: {e}");
            ExitCode::FAILURE
        }
    }
}
