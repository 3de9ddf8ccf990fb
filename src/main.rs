mod app;
mod cli;
mod output;

use std::process;

use clap::Parser;

use crate::cli::Config;

// Usage: rxparse [--tokens] [--max-depth N] [--color WHEN] [PATTERN]...
fn main() {
    let cfg = Config::parse();

    let code = match app::run(cfg) {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(err) => {
            eprintln!("error: {err:#}");
            2
        }
    };
    process::exit(code);
}
