//! jiucuo CLI binary.

use clap::Parser;
use jiucuo::cli::{args::JiucuoArgs, commands::execute_command};
use std::process;

fn main() {
    let args = JiucuoArgs::parse();

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
