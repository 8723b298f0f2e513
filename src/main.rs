use std::fs;

use clap::Parser;
use monkey::{interpret, interpreter::repl};

/// monkey is a small, dynamically-typed programming language with
/// first-class functions and lexical closures.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells monkey to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode is a feature that automatically prints out the last
    /// printable value of a monkey script.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Source text (or a script path with --file). Omitting it starts the
    /// interactive REPL.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let Some(contents) = args.contents else {
        repl::start();
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            std::process::exit(1);
        })
    } else {
        contents
    };

    if let Err(e) = interpret(&script, args.pipe_mode) {
        eprintln!("{e}");
    }
}
