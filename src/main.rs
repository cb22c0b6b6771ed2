use std::fs;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use vilang::run;

/// vilang runs programs written in a small imperative language with
/// Vietnamese keywords.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells vilang to read the program from a file instead of the argument.
    #[arg(short, long)]
    file: bool,

    /// Also print every variable bound when the program finishes.
    #[arg(short, long)]
    bindings: bool,

    contents: String,
}

/// Installs a stderr subscriber when `RUST_LOG` is set, e.g.
/// `RUST_LOG=vilang=debug`.
fn init_tracing() {
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)
                                                        .with_target(true)
                                                        .with_level(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

fn main() {
    init_tracing();
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    match run(&script) {
        Ok(result) => {
            for line in &result.output {
                println!("{line}");
            }
            if args.bindings {
                for (name, value) in &result.bindings {
                    println!("{name} = {value}");
                }
            }
        },
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
