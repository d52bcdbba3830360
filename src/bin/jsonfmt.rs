use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use jsonfmt::{format_tree, FormatError, FormatOptions, Formatter};

/// A gofmt-style JSON formatter using tabs for indentation.
///
/// Without arguments, jsonfmt reads JSON from stdin and prints the canonical
/// form to stdout. Given a file, it operates on that file; given a directory,
/// it operates on all .json files in that directory, recursively (files
/// starting with a period are ignored).
#[derive(Parser, Debug)]
#[command(name = "jsonfmt")]
#[command(version, about, long_about = None)]
struct Args {
    /// Input file(s) or directory(ies). If not specified, reads from stdin.
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// Do not print reformatted sources to standard output. If a file's
    /// formatting differs from jsonfmt's, overwrite it with jsonfmt's version.
    #[arg(short = 'w', long = "write")]
    write: bool,
}

fn main() {
    let args = Args::parse();
    process::exit(run(args));
}

fn run(args: Args) -> i32 {
    let formatter = Formatter::with_options(FormatOptions {
        write_in_place: args.write,
    });

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.paths.is_empty() {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        if let Err(e) = formatter.format_stream(&mut input, &mut out) {
            report(&e);
            return 2;
        }
        return 0;
    }

    // One argument failing never blocks the ones after it.
    let mut status = 0;
    for path in &args.paths {
        let result = match fs::metadata(path) {
            Err(e) => Err(FormatError::Io {
                message: format!("cannot stat '{}'", path.display()),
                source: e,
            }),
            Ok(meta) if meta.is_dir() => format_tree(&formatter, path, &mut out),
            Ok(_) => formatter.format_file(path, &mut out),
        };
        if let Err(e) = result {
            report(&e);
            status = 2;
        }
    }

    let _ = out.flush();
    status
}

fn report(err: &FormatError) {
    match err {
        FormatError::Syntax { .. } => eprintln!("failed with error: {}", err),
        _ => eprintln!("jsonfmt: {}", err),
    }
}
