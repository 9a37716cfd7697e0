// pipe_flow -- report which sinks a pipe grid's source reaches
// =============================================================================
// USAGE: see Usage below (pipe_flow -h)
// INPUT: a grid description, one `<symbol> <row> <col>` record per line
// OUTPUT: the reachable sink labels, sorted, on one line

use std::io::{self, BufRead};

use pipe_flow::{connected_sinks, connected_sinks_from_path};

const HELP: &str = "\
Usage: pipe_flow [OPTIONS] [file]

Read a pipe-grid description (one `<symbol> <row> <col>` record per line)
and print the labels of every sink reachable from the source.

When [file] is `-` or missing, read from STDIN
OPTIONS:
-h   print this help message
-v   enable debug logging
";

struct AppArgs {
    verbose: bool,
    input: Option<std::path::PathBuf>,
}

fn parse_path(s: &std::ffi::OsStr) -> Result<std::path::PathBuf, &'static str> {
    Ok(s.into())
}

fn getoption() -> Result<AppArgs, pico_args::Error> {
    let mut pargs = pico_args::Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{}", HELP);
        std::process::exit(0);
    }

    let args = AppArgs {
        verbose: pargs.contains(["-v", "--verbose"]),
        input: pargs.opt_free_from_os_str(parse_path)?,
    };

    Ok(args)
}

fn stdin_lines() -> io::Result<Vec<String>> {
    io::stdin().lock().lines().collect()
}

fn main() {
    let args = match getoption() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Error: {}.", e);
            std::process::exit(1);
        }
    };

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let result = match args.input {
        Some(ref path) if path.as_os_str() != "-" => connected_sinks_from_path(path),
        _ => stdin_lines()
            .map_err(pipe_flow::Error::from)
            .and_then(|lines| connected_sinks(&lines)),
    };

    match result {
        Ok(sinks) => println!("{}", sinks),
        Err(e) => {
            eprintln!("Error: {}.", e);
            std::process::exit(1);
        }
    }
}
