//! Command-line interface for globgroups
//! Expands one brace-grouped pattern and prints each expansion on its own line.
//!
//! Usage:
//!   globgroups `<pattern>`                                   - Print every expansion
//!   globgroups --debug-tree [--tree-format `<fmt>`] `<pattern>` - Dump the parsed tree to stderr first
//!   DEBUG_PARSE_GLOB=1 globgroups `<pattern>`                - Same as --debug-tree
//!
//! Exit codes: 0 on success, 1 for usage errors, 2 when the pattern does not parse.

use clap::{Arg, ArgAction, ArgMatches, Command};
use globgroups::formats::{FormatError, TreeFormat};
use globgroups::{GlobSyntaxError, Pattern};
use std::error::Error;
use std::ffi::OsStr;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

const EXIT_USAGE: u8 = 1;
const EXIT_SYNTAX: u8 = 2;

const DEBUG_ENV: &str = "DEBUG_PARSE_GLOB";

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid glob pattern")]
    Syntax(#[from] GlobSyntaxError),
    #[error("failed to render parse tree")]
    Format(#[from] FormatError),
    #[error("failed to write expansions")]
    Io(#[from] io::Error),
}

fn command() -> Command {
    Command::new("globgroups")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Expand brace-grouped glob patterns like foo{bar,baz}.txt")
        .arg_required_else_help(true)
        .arg(
            Arg::new("pattern")
                .help("Pattern to expand, e.g. 'a{b,c{d,e}}f'")
                .required(true)
                .allow_hyphen_values(true)
                .index(1),
        )
        .arg(
            Arg::new("debug-tree")
                .long("debug-tree")
                .help("Print the parsed tree to stderr before the expansions (also DEBUG_PARSE_GLOB=1)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("tree-format")
                .long("tree-format")
                .help("Format used by --debug-tree")
                .value_parser(TreeFormat::NAMES)
                .default_value("treeviz"),
        )
}

fn main() -> ExitCode {
    env_logger::init();

    let matches = match command().try_get_matches() {
        Ok(matches) => matches,
        Err(e) => {
            // --help and --version also arrive here
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(EXIT_USAGE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(CliError::Syntax(e)) => {
            eprintln!("ERROR: {}", e);
            eprintln!("{}", e.diagnostic());
            ExitCode::from(EXIT_SYNTAX)
        }
        Err(e) => {
            eprintln!("ERROR: {}", e);
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("Cause: {}", cause);
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

/// Whether the environment toggle asks for the tree dump
///
/// Only `1`, `true`, `yes` and `on` enable it; any other value is ignored
/// rather than rejected.
fn debug_env_enabled(value: Option<&OsStr>) -> bool {
    value.and_then(OsStr::to_str).is_some_and(|value| {
        ["1", "true", "yes", "on"]
            .iter()
            .any(|truthy| value.trim().eq_ignore_ascii_case(truthy))
    })
}

fn run(matches: &ArgMatches) -> Result<(), CliError> {
    let text = matches
        .get_one::<String>("pattern")
        .map(String::as_str)
        .unwrap_or_default();
    let pattern = Pattern::parse(text)?;

    let debug_tree = matches.get_flag("debug-tree")
        || debug_env_enabled(std::env::var_os(DEBUG_ENV).as_deref());
    if debug_tree {
        let format = matches
            .get_one::<String>("tree-format")
            .and_then(|name| name.parse::<TreeFormat>().ok())
            .unwrap_or_default();
        eprint!("{}", format.render(&pattern)?);
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for expansion in pattern.expand() {
        writeln!(out, "{}", expansion)?;
    }
    out.flush()?;
    Ok(())
}
