use crate::{logging, rewriter, target};

use console::style;
use std::{env, io};
use tracing::debug;

/// What the command line asked for.
#[derive(Debug, PartialEq, Eq)]
enum Action {
    Help,
    Version,
    Rewrite,
}

/// Picks the action from the raw arguments (program name excluded).
///
/// Only `--help`/`-h` and `--version`/`-V` are recognised; anything else is
/// ignored and the rewrite runs.
fn parse_action<I, S>(args: I) -> Action
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args: Vec<S> = args.into_iter().collect();

    if args.iter().any(|a| a.as_ref() == "--help" || a.as_ref() == "-h") {
        return Action::Help;
    }
    if args.iter().any(|a| a.as_ref() == "--version" || a.as_ref() == "-V") {
        return Action::Version;
    }
    Action::Rewrite
}

/// Prints usage information to stdout.
fn print_help() {
    println!(
        "\
fix-canvas {}

Reset the canvas header of every Pure Data patch in ../src/.

USAGE:
    fix-canvas [OPTIONS]

OPTIONS:
    -h, --help       Print help information
    -V, --version    Print version information

DESCRIPTION:
    Replaces line 1 of each *.pd file in the `src` directory beside the one
    holding this executable with `#N canvas 0 0 640 480 10;` and prints
    `Updated: <file>` for every file written. The rest of each file is left
    byte-for-byte intact.

    Set FIX_CANVAS_LOG (e.g. `debug`) for diagnostics on stderr.",
        env!("CARGO_PKG_VERSION")
    );
}

/// Main CLI entry point for `fix-canvas`.
///
/// 1. Handles `--help` and `--version`.
/// 2. Installs the stderr log subscriber.
/// 3. Resolves the patch directory from the executable's location.
/// 4. Rewrites every patch file, reporting each one on stdout.
///
/// Returns `Ok(0)` once every patch has been processed.
///
/// # Errors
///
/// Returns `Err(())` on the first filesystem failure, after printing it to
/// stderr. Files rewritten before the failure stay rewritten.
pub fn entry() -> Result<i32, ()> {
    match parse_action(env::args().skip(1)) {
        Action::Help => {
            print_help();
            return Ok(0);
        }
        Action::Version => {
            println!("fix-canvas {}", env!("CARGO_PKG_VERSION"));
            return Ok(0);
        }
        Action::Rewrite => {}
    }

    logging::init();

    let dir = match target::resolve() {
        Ok(d) => d,
        Err(e) => {
            eprintln!("{}", style(format!("Error: {}", e)).red().bold());
            return Err(());
        }
    };
    debug!(dir = %dir.display(), "resolved patch directory");

    let mut stdout = io::stdout().lock();
    match rewriter::run(&dir, &mut stdout) {
        Ok(_) => Ok(0),
        Err(e) => {
            debug!(kind = ?e.kind(), "rewrite aborted");
            eprintln!("{}", style(format!("❌ {}", e)).red().bold());
            Err(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Action, parse_action};

    #[test]
    fn no_arguments_runs_rewrite() {
        assert_eq!(parse_action(Vec::<String>::new()), Action::Rewrite);
    }

    #[test]
    fn help_flags_are_recognised() {
        assert_eq!(parse_action(["--help"]), Action::Help);
        assert_eq!(parse_action(["-h"]), Action::Help);
    }

    #[test]
    fn version_flags_are_recognised() {
        assert_eq!(parse_action(["--version"]), Action::Version);
        assert_eq!(parse_action(["-V"]), Action::Version);
    }

    #[test]
    fn help_wins_over_version() {
        assert_eq!(parse_action(["-V", "--help"]), Action::Help);
    }

    #[test]
    fn unknown_arguments_are_ignored() {
        assert_eq!(parse_action(["--dry-run", "somewhere"]), Action::Rewrite);
    }
}
