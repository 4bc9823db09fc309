//! Diagnostic logging for the CLI

use colored::Colorize;
use log::{Level, LevelFilter};
use std::io::Write;

/// Level chosen from the verbosity flags; `--quiet` wins over `--verbose`
pub fn level_for(verbose: bool, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Error
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Install the stderr logger. `RUST_LOG` still applies on top of the flag level.
pub fn init_logging(verbose: bool, quiet: bool) {
    let result = env_logger::Builder::new()
        .filter_level(level_for(verbose, quiet))
        .parse_default_env()
        .format(|buf, record| {
            let label = match record.level() {
                Level::Error => "Error".red().bold(),
                Level::Warn => "Warning".yellow(),
                Level::Info => "Info".blue(),
                Level::Debug => "Debug".dimmed(),
                Level::Trace => "Trace".dimmed(),
            };
            writeln!(buf, "{}: {}", label, record.args())
        })
        .try_init();

    if let Err(e) = result {
        eprintln!("{}: logger already initialized: {}", "Warning".yellow(), e);
    }
}
