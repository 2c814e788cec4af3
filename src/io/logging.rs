//! Terminal logger setup for the command-line tool

use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

/// Log level for the given verbosity flags, `quiet` taking precedence
pub const fn level_for(quiet: bool, verbose: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Install a stderr logger at the given level
///
/// Returns false if a logger was already installed, in which case the
/// existing one is kept.
pub fn init(level: LevelFilter) -> bool {
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .is_ok()
}
