// std imports
use std::path::PathBuf;

// third-party imports
use clap::Parser;

// local imports
use crate::settings::Engine;

// ---

/// Whole-string matching of `.` and `*` patterns.
///
/// Prints the inputs that match the pattern. Inputs are taken from the command line,
/// or read line by line from the standard input if none are given.
#[derive(Parser, Debug)]
#[clap(version)]
pub struct Opt {
    /// Configuration file path.
    #[arg(long, env = "DOTSTAR_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the inputs that do not match instead of the ones that do.
    #[arg(short = 'v', long)]
    pub invert: bool,

    /// Do not print anything, only set the exit status.
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the compiled automaton and exit.
    #[arg(long)]
    pub explain: bool,

    /// Scan the whole input even when no state is left in the frontier.
    #[arg(long)]
    pub no_early_exit: bool,

    /// Pattern, `.` matches one character and `*` matches any number of characters.
    pub pattern: String,

    /// Inputs to match.
    pub inputs: Vec<String>,
}

impl Opt {
    /// Applies command line overrides to the engine settings.
    pub fn engine(&self, mut engine: Engine) -> Engine {
        if self.no_early_exit {
            engine.early_exit = false;
        }
        engine
    }
}
