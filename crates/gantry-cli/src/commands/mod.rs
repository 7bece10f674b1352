//! Command dispatch and handler modules.

mod run;
mod shell;

use miette::Result;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Run { file, format } => run::exec(file.as_deref(), &format, cli.verbose),
        Command::Shell => shell::exec(),
    }
}
