//! Handler for `gantry shell`.

use std::io::{self, BufRead, Write};

use gantry_ops::Session;
use gantry_util::errors::GantryError;
use miette::Result;

/// Interactive prompt over a single session. The prompt goes to stderr so
/// piped stdout stays a clean transcript. `END` or EOF exits.
pub fn exec() -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdout.lock());

    loop {
        eprint!("gantry> ");
        io::stderr().flush().map_err(GantryError::Io)?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).map_err(GantryError::Io)? == 0 {
            break;
        }
        if !session.execute_line(&line)? {
            break;
        }
    }

    Ok(())
}
