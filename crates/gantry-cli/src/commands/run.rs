//! Handler for `gantry run`.

use std::io::{self, BufRead};
use std::path::Path;

use gantry_ops::Session;
use gantry_util::errors::GantryError;
use miette::Result;

pub fn exec(file: Option<&Path>, format: &str, verbose: bool) -> Result<()> {
    if format != "text" && format != "json" {
        return Err(GantryError::Generic {
            message: format!("Unknown output format '{format}' (expected text or json)"),
        }
        .into());
    }

    let stdout = io::stdout();
    let mut session = Session::new(stdout.lock());
    let mut executed = 0usize;

    match file {
        Some(path) => {
            let content =
                std::fs::read_to_string(path).map_err(|e| GantryError::Script {
                    message: format!("Failed to read {}: {e}", path.display()),
                })?;
            for line in content.lines() {
                executed += 1;
                if !session.execute_line(line)? {
                    break;
                }
            }
        }
        None => {
            for line in io::stdin().lock().lines() {
                let line = line.map_err(GantryError::Io)?;
                executed += 1;
                if !session.execute_line(&line)? {
                    break;
                }
            }
        }
    }

    if format == "json" {
        let snapshot = session.graph().snapshot();
        let json = serde_json::to_string_pretty(&snapshot).map_err(|e| {
            GantryError::Generic {
                message: format!("Failed to serialize snapshot: {e}"),
            }
        })?;
        println!("{json}");
    }

    if verbose {
        gantry_util::progress::status(
            "Finished",
            &format!(
                "{executed} lines, {} components installed",
                session.graph().installed_count()
            ),
        );
    }

    Ok(())
}
