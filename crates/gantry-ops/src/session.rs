//! A command session over a component graph.
//!
//! The session owns the graph and a writer. Executing a command calls the
//! core operation and renders its typed outcome as report lines; the core
//! itself never prints. All model-level failures are reported and ignored,
//! so a session never aborts mid-script — only writer I/O can fail.

use std::io::Write;

use gantry_core::{ComponentGraph, DeclareOutcome, InstallStep, RemoveOutcome};
use gantry_util::errors::{GantryError, GantryResult};
use tracing::debug;

use crate::command::{self, Command};

pub struct Session<W: Write> {
    graph: ComponentGraph,
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(out: W) -> Self {
        Self {
            graph: ComponentGraph::new(),
            out,
        }
    }

    /// The graph state accumulated so far.
    pub fn graph(&self) -> &ComponentGraph {
        &self.graph
    }

    /// Parse and execute one script line.
    ///
    /// Returns `Ok(false)` once the script asks to end; unparseable lines
    /// are reported and skipped.
    pub fn execute_line(&mut self, line: &str) -> GantryResult<bool> {
        match command::parse(line) {
            Ok(Some(cmd)) => self.execute(cmd),
            Ok(None) => Ok(true),
            Err(err) => {
                self.report(&format!("Invalid command: {err}. Ignoring."))?;
                Ok(true)
            }
        }
    }

    /// Execute a parsed command. Returns `Ok(false)` for [`Command::End`].
    pub fn execute(&mut self, cmd: Command) -> GantryResult<bool> {
        debug!(?cmd, "executing command");
        match cmd {
            Command::Depend { name, deps } => self.depend(&name, &deps)?,
            Command::Install { name } => self.install(&name)?,
            Command::Remove { name } => self.remove(&name)?,
            Command::List => self.list()?,
            Command::Tree { name } => {
                let tree = self.graph.print_tree(&name);
                self.write(&tree)?;
            }
            Command::Uses { name } => self.uses(&name)?,
            Command::End => return Ok(false),
        }
        Ok(true)
    }

    fn depend(&mut self, name: &str, deps: &[String]) -> GantryResult<()> {
        match self.graph.declare(name, deps) {
            DeclareOutcome::Declared => Ok(()),
            DeclareOutcome::InvalidName => {
                self.report("Invalid dependency declaration. Ignoring command.")
            }
            DeclareOutcome::AlreadyDeclared => {
                self.report(&format!("{name} is already declared. Ignoring command."))
            }
            DeclareOutcome::CircularDependency { other } => self.report(&format!(
                "Circular dependency: {other} already depends on {name}. Ignoring command."
            )),
        }
    }

    fn install(&mut self, name: &str) -> GantryResult<()> {
        let report = self.graph.install(name);
        if !report.cycles.is_empty() {
            self.report(&format!(
                "Cannot fully resolve {name}: cyclic dependency involving {}.",
                report.cycles.join(", ")
            ))?;
        }
        for step in report.steps {
            match step {
                InstallStep::Installed(component) => {
                    self.report(&format!("Installing {component}."))?;
                }
                InstallStep::AlreadyInstalled { name, .. } => {
                    self.report(&format!("{name} is already installed."))?;
                }
            }
        }
        Ok(())
    }

    fn remove(&mut self, name: &str) -> GantryResult<()> {
        match self.graph.remove(name) {
            RemoveOutcome::Removed => self.report(&format!("Removing {name}.")),
            RemoveOutcome::InvalidName => {
                self.report("Invalid component name. Ignoring command.")
            }
            RemoveOutcome::NotInstalled => self.report(&format!("{name} is not installed.")),
            RemoveOutcome::StillNeeded { .. } => {
                self.report(&format!("{name} is still needed."))
            }
        }
    }

    fn list(&mut self) -> GantryResult<()> {
        let lines: Vec<String> = self
            .graph
            .installed()
            .map(|(name, refs)| format!("{name} ({refs})"))
            .collect();
        for line in lines {
            self.report(&line)?;
        }
        Ok(())
    }

    fn uses(&mut self, name: &str) -> GantryResult<()> {
        let dependents = self.graph.dependents_of(name);
        if dependents.is_empty() {
            self.report(&format!("{name} is not used by any component."))
        } else {
            self.report(&format!("{name} is used by: {}.", dependents.join(", ")))
        }
    }

    fn report(&mut self, line: &str) -> GantryResult<()> {
        writeln!(self.out, "{line}").map_err(|e| GantryError::Io(e).into())
    }

    fn write(&mut self, text: &str) -> GantryResult<()> {
        write!(self.out, "{text}").map_err(|e| GantryError::Io(e).into())
    }
}
