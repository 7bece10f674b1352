//! Typed outcomes for the graph operations.
//!
//! The core never prints. Each operation reports what happened through one
//! of these types and the session layer decides how to render it.

use serde::Serialize;

/// Outcome of declaring a component's direct dependencies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclareOutcome {
    /// The declaration was stored.
    Declared,
    /// The component name was empty.
    InvalidName,
    /// The component already has a dependency entry; first declaration wins.
    AlreadyDeclared,
    /// A listed dependency already declares the component as its own
    /// dependency (1-hop mutual cycle). The whole declaration is rejected.
    CircularDependency {
        /// The dependency whose declared list names the component.
        other: String,
    },
}

/// A resolved install order plus any cyclic branches that had to be cut.
///
/// `order` is a valid topological order of the acyclic portion reached from
/// the requested component: every dependency precedes its dependents and
/// each component appears at most once. `cycles` lists the components at
/// which the expansion re-entered a branch still being expanded; those
/// branches are excluded from the order rather than recursed into.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    pub order: Vec<String>,
    pub cycles: Vec<String>,
}

/// One step of draining a resolved install order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallStep {
    /// The component was newly installed with a reference count of 1.
    Installed(String),
    /// The component was already installed; its count was bumped and the
    /// remainder of the install order was not processed.
    AlreadyInstalled { name: String, refs: i64 },
}

/// Outcome of an install request: the steps taken, in order, plus any
/// cyclic branches the resolution had to cut.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    pub steps: Vec<InstallStep>,
    pub cycles: Vec<String>,
}

/// Outcome of a remove request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The component was removed from the install table.
    Removed,
    /// The component name was empty.
    InvalidName,
    /// Nothing is installed under that name.
    NotInstalled,
    /// The component's reference count is above 1; nothing was changed.
    StillNeeded { refs: i64 },
}

/// Serializable view of the installed set, in installation order.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub installed: Vec<InstalledEntry>,
}

/// One installed component and its outstanding reference count.
#[derive(Debug, Clone, Serialize)]
pub struct InstalledEntry {
    pub name: String,
    pub refs: i64,
}
