//! Component dependency graph and install state.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use tracing::debug;

use crate::outcome::{
    DeclareOutcome, InstallReport, InstallStep, InstalledEntry, RemoveOutcome, Resolution,
    Snapshot,
};

/// A named component tracked by the graph.
///
/// A node exists once the name has been seen anywhere: as a declaration,
/// as a dependency target of a successful declaration, or through
/// auto-registration at install time.
#[derive(Debug, Clone)]
pub struct Component {
    pub name: String,
    /// Declared direct dependencies, in declaration order, stored verbatim
    /// (duplicates and self-references included). `Some` iff the component
    /// has a dependency entry; the entry is never deleted or overwritten.
    deps: Option<Vec<String>>,
    /// Outstanding install requests. `Some` iff the component is in the
    /// install table. The count can legally reach zero or below through
    /// the no-floor decrement in [`ComponentGraph::remove`]; only an
    /// explicit remove deletes the entry.
    refs: Option<i64>,
}

/// The dependency graph plus reference-counted install state.
///
/// Component names are case-sensitive everywhere except the 1-hop cycle
/// check in [`declare`](Self::declare), which matches ignoring ASCII case.
pub struct ComponentGraph {
    graph: DiGraph<Component, ()>,
    /// Lookup from component name to node index.
    index: HashMap<String, NodeIndex>,
    /// Install-table insertion order, for deterministic listing.
    install_order: Vec<NodeIndex>,
}

impl ComponentGraph {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            index: HashMap::new(),
            install_order: Vec::new(),
        }
    }

    /// Add or retrieve the node for a name.
    fn intern(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.index.get(name) {
            return idx;
        }
        let idx = self.graph.add_node(Component {
            name: name.to_string(),
            deps: None,
            refs: None,
        });
        self.index.insert(name.to_string(), idx);
        idx
    }

    fn find(&self, name: &str) -> Option<NodeIndex> {
        self.index.get(name).copied()
    }

    /// Add a dependency edge from `from` to `to`, skipping duplicates.
    fn add_edge(&mut self, from: NodeIndex, to: NodeIndex) {
        if !self.graph.edges(from).any(|e| e.target() == to) {
            self.graph.add_edge(from, to, ());
        }
    }

    /// The declared direct-dependency list of a component, if it has one.
    pub fn declared_deps(&self, name: &str) -> Option<&[String]> {
        let idx = self.find(name)?;
        self.graph[idx].deps.as_deref()
    }

    /// Whether the component is currently in the install table.
    pub fn is_installed(&self, name: &str) -> bool {
        self.find(name)
            .is_some_and(|idx| self.graph[idx].refs.is_some())
    }

    /// Current reference count of an installed component.
    pub fn refs(&self, name: &str) -> Option<i64> {
        self.graph[self.find(name)?].refs
    }

    /// Declare a component's direct dependencies.
    ///
    /// The first declaration wins: redeclaring an existing entry (including
    /// one auto-registered during install) is ignored. A declaration is
    /// rejected as circular when any listed dependency already declares this
    /// component as one of its own dependencies; deeper cycles are not
    /// detected here and are cut during [`resolve`](Self::resolve) instead.
    pub fn declare(&mut self, name: &str, deps: &[String]) -> DeclareOutcome {
        if name.is_empty() {
            return DeclareOutcome::InvalidName;
        }
        if self.declared_deps(name).is_some() {
            return DeclareOutcome::AlreadyDeclared;
        }
        for dep in deps {
            if let Some(list) = self.declared_deps(dep) {
                if list.iter().any(|c| c.eq_ignore_ascii_case(name)) {
                    return DeclareOutcome::CircularDependency { other: dep.clone() };
                }
            }
        }

        let idx = self.intern(name);
        self.graph[idx].deps = Some(deps.to_vec());
        for dep in deps {
            let to = self.intern(dep);
            self.add_edge(idx, to);
        }
        debug!(component = name, deps = deps.len(), "declared dependencies");
        DeclareOutcome::Declared
    }

    /// Resolve the install order for a component: dependencies first, each
    /// component at most once, cyclic branches cut and reported.
    pub fn resolve(&self, name: &str) -> Resolution {
        let mut resolution = Resolution::default();
        let mut expanding = Vec::new();
        self.expand(name, &mut expanding, &mut resolution);
        debug!(
            component = name,
            order = resolution.order.len(),
            cycles = resolution.cycles.len(),
            "resolved install order"
        );
        resolution
    }

    /// Depth-first expansion of declared dependencies.
    ///
    /// `expanding` holds the names currently being expanded on this call
    /// path; re-entering one is a cycle deeper than the declaration-time
    /// check can see, so the branch is recorded and skipped rather than
    /// recursed into.
    fn expand(&self, name: &str, expanding: &mut Vec<String>, out: &mut Resolution) {
        if expanding.iter().any(|n| n == name) {
            if !out.cycles.iter().any(|n| n == name) {
                out.cycles.push(name.to_string());
            }
            return;
        }
        expanding.push(name.to_string());
        if let Some(deps) = self.declared_deps(name) {
            for dep in deps {
                self.expand(dep, expanding, out);
            }
        }
        expanding.pop();
        if !out.order.iter().any(|n| n == name) {
            out.order.push(name.to_string());
        }
    }

    /// Install a component and its transitive dependencies.
    ///
    /// The resolved order is drained front to back. The first component
    /// found already installed has its count bumped and stops the drain:
    /// a satisfied link means the rest of that request's queue is not
    /// processed. Newly installed components get a count of 1 and a
    /// dependency entry if they lack one, so the graph stays the source of
    /// truth for every component ever installed.
    pub fn install(&mut self, name: &str) -> InstallReport {
        let resolution = self.resolve(name);
        let mut steps = Vec::new();

        for component in resolution.order {
            if let Some(idx) = self.find(&component) {
                if let Some(refs) = self.graph[idx].refs {
                    self.graph[idx].refs = Some(refs + 1);
                    steps.push(InstallStep::AlreadyInstalled {
                        name: component,
                        refs: refs + 1,
                    });
                    break;
                }
            }
            let idx = self.intern(&component);
            self.graph[idx].refs = Some(1);
            self.install_order.push(idx);
            if self.graph[idx].deps.is_none() {
                self.graph[idx].deps = Some(Vec::new());
            }
            debug!(component = %self.graph[idx].name, "installed");
            steps.push(InstallStep::Installed(component));
        }

        InstallReport {
            steps,
            cycles: resolution.cycles,
        }
    }

    /// Remove an installed component.
    ///
    /// A count above 1 means the component is still needed and nothing
    /// changes. At exactly 1, each declared direct dependency's count is
    /// decremented (no floor, no cascade: a dependency driven to zero stays
    /// in the table until removed itself) and the entry is deleted.
    ///
    /// The decrement only runs when more than one component in total has a
    /// dependency entry. That global guard is inherited behavior, kept
    /// as-is; a dependency missing from the install table is skipped.
    pub fn remove(&mut self, name: &str) -> RemoveOutcome {
        if name.is_empty() {
            return RemoveOutcome::InvalidName;
        }
        if self.install_order.is_empty() {
            return RemoveOutcome::NotInstalled;
        }
        let Some(idx) = self.find(name) else {
            return RemoveOutcome::NotInstalled;
        };
        let Some(refs) = self.graph[idx].refs else {
            return RemoveOutcome::NotInstalled;
        };
        if refs > 1 {
            return RemoveOutcome::StillNeeded { refs };
        }

        let registered_total = self
            .graph
            .node_weights()
            .filter(|c| c.deps.is_some())
            .count();
        if self.graph[idx].deps.is_some() && registered_total > 1 {
            let deps = self.graph[idx].deps.clone().unwrap_or_default();
            for dep in &deps {
                if let Some(dep_idx) = self.find(dep) {
                    if let Some(dep_refs) = self.graph[dep_idx].refs {
                        self.graph[dep_idx].refs = Some(dep_refs - 1);
                    }
                }
            }
        }

        self.graph[idx].refs = None;
        self.install_order.retain(|&i| i != idx);
        debug!(component = name, "removed");
        RemoveOutcome::Removed
    }

    /// Iterate the install table in installation order.
    pub fn installed(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        self.install_order.iter().filter_map(|&idx| {
            let component = &self.graph[idx];
            component.refs.map(|refs| (component.name.as_str(), refs))
        })
    }

    /// Number of installed components.
    pub fn installed_count(&self) -> usize {
        self.install_order.len()
    }

    /// Serializable view of the installed set.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            installed: self
                .installed()
                .map(|(name, refs)| InstalledEntry {
                    name: name.to_string(),
                    refs,
                })
                .collect(),
        }
    }

    pub(crate) fn inner(&self) -> &DiGraph<Component, ()> {
        &self.graph
    }

    pub(crate) fn find_node(&self, name: &str) -> Option<NodeIndex> {
        self.find(name)
    }
}

impl Default for ComponentGraph {
    fn default() -> Self {
        Self::new()
    }
}
