//! Read-only views over the component graph: dependency tree rendering and
//! reverse-dependency lookup.

use std::collections::HashSet;

use petgraph::visit::EdgeRef;
use petgraph::Direction;

use crate::graph::ComponentGraph;

impl ComponentGraph {
    /// Render the declared dependency tree of a component.
    ///
    /// Children follow declaration order. A name revisited on the current
    /// path is printed but not expanded again, so cyclic declarations
    /// render finitely.
    pub fn print_tree(&self, name: &str) -> String {
        let mut output = String::new();
        output.push_str(&format!("{name}\n"));

        let mut visited = HashSet::new();
        visited.insert(name.to_string());

        let deps: Vec<String> = self
            .declared_deps(name)
            .map(|d| d.to_vec())
            .unwrap_or_default();
        let count = deps.len();
        for (i, dep) in deps.iter().enumerate() {
            let is_last = i == count - 1;
            self.print_subtree(&mut output, dep, "", is_last, &mut visited);
        }

        output
    }

    fn print_subtree(
        &self,
        output: &mut String,
        name: &str,
        prefix: &str,
        is_last: bool,
        visited: &mut HashSet<String>,
    ) {
        let connector = if is_last { "└── " } else { "├── " };
        output.push_str(&format!("{prefix}{connector}{name}\n"));

        if !visited.insert(name.to_string()) {
            return;
        }

        let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
        let deps: Vec<String> = self
            .declared_deps(name)
            .map(|d| d.to_vec())
            .unwrap_or_default();
        let count = deps.len();
        for (i, dep) in deps.iter().enumerate() {
            let is_last = i == count - 1;
            self.print_subtree(output, dep, &child_prefix, is_last, visited);
        }

        visited.remove(name);
    }

    /// Components whose declared dependency list references `name`,
    /// sorted for deterministic output.
    pub fn dependents_of(&self, name: &str) -> Vec<String> {
        let Some(idx) = self.find_node(name) else {
            return Vec::new();
        };
        let mut dependents: Vec<String> = self
            .inner()
            .edges_directed(idx, Direction::Incoming)
            .map(|e| self.inner()[e.source()].name.clone())
            .collect();
        dependents.sort();
        dependents
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deps(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn tree_lists_children_in_declared_order() {
        let mut g = ComponentGraph::new();
        g.declare("app", &deps(&["lib2", "lib1"]));
        g.declare("lib1", &deps(&["base"]));
        let tree = g.print_tree("app");
        assert_eq!(
            tree,
            "app\n\
             ├── lib2\n\
             └── lib1\n\
            \u{20}   └── base\n"
        );
    }

    #[test]
    fn tree_of_unknown_component_is_just_the_name() {
        let g = ComponentGraph::new();
        assert_eq!(g.print_tree("ghost"), "ghost\n");
    }

    #[test]
    fn tree_terminates_on_cyclic_declarations() {
        let mut g = ComponentGraph::new();
        g.declare("a", &deps(&["b"]));
        g.declare("b", &deps(&["c"]));
        g.declare("c", &deps(&["a"]));
        let tree = g.print_tree("a");
        // the revisited node is shown once and not expanded again
        assert_eq!(tree.matches("└── a").count(), 1);
        assert!(tree.contains("b"));
        assert!(tree.contains("c"));
    }

    #[test]
    fn dependents_are_reverse_edges() {
        let mut g = ComponentGraph::new();
        g.declare("app", &deps(&["lib"]));
        g.declare("tool", &deps(&["lib"]));
        g.declare("lib", &deps(&[]));
        assert_eq!(g.dependents_of("lib"), vec!["app", "tool"]);
        assert!(g.dependents_of("app").is_empty());
        assert!(g.dependents_of("ghost").is_empty());
    }
}
