use std::collections::{BTreeMap, HashMap};

use crate::route::Cost;

/// Weighted directed adjacency, looked up by node name.
pub trait WeightedGraph {
    /// Whether `node` exists as a key of the graph.
    fn contains_node(&self, node: &str) -> bool;

    /// Append the outgoing edges of `node` into `buf`. The caller clears `buf`
    /// before calling. Nodes that are not keys have no outgoing edges.
    fn neighbors<'a>(&'a self, node: &str, buf: &mut Vec<(&'a str, Cost)>);
}

/// Estimated remaining distance between two nodes.
pub trait Heuristic {
    /// Estimate of the distance from `from` to `goal`, or `None` if the table
    /// has no entry for the pair. Must never overestimate (admissible) for
    /// A* to return optimal routes.
    fn estimate(&self, from: &str, goal: &str) -> Option<Cost>;
}

impl WeightedGraph for HashMap<String, HashMap<String, Cost>> {
    fn contains_node(&self, node: &str) -> bool {
        self.contains_key(node)
    }

    fn neighbors<'a>(&'a self, node: &str, buf: &mut Vec<(&'a str, Cost)>) {
        if let Some(edges) = self.get(node) {
            buf.extend(edges.iter().map(|(n, &w)| (n.as_str(), w)));
        }
    }
}

impl WeightedGraph for BTreeMap<String, BTreeMap<String, Cost>> {
    fn contains_node(&self, node: &str) -> bool {
        self.contains_key(node)
    }

    fn neighbors<'a>(&'a self, node: &str, buf: &mut Vec<(&'a str, Cost)>) {
        if let Some(edges) = self.get(node) {
            buf.extend(edges.iter().map(|(n, &w)| (n.as_str(), w)));
        }
    }
}

impl Heuristic for HashMap<String, HashMap<String, Cost>> {
    fn estimate(&self, from: &str, goal: &str) -> Option<Cost> {
        self.get(from)?.get(goal).copied()
    }
}

impl Heuristic for BTreeMap<String, BTreeMap<String, Cost>> {
    fn estimate(&self, from: &str, goal: &str) -> Option<Cost> {
        self.get(from)?.get(goal).copied()
    }
}
