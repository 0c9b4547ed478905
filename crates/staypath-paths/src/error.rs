use std::fmt;

/// Errors reported by a route search.
///
/// An unreachable end node is not an error; see [`Route::unreachable`](crate::Route::unreachable).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The start or end node is not a key of the graph.
    InvalidNode(String),
    /// A* needed an estimate from `node` to `goal` that the table lacks.
    MissingHeuristic { node: String, goal: String },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNode(node) => write!(f, "node not found: \u{201c}{node}\u{201d}"),
            Self::MissingHeuristic { node, goal } => write!(
                f,
                "no heuristic estimate from \u{201c}{node}\u{201d} to \u{201c}{goal}\u{201d}"
            ),
        }
    }
}

impl std::error::Error for SearchError {}
