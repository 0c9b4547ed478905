use std::fmt;

/// Edge weight or heuristic estimate.
pub type Cost = u32;

/// Accumulated path length. Wider than [`Cost`] so that sums of edge weights
/// never reach the sentinel.
pub type Distance = u64;

/// Sentinel distance meaning "unreachable".
pub const UNREACHABLE: Distance = Distance::MAX;

/// Result of a route search: the visited nodes from start to end (inclusive)
/// and the total distance.
///
/// An unreachable end is reported as an empty path with distance
/// [`UNREACHABLE`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub path: Vec<String>,
    pub distance: Distance,
}

impl Route {
    /// The result for an end node that cannot be reached.
    pub fn unreachable() -> Self {
        Self {
            path: Vec::new(),
            distance: UNREACHABLE,
        }
    }

    /// Whether a path to the end node was found.
    pub fn is_reachable(&self) -> bool {
        self.distance != UNREACHABLE
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_reachable() {
            return f.write_str("unreachable");
        }
        write!(f, "{} ({})", self.path.join(" -> "), self.distance)
    }
}

// ---------------------------------------------------------------------------
// Priority-queue entry
// ---------------------------------------------------------------------------

/// Open-list entry, ordered by `(priority, distance, node)` for use in
/// `BinaryHeap`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct QueueEntry<'a> {
    pub(crate) priority: Distance,
    pub(crate) distance: Distance,
    pub(crate) node: &'a str,
}

impl Ord for QueueEntry<'_> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest priority first.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.distance.cmp(&self.distance))
            .then_with(|| other.node.cmp(self.node))
    }
}

impl PartialOrd for QueueEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
