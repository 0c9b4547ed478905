use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap};

use crate::SearchError;
use crate::route::{Cost, Distance, QueueEntry, Route, UNREACHABLE};
use crate::traits::WeightedGraph;

/// Best-first search shared by Dijkstra and A*.
///
/// `estimate(node)` returns the heuristic distance from `node` to `end`; it is
/// called at most once per node and only for nodes whose best distance
/// improves. Dijkstra passes a constant zero.
pub(crate) fn search<'a, G, F>(
    graph: &'a G,
    start: &'a str,
    end: &'a str,
    mut estimate: F,
) -> Result<Route, SearchError>
where
    G: WeightedGraph + ?Sized,
    F: FnMut(&'a str) -> Result<Cost, SearchError>,
{
    for node in [start, end] {
        if !graph.contains_node(node) {
            return Err(SearchError::InvalidNode(node.to_string()));
        }
    }

    if start == end {
        return Ok(Route {
            path: vec![start.to_string()],
            distance: 0,
        });
    }

    let mut best: HashMap<&'a str, Distance> = HashMap::new();
    let mut previous: HashMap<&'a str, &'a str> = HashMap::new();
    let mut estimates: HashMap<&'a str, Cost> = HashMap::new();
    best.insert(start, 0);

    let mut open: BinaryHeap<QueueEntry<'a>> = BinaryHeap::new();
    open.push(QueueEntry {
        priority: 0,
        distance: 0,
        node: start,
    });

    let mut nbuf: Vec<(&'a str, Cost)> = Vec::new();

    while let Some(current) = open.pop() {
        if current.node == end {
            break;
        }

        // Skip stale entries.
        let known = best.get(current.node).copied().unwrap_or(UNREACHABLE);
        if current.distance > known {
            continue;
        }

        nbuf.clear();
        graph.neighbors(current.node, &mut nbuf);

        for &(next, weight) in nbuf.iter() {
            let tentative = current.distance.saturating_add(Distance::from(weight));
            if tentative >= best.get(next).copied().unwrap_or(UNREACHABLE) {
                continue;
            }
            best.insert(next, tentative);
            previous.insert(next, current.node);

            let h = match estimates.entry(next) {
                Entry::Occupied(e) => *e.get(),
                Entry::Vacant(e) => *e.insert(estimate(next)?),
            };
            open.push(QueueEntry {
                priority: tentative.saturating_add(Distance::from(h)),
                distance: tentative,
                node: next,
            });
        }
    }

    if !previous.contains_key(end) {
        return Ok(Route::unreachable());
    }

    // Reconstruct path.
    let mut path = vec![end.to_string()];
    let mut node = end;
    while let Some(&prev) = previous.get(node) {
        path.push(prev.to_string());
        node = prev;
    }
    path.reverse();

    Ok(Route {
        path,
        distance: best[end],
    })
}
