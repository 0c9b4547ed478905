use crate::SearchError;
use crate::route::Route;
use crate::search::search;
use crate::traits::WeightedGraph;

/// Compute the shortest route from `start` to `end` with Dijkstra's algorithm.
///
/// Both endpoints must be keys of `graph`, otherwise
/// [`SearchError::InvalidNode`] is returned. Edge weights are non-negative by
/// construction. An unreachable `end` yields [`Route::unreachable`].
pub fn dijkstra<G>(graph: &G, start: &str, end: &str) -> Result<Route, SearchError>
where
    G: WeightedGraph + ?Sized,
{
    search(graph, start, end, |_| Ok(0))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::Graph;
    use crate::route::{Cost, UNREACHABLE};
    use crate::testutil::{brute_force, graph, path_cost, random_graph};

    fn triangle() -> Graph {
        graph(&[
            ("A", &[("B", 5), ("D", 3)]),
            ("B", &[("A", 5), ("D", 1)]),
            ("D", &[("A", 3), ("B", 1)]),
        ])
    }

    #[test]
    fn shortest_goes_through_middle() {
        let r = dijkstra(&triangle(), "A", "B").unwrap();
        assert_eq!(r.path, vec!["A", "D", "B"]);
        assert_eq!(r.distance, 4);
    }

    #[test]
    fn same_node() {
        let r = dijkstra(&triangle(), "D", "D").unwrap();
        assert_eq!(r.path, vec!["D"]);
        assert_eq!(r.distance, 0);
    }

    #[test]
    fn disconnected() {
        let g = graph(&[("A", &[("B", 1)]), ("B", &[("A", 1)]), ("C", &[])]);
        let r = dijkstra(&g, "A", "C").unwrap();
        assert!(r.path.is_empty());
        assert_eq!(r.distance, UNREACHABLE);
        assert_eq!(r, Route::unreachable());
    }

    #[test]
    fn unknown_endpoints() {
        let g = triangle();
        assert_eq!(
            dijkstra(&g, "Z", "A"),
            Err(SearchError::InvalidNode("Z".into()))
        );
        assert_eq!(
            dijkstra(&g, "A", "Z"),
            Err(SearchError::InvalidNode("Z".into()))
        );
    }

    #[test]
    fn neighbour_without_key_is_dead_end() {
        // "X" is only referenced as a neighbour.
        let g = graph(&[
            ("A", &[("X", 1), ("B", 10)]),
            ("B", &[]),
        ]);
        let r = dijkstra(&g, "A", "B").unwrap();
        assert_eq!(r.path, vec!["A", "B"]);
        assert_eq!(r.distance, 10);
    }

    #[test]
    fn directed_edges_are_not_symmetric() {
        let g = graph(&[("A", &[("B", 1)]), ("B", &[])]);
        assert_eq!(dijkstra(&g, "A", "B").unwrap().distance, 1);
        assert!(!dijkstra(&g, "B", "A").unwrap().is_reachable());
    }

    #[test]
    fn zero_weight_edges() {
        let g = graph(&[
            ("A", &[("B", 0), ("C", 2)]),
            ("B", &[("C", 0)]),
            ("C", &[]),
        ]);
        let r = dijkstra(&g, "A", "C").unwrap();
        assert_eq!(r.path, vec!["A", "B", "C"]);
        assert_eq!(r.distance, 0);
    }

    #[test]
    fn stale_entries_are_skipped() {
        // C is first queued at 10 via A, then improved to 3 via B.
        let g = graph(&[
            ("A", &[("B", 1), ("C", 10)]),
            ("B", &[("C", 2)]),
            ("C", &[("E", 1)]),
            ("E", &[]),
        ]);
        let r = dijkstra(&g, "A", "E").unwrap();
        assert_eq!(r.path, vec!["A", "B", "C", "E"]);
        assert_eq!(r.distance, 4);
    }

    #[test]
    fn totals_beyond_edge_weight_range() {
        let g = graph(&[
            ("A", &[("B", 3_000_000_000)]),
            ("B", &[("C", 3_000_000_000)]),
            ("C", &[]),
        ]);
        let r = dijkstra(&g, "A", "C").unwrap();
        assert!(r.is_reachable());
        assert_eq!(r.path, vec!["A", "B", "C"]);
        assert_eq!(r.distance, 6_000_000_000);
    }

    #[test]
    fn btree_graph() {
        let g: BTreeMap<String, BTreeMap<String, Cost>> = triangle()
            .into_iter()
            .map(|(k, v)| (k, v.into_iter().collect()))
            .collect();
        let r = dijkstra(&g, "A", "B").unwrap();
        assert_eq!(r.distance, 4);
    }

    #[test]
    fn matches_brute_force_on_random_graphs() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let n = rng.random_range(2..7usize);
            let g = random_graph(&mut rng, n);
            let from = "n0".to_string();
            let to = format!("n{}", n - 1);
            let r = dijkstra(&g, &from, &to).unwrap();
            assert_eq!(r.distance, brute_force(&g, &from, &to));
            if r.is_reachable() {
                assert_eq!(r.path.first(), Some(&from));
                assert_eq!(r.path.last(), Some(&to));
                assert_eq!(path_cost(&g, &r.path), r.distance);
            }
        }
    }
}
