use crate::route::Route;
use crate::search::search;
use crate::traits::{Heuristic, WeightedGraph};
use crate::{Graph, HeuristicTable, SearchError};

/// Compute the shortest route from `start` to `end` using A*.
///
/// The priority of a candidate node is its accumulated distance plus
/// `heuristic.estimate(candidate, end)`. The estimate for `end` itself is
/// always 0. A candidate without an estimate aborts the search with
/// [`SearchError::MissingHeuristic`]; it is never treated as 0.
///
/// The route is optimal as long as the heuristic is admissible.
pub fn astar<G, H>(graph: &G, start: &str, end: &str, heuristic: &H) -> Result<Route, SearchError>
where
    G: WeightedGraph + ?Sized,
    H: Heuristic + ?Sized,
{
    search(graph, start, end, |node| {
        if node == end {
            return Ok(0);
        }
        heuristic
            .estimate(node, end)
            .ok_or_else(|| SearchError::MissingHeuristic {
                node: node.to_string(),
                goal: end.to_string(),
            })
    })
}

/// Find the shortest route between two places.
///
/// Runs Dijkstra when `heuristics` is `None` and A* otherwise.
pub fn route_search(
    graph: &Graph,
    start: &str,
    end: &str,
    heuristics: Option<&HeuristicTable>,
) -> Result<Route, SearchError> {
    match heuristics {
        Some(table) => astar(graph, start, end, table),
        None => crate::dijkstra(graph, start, end),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::route::{Cost, Distance, UNREACHABLE};
    use crate::testutil::{graph, path_cost, random_graph};

    fn triangle() -> Graph {
        graph(&[
            ("A", &[("B", 5), ("D", 3)]),
            ("B", &[("A", 5), ("D", 1)]),
            ("D", &[("A", 3), ("B", 1)]),
        ])
    }

    /// Exact remaining distance from every node to `goal`, scaled by `num / den`.
    fn scaled_exact(g: &Graph, goal: &str, num: Distance, den: Distance) -> HeuristicTable {
        let mut table = HeuristicTable::new();
        for node in g.keys() {
            let d = crate::dijkstra(g, node, goal).unwrap().distance;
            // Unreachable nodes never lead to the goal; any estimate is admissible.
            let h = if d == UNREACHABLE {
                0
            } else {
                Cost::try_from(d * num / den).unwrap()
            };
            table
                .entry(node.clone())
                .or_default()
                .insert(goal.to_string(), h);
        }
        table
    }

    #[test]
    fn astar_agrees_with_dijkstra() {
        let g = triangle();
        let h: HeuristicTable = HashMap::from([
            ("D".to_string(), HashMap::from([("B".to_string(), 1)])),
            ("A".to_string(), HashMap::from([("B".to_string(), 4)])),
        ]);
        let r = route_search(&g, "A", "B", Some(&h)).unwrap();
        assert_eq!(r.path, vec!["A", "D", "B"]);
        assert_eq!(r.distance, 4);
        assert_eq!(r, route_search(&g, "A", "B", None).unwrap());
    }

    #[test]
    fn missing_heuristic_is_an_error() {
        let g = triangle();
        let h: HeuristicTable =
            HashMap::from([("A".to_string(), HashMap::from([("B".to_string(), 4)]))]);
        assert_eq!(
            astar(&g, "A", "B", &h),
            Err(SearchError::MissingHeuristic {
                node: "D".into(),
                goal: "B".into(),
            })
        );
    }

    #[test]
    fn goal_estimate_is_zero_without_entry() {
        // Empty table: the only estimate needed is for the goal itself.
        let g = graph(&[("A", &[("B", 2)]), ("B", &[])]);
        let h = HeuristicTable::new();
        let r = astar(&g, "A", "B", &h).unwrap();
        assert_eq!(r.path, vec!["A", "B"]);
        assert_eq!(r.distance, 2);
    }

    #[test]
    fn same_node_ignores_table() {
        let g = triangle();
        let r = astar(&g, "A", "A", &HeuristicTable::new()).unwrap();
        assert_eq!(r.path, vec!["A"]);
        assert_eq!(r.distance, 0);
    }

    #[test]
    fn unreachable_with_heuristics() {
        let g = graph(&[("A", &[("B", 1)]), ("B", &[("A", 1)]), ("C", &[])]);
        let h: HeuristicTable = HashMap::from([
            ("A".to_string(), HashMap::from([("C".to_string(), 0)])),
            ("B".to_string(), HashMap::from([("C".to_string(), 0)])),
        ]);
        let r = route_search(&g, "A", "C", Some(&h)).unwrap();
        assert_eq!(r, Route::unreachable());
    }

    #[test]
    fn invalid_node() {
        let g = triangle();
        assert_eq!(
            route_search(&g, "A", "Q", Some(&HeuristicTable::new())),
            Err(SearchError::InvalidNode("Q".into()))
        );
    }

    #[test]
    fn heuristic_steers_towards_goal() {
        // Two equal-cost branches; the heuristic prefers the lower one.
        let g = graph(&[
            ("S", &[("U", 1), ("L", 1)]),
            ("U", &[("G", 5)]),
            ("L", &[("G", 5)]),
            ("G", &[]),
        ]);
        let h: HeuristicTable = HashMap::from([
            ("U".to_string(), HashMap::from([("G".to_string(), 5)])),
            ("L".to_string(), HashMap::from([("G".to_string(), 5)])),
        ]);
        let r = astar(&g, "S", "G", &h).unwrap();
        assert_eq!(r.distance, 6);
        assert_eq!(r.path.len(), 3);
        assert_eq!(path_cost(&g, &r.path), 6);
    }

    #[test]
    fn admissible_heuristics_match_dijkstra_on_random_graphs() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let n = rng.random_range(2..8usize);
            let g = random_graph(&mut rng, n);
            let from = "n0";
            let to = format!("n{}", n - 1);
            let expected = crate::dijkstra(&g, from, &to).unwrap();
            for (num, den) in [(0, 1), (1, 2), (1, 1)] {
                let h = scaled_exact(&g, &to, num, den);
                let r = astar(&g, from, &to, &h).unwrap();
                assert_eq!(r.distance, expected.distance);
                if r.is_reachable() {
                    assert_eq!(path_cost(&g, &r.path), r.distance);
                }
            }
        }
    }
}
