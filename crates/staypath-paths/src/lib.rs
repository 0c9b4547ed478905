//! Shortest-path search over named, weighted graphs.
//!
//! Graphs are plain nested maps (`node -> neighbour -> weight`) keyed by
//! string identifiers. Two searches share one priority-queue engine:
//!
//! - **Dijkstra** ([`dijkstra`]), priority = accumulated distance
//! - **A\*** ([`astar`]), priority = accumulated distance + heuristic estimate
//!
//! [`route_search`] picks between them depending on whether a
//! [`HeuristicTable`] is supplied.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`WeightedGraph`] | Dijkstra, A* |
//! | [`Heuristic`] | A* |
//!
//! Both traits are implemented for `HashMap<String, HashMap<String, Cost>>`
//! and `BTreeMap<String, BTreeMap<String, Cost>>`.

mod astar;
mod dijkstra;
mod error;
mod route;
mod search;
mod traits;

use std::collections::HashMap;

pub use astar::{astar, route_search};
pub use dijkstra::dijkstra;
pub use error::SearchError;
pub use route::{Cost, Distance, Route, UNREACHABLE};
pub use traits::{Heuristic, WeightedGraph};

/// Adjacency map: node -> neighbour -> non-negative edge weight.
pub type Graph = HashMap<String, HashMap<String, Cost>>;

/// Heuristic estimates: node -> goal -> estimated remaining distance.
pub type HeuristicTable = HashMap<String, HashMap<String, Cost>>;
