//! A directory of places and the queries the demo runs against it.

use staypath_paths::{Graph, HeuristicTable, Route, SearchError, route_search};
use staypath_sort::quick_sort_by;
use staypath_text::Pattern;

use crate::place::{Address, Place, PlaceKind};

/// All known places; the route graph is derived from their neighbour maps.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    places: Vec<Place>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// The six built-in points of interest with road distances and
    /// straight-line estimates between them.
    pub fn points_of_interest() -> Self {
        let poi = |name: &str| Place::new(name, PlaceKind::Poi);
        Self {
            places: vec![
                poi("Park")
                    .with_neighbours([("Train Station", 42), ("Library", 87)])
                    .with_heuristics([
                        ("Train Station", 40),
                        ("Library", 80),
                        ("School", 90),
                        ("Museum", 50),
                        ("Cinema", 90),
                    ]),
                poi("Train Station")
                    .with_neighbours([("Park", 42), ("Library", 94), ("School", 51), ("Museum", 36)])
                    .with_heuristics([
                        ("Park", 40),
                        ("Library", 60),
                        ("School", 50),
                        ("Museum", 35),
                        ("Cinema", 80),
                    ]),
                poi("Library")
                    .with_neighbours([("Park", 87), ("Train Station", 94), ("School", 28), ("Cinema", 85)])
                    .with_heuristics([
                        ("Park", 80),
                        ("Train Station", 60),
                        ("School", 20),
                        ("Museum", 70),
                        ("Cinema", 70),
                    ]),
                poi("School")
                    .with_neighbours([("Train Station", 51), ("Library", 28), ("Cinema", 39)])
                    .with_heuristics([
                        ("Park", 90),
                        ("Train Station", 50),
                        ("Library", 20),
                        ("Museum", 60),
                        ("Cinema", 40),
                    ]),
                poi("Museum")
                    .with_neighbours([("Train Station", 36), ("Cinema", 99)])
                    .with_heuristics([
                        ("Park", 50),
                        ("Train Station", 35),
                        ("Library", 70),
                        ("School", 60),
                        ("Cinema", 60),
                    ]),
                poi("Cinema")
                    .with_neighbours([("Library", 85), ("School", 39), ("Museum", 99)])
                    .with_heuristics([
                        ("Park", 90),
                        ("Train Station", 80),
                        ("Library", 70),
                        ("School", 40),
                        ("Museum", 60),
                    ]),
            ],
        }
    }

    /// Points of interest plus a few places to stay. "Old Mill B&B" has no
    /// road connections.
    pub fn sample() -> Self {
        let mut dir = Self::points_of_interest();
        dir.add(
            Place::new("Riverside Inn", PlaceKind::Hotel)
                .with_address(Address::new(12, "Mill Lane", "RV1 2AB"))
                .with_capacity(20)
                .with_neighbours([("Park", 10)])
                .with_heuristics([
                    ("Park", 8),
                    ("Train Station", 40),
                    ("Library", 80),
                    ("School", 90),
                    ("Museum", 50),
                    ("Cinema", 90),
                ]),
        );
        dir.add(
            Place::new("Station Lodge", PlaceKind::Hostel)
                .with_address(Address::new(1, "Station Approach", "ST4 9QT"))
                .with_capacity(35)
                .with_neighbours([("Train Station", 5)])
                .with_heuristics([
                    ("Park", 40),
                    ("Train Station", 4),
                    ("Library", 60),
                    ("School", 50),
                    ("Museum", 35),
                    ("Cinema", 80),
                    ("Riverside Inn", 45),
                ]),
        );
        dir.add(
            Place::new("Old Mill B&B", PlaceKind::Bnb)
                .with_address(Address::new(7, "Mill Lane", "RV1 3CD"))
                .with_capacity(4),
        );
        dir
    }

    pub fn places(&self) -> &[Place] {
        &self.places
    }

    pub fn get(&self, name: &str) -> Option<&Place> {
        self.places.iter().find(|p| p.name == name)
    }

    /// Add `place`, mirroring its neighbour distances and estimates onto the
    /// places it names so roads are travelled in both directions.
    pub fn add(&mut self, place: Place) {
        for existing in &mut self.places {
            if let Some(&d) = place.neighbours.get(&existing.name) {
                existing.neighbours.insert(place.name.clone(), d);
            }
            if let Some(&h) = place.heuristics.get(&existing.name) {
                existing.heuristics.insert(place.name.clone(), h);
            }
        }
        log::debug!("added {} ({})", place.name, place.kind);
        self.places.push(place);
    }

    /// Adjacency of every place, keyed by name.
    pub fn graph(&self) -> Graph {
        self.places
            .iter()
            .map(|p| {
                let edges = p.neighbours.iter().map(|(n, &d)| (n.clone(), d)).collect();
                (p.name.clone(), edges)
            })
            .collect()
    }

    /// Estimates of every place that has any.
    pub fn heuristics(&self) -> HeuristicTable {
        self.places
            .iter()
            .filter(|p| !p.heuristics.is_empty())
            .map(|p| {
                let estimates = p.heuristics.iter().map(|(n, &h)| (n.clone(), h)).collect();
                (p.name.clone(), estimates)
            })
            .collect()
    }

    /// Shortest route between two places, with A* when `use_heuristics` is set.
    pub fn route(&self, from: &str, to: &str, use_heuristics: bool) -> Result<Route, SearchError> {
        let graph = self.graph();
        let heuristics = use_heuristics.then(|| self.heuristics());
        let route = route_search(&graph, from, to, heuristics.as_ref())?;
        log::debug!("route {from} -> {to}: {route}");
        Ok(route)
    }

    /// Places whose name, type or address contains `query`, ordered by name.
    pub fn search(&self, query: &str) -> Vec<&Place> {
        let pattern = Pattern::new(query);
        let found: Vec<&Place> = self.places.iter().filter(|p| pattern.matches(*p)).collect();
        by_name(&found)
    }

    /// Every place ordered by name.
    pub fn listing(&self) -> Vec<&Place> {
        let all: Vec<&Place> = self.places.iter().collect();
        by_name(&all)
    }
}

fn by_name<'a>(places: &[&'a Place]) -> Vec<&'a Place> {
    quick_sort_by(places, |a, b| a.name.cmp(&b.name))
}
