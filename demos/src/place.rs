//! Place records: hotels, hostels, B&Bs and points of interest.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use staypath_paths::Cost;
use staypath_text::Searchable;

/// Category of a place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceKind {
    Hotel,
    Hostel,
    Bnb,
    /// Point of interest; not bookable.
    Poi,
}

impl fmt::Display for PlaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hotel => "Hotel",
            Self::Hostel => "Hostel",
            Self::Bnb => "BNB",
            Self::Poi => "POI",
        })
    }
}

/// Street address of a place to stay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub number: u32,
    pub road: String,
    pub postcode: String,
}

impl Address {
    pub fn new(number: u32, road: impl Into<String>, postcode: impl Into<String>) -> Self {
        Self {
            number,
            road: road.into(),
            postcode: postcode.into(),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} - {}", self.number, self.road, self.postcode)
    }
}

/// A named place with its outgoing distances and straight-line estimates to
/// other places.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Place {
    pub name: String,
    pub kind: PlaceKind,
    pub address: Option<Address>,
    /// Rooms or beds available per night.
    pub capacity: Option<u32>,
    pub neighbours: BTreeMap<String, Cost>,
    pub heuristics: BTreeMap<String, Cost>,
}

impl Place {
    pub fn new(name: impl Into<String>, kind: PlaceKind) -> Self {
        Self {
            name: name.into(),
            kind,
            address: None,
            capacity: None,
            neighbours: BTreeMap::new(),
            heuristics: BTreeMap::new(),
        }
    }

    pub fn with_address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }

    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = Some(capacity);
        self
    }

    pub fn with_neighbours<'a>(mut self, edges: impl IntoIterator<Item = (&'a str, Cost)>) -> Self {
        self.neighbours
            .extend(edges.into_iter().map(|(n, d)| (n.to_string(), d)));
        self
    }

    pub fn with_heuristics<'a>(mut self, estimates: impl IntoIterator<Item = (&'a str, Cost)>) -> Self {
        self.heuristics
            .extend(estimates.into_iter().map(|(n, d)| (n.to_string(), d)));
        self
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {}\nType: {}", self.name, self.kind)?;
        if let Some(address) = &self.address {
            write!(f, "\nAddress: {address}")?;
        }
        if let Some(capacity) = self.capacity {
            write!(f, "\nAvailability: {capacity}")?;
        }
        Ok(())
    }
}

impl Searchable for Place {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        let mut fields = vec![Cow::Borrowed(self.name.as_str()), Cow::Owned(self.kind.to_string())];
        if let Some(address) = &self.address {
            fields.push(Cow::Owned(address.to_string()));
        }
        fields
    }
}
