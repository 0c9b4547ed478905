use std::borrow::Cow;

use crate::Pattern;

/// A record that can be filtered by a free-text query.
pub trait Searchable {
    /// Fields checked against a query, e.g. name, category and a formatted
    /// address.
    fn search_fields(&self) -> Vec<Cow<'_, str>>;
}

impl Pattern {
    /// Whether any searchable field of `record` contains the pattern.
    pub fn matches<T: Searchable + ?Sized>(&self, record: &T) -> bool {
        record.search_fields().iter().any(|field| self.is_in(field))
    }
}

/// Whether any searchable field of `record` contains `query`, ignoring case.
pub fn matches<T: Searchable + ?Sized>(record: &T, query: &str) -> bool {
    Pattern::new(query).matches(record)
}

/// Records with at least one field containing `query`, in input order.
pub fn filter<'a, T: Searchable>(records: &'a [T], query: &str) -> Vec<&'a T> {
    let pattern = Pattern::new(query);
    records.iter().filter(|r| pattern.matches(*r)).collect()
}
