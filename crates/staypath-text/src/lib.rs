//! Case-insensitive substring matching.
//!
//! [`contains`] answers whether a pattern occurs in a text using the
//! Boyer–Moore bad-character rule. Both sides are case-folded first, so the
//! observable behaviour is case-insensitive containment.
//!
//! To test one query against many texts, build a [`Pattern`] once and reuse
//! its last-occurrence table. Records expose their searchable fields through
//! [`Searchable`]; a record matches when any field contains the query.

mod pattern;
mod record;

pub use pattern::{Pattern, contains};
pub use record::{Searchable, filter, matches};
