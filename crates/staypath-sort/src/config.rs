/// How a [`Sorter`](crate::Sorter) picks the pivot of each partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Pivot {
    /// The first element.
    #[default]
    First,
    /// The element at `len / 2`.
    Middle,
    /// The median of the first, middle and last elements.
    MedianOfThree,
    /// A uniformly random element drawn from an RNG seeded with `seed`.
    Random { seed: u64 },
}

/// Sorter configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SortConfig {
    pub pivot: Pivot,
}
