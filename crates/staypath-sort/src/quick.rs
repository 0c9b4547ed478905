use std::cmp::Ordering;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{Pivot, SortConfig};

/// Quicksort driver holding the pivot strategy (and its RNG, if any).
pub struct Sorter {
    pivot: Pivot,
    rng: Option<StdRng>,
}

impl Default for Sorter {
    fn default() -> Self {
        Self::new(SortConfig::default())
    }
}

impl Sorter {
    pub fn new(config: SortConfig) -> Self {
        let rng = match config.pivot {
            Pivot::Random { seed } => Some(StdRng::seed_from_u64(seed)),
            _ => None,
        };
        Self {
            pivot: config.pivot,
            rng,
        }
    }

    pub fn pivot(&self) -> Pivot {
        self.pivot
    }

    /// Sort by the natural order of `T`.
    pub fn sort<T: Ord + Clone>(&mut self, items: &[T]) -> Vec<T> {
        self.sort_by(items, T::cmp)
    }

    /// Sort with an explicit comparison function.
    pub fn sort_by<T, F>(&mut self, items: &[T], mut compare: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        self.sort_items(items.to_vec(), &mut compare)
    }

    /// Sort by a key extracted from each element.
    pub fn sort_by_key<T, K, F>(&mut self, items: &[T], mut key: F) -> Vec<T>
    where
        T: Clone,
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.sort_by(items, |a, b| key(a).cmp(&key(b)))
    }

    fn sort_items<T, F>(&mut self, items: Vec<T>, compare: &mut F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        // Pending work, popped LIFO: a bucket still to partition, or an
        // already ordered run to append to the output.
        enum Work<T> {
            Partition(Vec<T>),
            Emit(Vec<T>),
        }

        let mut sorted = Vec::with_capacity(items.len());
        let mut stack = vec![Work::Partition(items)];

        while let Some(work) = stack.pop() {
            let items = match work {
                Work::Emit(mut run) => {
                    sorted.append(&mut run);
                    continue;
                }
                Work::Partition(items) if items.len() <= 1 => {
                    sorted.extend(items);
                    continue;
                }
                Work::Partition(items) => items,
            };

            let p = self.pivot_index(&items, compare);
            let pivot = items[p].clone();

            let mut less = Vec::new();
            let mut equal = Vec::new();
            let mut greater = Vec::new();
            for (i, item) in items.into_iter().enumerate() {
                // The pivot always lands in `equal`, so every level shrinks.
                if i == p {
                    equal.push(item);
                    continue;
                }
                match compare(&item, &pivot) {
                    Ordering::Less => less.push(item),
                    Ordering::Equal => equal.push(item),
                    Ordering::Greater => greater.push(item),
                }
            }

            stack.push(Work::Partition(greater));
            stack.push(Work::Emit(equal));
            stack.push(Work::Partition(less));
        }
        sorted
    }

    fn pivot_index<T, F>(&mut self, items: &[T], compare: &mut F) -> usize
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let len = items.len();
        match self.pivot {
            Pivot::First => 0,
            Pivot::Middle => len / 2,
            Pivot::MedianOfThree => {
                let mut idx = [0, len / 2, len - 1];
                if compare(&items[idx[1]], &items[idx[0]]) == Ordering::Less {
                    idx.swap(0, 1);
                }
                if compare(&items[idx[2]], &items[idx[1]]) == Ordering::Less {
                    idx.swap(1, 2);
                    if compare(&items[idx[1]], &items[idx[0]]) == Ordering::Less {
                        idx.swap(0, 1);
                    }
                }
                idx[1]
            }
            Pivot::Random { .. } => match self.rng.as_mut() {
                Some(rng) => rng.random_range(0..len),
                None => 0,
            },
        }
    }
}

/// Sort `items` by their natural order, first-element pivot.
pub fn quick_sort<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    Sorter::default().sort(items)
}

/// Sort `items` with `compare`, first-element pivot.
pub fn quick_sort_by<T, F>(items: &[T], compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    Sorter::default().sort_by(items, compare)
}

/// Sort `items` by the key `key` extracts, first-element pivot.
pub fn quick_sort_by_key<T, K, F>(items: &[T], key: F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    Sorter::default().sort_by_key(items, key)
}
