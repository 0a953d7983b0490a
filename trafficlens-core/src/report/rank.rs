//! Frequency ranking shared by every "top N" report.

use ahash::RandomState;
use std::collections::HashMap;
use std::hash::Hash;

/// Distinct values paired with their occurrence count, most frequent first.
pub type FrequencyTable<T> = Vec<(T, usize)>;

/// Values that carry no information and never form a ranked category.
pub trait Blank {
    fn is_blank(&self) -> bool;
}

impl Blank for str {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Blank for bool {
    fn is_blank(&self) -> bool {
        !*self
    }
}

impl<T: Blank + ?Sized> Blank for &T {
    fn is_blank(&self) -> bool {
        (**self).is_blank()
    }
}

impl<T: Blank> Blank for Option<T> {
    fn is_blank(&self) -> bool {
        self.as_ref().is_none_or(|value| value.is_blank())
    }
}

macro_rules! zero_is_blank {
    ($($ty:ty),*) => {
        $(impl Blank for $ty {
            fn is_blank(&self) -> bool {
                *self == 0
            }
        })*
    };
}

zero_is_blank!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// Tallies non-blank items and orders them by descending count.
///
/// Items with equal counts keep the order in which they were first seen.
pub fn rank<T, I>(items: I) -> FrequencyTable<T>
where
    I: IntoIterator<Item = T>,
    T: Blank + Eq + Hash,
{
    // item -> (first seen, count)
    let mut tally: HashMap<T, (usize, usize), RandomState> =
        HashMap::with_hasher(RandomState::new());

    for (seen, item) in items.into_iter().filter(|i| !i.is_blank()).enumerate() {
        tally.entry(item).or_insert((seen, 0)).1 += 1;
    }

    let mut ranked: Vec<(usize, T, usize)> = tally
        .into_iter()
        .map(|(item, (first_seen, count))| (first_seen, item, count))
        .collect();

    ranked.sort_by(|a, b| b.2.cmp(&a.2).then(a.0.cmp(&b.0)));

    ranked
        .into_iter()
        .map(|(_, item, count)| (item, count))
        .collect()
}

/// `rank` truncated to the `n` most frequent items.
pub fn top<T, I>(items: I, n: usize) -> FrequencyTable<T>
where
    I: IntoIterator<Item = T>,
    T: Blank + Eq + Hash,
{
    let mut ranked = rank(items);
    ranked.truncate(n);
    ranked
}
