use std::collections::BTreeMap;

use itertools::Itertools;
use strum::IntoEnumIterator;

use crate::model::{Category, Legend};

/// Partition legends into the four category buckets.
///
/// Every category is present as a key, with an empty list when it has no
/// members. Buckets keep input order.
pub fn group_by_category<'a, I>(legends: I) -> BTreeMap<Category, Vec<&'a Legend>>
where
    I: IntoIterator<Item = &'a Legend>,
{
    let mut groups: BTreeMap<Category, Vec<&'a Legend>> =
        Category::iter().map(|c| (c, Vec::new())).collect();
    for legend in legends {
        groups.entry(legend.category).or_default().push(legend);
    }
    groups
}

/// Category buckets, each ordered by join date (earliest first).
pub fn timeline<'a, I>(legends: I) -> BTreeMap<Category, Vec<&'a Legend>>
where
    I: IntoIterator<Item = &'a Legend>,
{
    let mut groups = group_by_category(legends);
    for members in groups.values_mut() {
        members.sort_by_key(|l| l.joined);
    }
    groups
}

/// Distinct join years, ascending.
pub fn joined_years<'a, I>(legends: I) -> Vec<i32>
where
    I: IntoIterator<Item = &'a Legend>,
{
    legends
        .into_iter()
        .map(|l| l.joined.year())
        .sorted_unstable()
        .dedup()
        .collect()
}
