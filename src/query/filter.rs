use crate::model::{Category, CategorySelection, Legend};

/// Every legend in `category`, in input order.
pub fn filter_by_category<'a, I>(category: Category, legends: I) -> Vec<&'a Legend>
where
    I: IntoIterator<Item = &'a Legend>,
{
    legends
        .into_iter()
        .filter(|l| l.category == category)
        .collect()
}

/// Apply a filter-bar selection, in input order.
pub fn filter_by_selection<'a, I>(selection: CategorySelection, legends: I) -> Vec<&'a Legend>
where
    I: IntoIterator<Item = &'a Legend>,
{
    legends
        .into_iter()
        .filter(|l| selection.matches(l))
        .collect()
}

/// Legends flagged as featured, in input order.
pub fn filter_featured<'a, I>(legends: I) -> Vec<&'a Legend>
where
    I: IntoIterator<Item = &'a Legend>,
{
    legends.into_iter().filter(|l| l.featured).collect()
}

/// Case-insensitive substring search over name, title and bio.
///
/// A legend matches when any of the three fields contains `query`. An empty
/// query matches everything.
pub fn filter_by_search<'a, I>(query: &str, legends: I) -> Vec<&'a Legend>
where
    I: IntoIterator<Item = &'a Legend>,
{
    let needle = query.to_lowercase();
    legends
        .into_iter()
        .filter(|l| matches_search(l, &needle))
        .collect()
}

/// `needle` must already be lowercase.
fn matches_search(legend: &Legend, needle: &str) -> bool {
    [&legend.name, &legend.title, &legend.bio]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}
