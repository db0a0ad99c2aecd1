//! Pure, side-effect-free queries over legend lists.
//!
//! Every function takes any iterator of `&Legend` (a slice of the catalog, a
//! previous query result, ...) and returns borrowed results in a
//! deterministic order. None of them can fail.

mod filter;
mod group;
mod layout;
mod rank;
mod stats;
mod tier;

pub use filter::*;
pub use group::*;
pub use layout::*;
pub use rank::*;
pub use stats::*;
pub use tier::*;

#[cfg(test)]
pub(crate) fn test_catalog() -> Vec<crate::model::Legend> {
    crate::catalog::legends().unwrap()
}

#[cfg(test)]
pub(crate) fn ids<'a>(legends: &[&'a crate::model::Legend]) -> Vec<&'a str> {
    legends.iter().map(|l| l.id.as_str()).collect()
}
