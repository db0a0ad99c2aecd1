use std::cmp::Reverse;

use itertools::Itertools;
use serde::Serialize;

use crate::model::{Legend, Tier};

/// Places shown on a podium.
pub const PODIUM_SIZE: usize = 3;

/// Ranked positions in podium display order: second, first, third.
const PODIUM_ORDER: [usize; PODIUM_SIZE] = [1, 0, 2];

/// Featured legends spotlighted by [`showcase`] on the trophy wall.
pub const SHOWCASE_LIMIT: usize = 3;

/// A legend with its 1-based leaderboard rank.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardEntry<'a> {
    pub rank: usize,
    pub tier: Tier,
    pub legend: &'a Legend,
}

/// Featured legends pulled out for the spotlight, and everyone else.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Showcase<'a> {
    pub spotlight: Vec<&'a Legend>,
    pub others: Vec<&'a Legend>,
}

/// Sort by XP, highest first.
///
/// The sort is stable: legends with equal XP keep their input order, so
/// rankings are reproducible.
pub fn sort_by_xp<'a, I>(legends: I) -> Vec<&'a Legend>
where
    I: IntoIterator<Item = &'a Legend>,
{
    legends
        .into_iter()
        .sorted_by_key(|l| Reverse(l.xp))
        .collect()
}

/// Rank legends by XP. Ties get consecutive ranks in input order.
pub fn leaderboard<'a, I>(legends: I) -> Vec<LeaderboardEntry<'a>>
where
    I: IntoIterator<Item = &'a Legend>,
{
    sort_by_xp(legends)
        .into_iter()
        .enumerate()
        .map(|(index, legend)| LeaderboardEntry {
            rank: index + 1,
            tier: Tier::from_xp(legend.xp),
            legend,
        })
        .collect()
}

/// Top three of an already ranked list, in podium display order:
/// second, first, third. Missing places are skipped.
pub fn podium<'a>(ranked: &[&'a Legend]) -> Vec<&'a Legend> {
    PODIUM_ORDER
        .into_iter()
        .filter_map(|place| ranked.get(place).copied())
        .collect()
}

/// Split legends into the first `limit` featured ones and the rest.
///
/// `others` keeps input order and includes featured legends past the limit.
pub fn showcase<'a, I>(legends: I, limit: usize) -> Showcase<'a>
where
    I: IntoIterator<Item = &'a Legend>,
{
    let mut showcase = Showcase::default();
    for legend in legends {
        if legend.featured && showcase.spotlight.len() < limit {
            showcase.spotlight.push(legend);
        } else {
            showcase.others.push(legend);
        }
    }
    showcase
}
