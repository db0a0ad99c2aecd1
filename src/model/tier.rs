use std::ops::Range;

use serde::Serialize;

/// Rank label derived from a legend's XP, independent of its category.
///
/// Variants are ordered from lowest to highest.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Tier {
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
    Master,
    Grandmaster,
}

/// XP shown as the top of the grandmaster progress bar.
pub const GRANDMASTER_DISPLAY_CEILING: u32 = 100_000;

impl Tier {
    /// Lowest XP that reaches this tier.
    pub const fn floor(self) -> u32 {
        match self {
            Tier::Bronze => 0,
            Tier::Silver => 5_000,
            Tier::Gold => 10_000,
            Tier::Platinum => 18_000,
            Tier::Diamond => 25_000,
            Tier::Master => 35_000,
            Tier::Grandmaster => 50_000,
        }
    }

    /// Floor of the next tier, or `None` for the open-ended top tier.
    pub const fn ceiling(self) -> Option<u32> {
        match self.next() {
            Some(next) => Some(next.floor()),
            None => None,
        }
    }

    pub const fn next(self) -> Option<Tier> {
        match self {
            Tier::Bronze => Some(Tier::Silver),
            Tier::Silver => Some(Tier::Gold),
            Tier::Gold => Some(Tier::Platinum),
            Tier::Platinum => Some(Tier::Diamond),
            Tier::Diamond => Some(Tier::Master),
            Tier::Master => Some(Tier::Grandmaster),
            Tier::Grandmaster => None,
        }
    }

    /// XP range used for progress bars; grandmaster is capped for display.
    pub fn range(self) -> Range<u32> {
        self.floor()..self.ceiling().unwrap_or(GRANDMASTER_DISPLAY_CEILING)
    }

    pub fn from_xp(xp: u32) -> Tier {
        match xp {
            50_000.. => Tier::Grandmaster,
            35_000.. => Tier::Master,
            25_000.. => Tier::Diamond,
            18_000.. => Tier::Platinum,
            10_000.. => Tier::Gold,
            5_000.. => Tier::Silver,
            _ => Tier::Bronze,
        }
    }
}

/// Where an XP score sits inside its tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TierProgress {
    pub tier: Tier,
    pub xp: u32,
    pub floor: u32,
    pub ceiling: u32,
    /// Percent of the way from `floor` to `ceiling`, capped at 100.
    pub percent: f64,
}

/// Card rarity shown by the trading-card theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum_macros::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Rarity {
    Rare,
    Legendary,
}
