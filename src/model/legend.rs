use serde::Serialize;

use super::category::Category;
use super::common::{SocialLinks, YearMonth};
use super::tier::Rarity;

/// A single milestone shown on a legend's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Achievement {
    pub title: String,
    pub description: String,
    pub date: YearMonth,
    pub icon: Option<String>,
}

/// Optional headline numbers for a legend. Absent values count as zero.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LegendStats {
    pub projects: Option<u32>,
    pub contributions: Option<u32>,
    pub awards: Option<u32>,
}

/// Which headline number to read from [`LegendStats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum StatKind {
    Projects,
    Contributions,
    Awards,
}

impl LegendStats {
    pub fn value(&self, kind: StatKind) -> u32 {
        match kind {
            StatKind::Projects => self.projects,
            StatKind::Contributions => self.contributions,
            StatKind::Awards => self.awards,
        }
        .unwrap_or(0)
    }
}

/// A profile record for one honored community member.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub id: String,
    pub name: String,
    pub title: String,
    pub bio: String,
    /// Image path. Themes render [`Legend::initial`] instead.
    pub avatar: String,
    pub category: Category,
    pub achievements: Vec<Achievement>,
    pub socials: SocialLinks,
    #[serde(rename = "joined_date")]
    pub joined: YearMonth,
    pub featured: bool,
    pub stats: LegendStats,
    pub xp: u32,
}

impl Legend {
    /// The first letter of the name, used as the avatar glyph.
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next()
    }

    pub fn rarity(&self) -> Rarity {
        if self.featured {
            Rarity::Legendary
        } else {
            Rarity::Rare
        }
    }
}
