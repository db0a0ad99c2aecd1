use std::collections::BTreeMap;

use serde::Serialize;
use strum::IntoEnumIterator;

use crate::model::{Category, Legend, StatKind};

/// XP that fills a meter or radar axis completely.
///
/// Every XP normalization in the crate uses this one scale. It matches the
/// grandmaster floor.
pub const XP_SCALE: u32 = 50_000;

/// One axis of a legend's radar chart, normalized to `0.0..=1.0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarAxis {
    pub label: &'static str,
    pub value: f64,
}

/// Headline totals for a set of legends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectorySummary {
    pub legends: usize,
    pub total_xp: u64,
    pub achievements: usize,
    pub featured: usize,
    pub by_category: BTreeMap<Category, usize>,
}

/// `xp` as a fraction of [`XP_SCALE`], capped at 1.
pub fn xp_ratio(xp: u32) -> f64 {
    (f64::from(xp) / f64::from(XP_SCALE)).min(1.0)
}

/// How many of `segments` meter cells `xp` lights up (rounded up).
pub fn xp_segments(xp: u32, segments: u32) -> u32 {
    (xp_ratio(xp) * f64::from(segments)).ceil() as u32
}

fn ratio(value: u32, max: u32) -> f64 {
    (f64::from(value) / f64::from(max)).min(1.0)
}

fn impact(category: Category) -> f64 {
    match category {
        Category::Founders => 0.9,
        Category::Legends => 0.8,
        Category::Contributors | Category::Achievers => 0.6,
    }
}

/// Radar chart axes for one legend. Missing stats count as zero.
pub fn radar(legend: &Legend) -> Vec<RadarAxis> {
    let badges = u32::try_from(legend.achievements.len()).unwrap_or(u32::MAX);
    vec![
        RadarAxis {
            label: "XP",
            value: xp_ratio(legend.xp),
        },
        RadarAxis {
            label: "Badges",
            value: ratio(badges, 10),
        },
        RadarAxis {
            label: "Impact",
            value: impact(legend.category),
        },
        RadarAxis {
            label: "Projects",
            value: ratio(legend.stats.value(StatKind::Projects), 100),
        },
        RadarAxis {
            label: "Contrib",
            value: ratio(legend.stats.value(StatKind::Contributions), 1_000),
        },
        RadarAxis {
            label: "Awards",
            value: ratio(legend.stats.value(StatKind::Awards), 20),
        },
    ]
}

/// Totals across `legends`. Every category appears in `by_category`.
pub fn summarize<'a, I>(legends: I) -> DirectorySummary
where
    I: IntoIterator<Item = &'a Legend>,
{
    let mut summary = DirectorySummary {
        legends: 0,
        total_xp: 0,
        achievements: 0,
        featured: 0,
        by_category: Category::iter().map(|c| (c, 0)).collect(),
    };
    for legend in legends {
        summary.legends += 1;
        summary.total_xp += u64::from(legend.xp);
        summary.achievements += legend.achievements.len();
        summary.featured += usize::from(legend.featured);
        *summary.by_category.entry(legend.category).or_default() += 1;
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::test_catalog;

    #[test]
    fn test_xp_ratio_and_segments() {
        assert_eq!(xp_ratio(0), 0.0);
        assert_eq!(xp_ratio(25_000), 0.5);
        assert_eq!(xp_ratio(65_000), 1.0);
        assert_eq!(xp_segments(0, 5), 0);
        assert_eq!(xp_segments(1, 5), 1);
        assert_eq!(xp_segments(21_000, 5), 3);
        assert_eq!(xp_segments(50_000, 5), 5);
        assert_eq!(xp_segments(90_000, 5), 5);
    }

    #[test]
    fn test_radar_axes() {
        let legends = test_catalog();
        let anatoly = legends.iter().find(|l| l.id == "legend-1").unwrap();
        let axes = radar(anatoly);
        let labels: Vec<&str> = axes.iter().map(|a| a.label).collect();
        assert_eq!(labels, ["XP", "Badges", "Impact", "Projects", "Contrib", "Awards"]);
        assert_eq!(axes[0].value, 1.0);
        assert!((axes[1].value - 0.2).abs() < 1e-9);
        assert_eq!(axes[2].value, 0.8);
        assert_eq!(axes[3].value, 1.0);
        assert_eq!(axes[4].value, 1.0);
        assert_eq!(axes[5].value, 1.0);
        assert!(legends
            .iter()
            .flat_map(radar)
            .all(|a| (0.0..=1.0).contains(&a.value)));
    }

    #[test]
    fn test_radar_treats_missing_stats_as_zero() {
        let legends = test_catalog();
        let soju = legends.iter().find(|l| l.id == "contributor-1").unwrap();
        assert_eq!(soju.stats.awards, None);
        let axes = radar(soju);
        assert_eq!(axes[5].value, 0.0);
        assert!((axes[4].value - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_summarize_catalog() {
        let legends = test_catalog();
        let summary = summarize(&legends);
        assert_eq!(summary.legends, 12);
        assert_eq!(summary.featured, 6);
        assert_eq!(summary.achievements, 24);
        assert_eq!(
            summary.total_xp,
            legends.iter().map(|l| u64::from(l.xp)).sum::<u64>()
        );
        assert!(summary.by_category.values().all(|count| *count == 3));
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(&Vec::<Legend>::new());
        assert_eq!(summary.legends, 0);
        assert_eq!(summary.by_category.len(), 4);
    }
}
