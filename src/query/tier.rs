use crate::model::{Tier, TierProgress};

/// The tier an XP score falls into. Lower bounds are inclusive.
pub fn compute_tier(xp: u32) -> Tier {
    Tier::from_xp(xp)
}

/// How far `xp` has progressed through its tier's display range.
pub fn tier_progress(xp: u32) -> TierProgress {
    let tier = compute_tier(xp);
    let range = tier.range();
    let span = f64::from(range.end - range.start);
    let percent = (f64::from(xp - range.start) / span * 100.0).min(100.0);

    TierProgress {
        tier,
        xp,
        floor: range.start,
        ceiling: range.end,
        percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_tier_boundaries() {
        assert_eq!(compute_tier(0), Tier::Bronze);
        assert_eq!(compute_tier(4_999), Tier::Bronze);
        assert_eq!(compute_tier(5_000), Tier::Silver);
        assert_eq!(compute_tier(9_999), Tier::Silver);
        assert_eq!(compute_tier(10_000), Tier::Gold);
        assert_eq!(compute_tier(18_000), Tier::Platinum);
        assert_eq!(compute_tier(25_000), Tier::Diamond);
        assert_eq!(compute_tier(35_000), Tier::Master);
        assert_eq!(compute_tier(49_999), Tier::Master);
        assert_eq!(compute_tier(50_000), Tier::Grandmaster);
        assert_eq!(compute_tier(u32::MAX), Tier::Grandmaster);
    }

    #[test]
    fn test_tier_progress_within_tier() {
        let progress = tier_progress(7_500);
        assert_eq!(progress.tier, Tier::Silver);
        assert_eq!(progress.floor, 5_000);
        assert_eq!(progress.ceiling, 10_000);
        assert!((progress.percent - 50.0).abs() < 1e-9);

        assert_eq!(tier_progress(18_000).percent, 0.0);
    }

    #[test]
    fn test_tier_progress_caps_grandmaster() {
        let progress = tier_progress(65_000);
        assert_eq!(progress.tier, Tier::Grandmaster);
        assert_eq!(progress.ceiling, 100_000);
        assert!((progress.percent - 30.0).abs() < 1e-9);
        assert_eq!(tier_progress(250_000).percent, 100.0);
    }
}
