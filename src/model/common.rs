use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};

use crate::error::{DirectoryError, Result};

/// A calendar month written as `YYYY-MM`, e.g. a join date.
///
/// Ordered chronologically and serialized back in its `YYYY-MM` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth(NaiveDate);

impl YearMonth {
    pub fn parse(value: &str) -> Result<Self> {
        let date = NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d").map_err(
            |source| DirectoryError::InvalidYearMonth {
                value: value.to_owned(),
                source,
            },
        )?;

        // chrono accepts unpadded months and signed years
        let year_month = YearMonth(date);
        if year_month.to_string() != value {
            return Err(DirectoryError::MalformedYearMonth {
                value: value.to_owned(),
            });
        }
        Ok(year_month)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// The first day of the month.
    pub fn first_day(&self) -> NaiveDate {
        self.0
    }
}

impl Display for YearMonth {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m"))
    }
}

impl FromStr for YearMonth {
    type Err = DirectoryError;

    fn from_str(value: &str) -> Result<Self> {
        YearMonth::parse(value)
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A social platform a legend can link to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum_macros::Display, strum_macros::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SocialPlatform {
    Twitter,
    Github,
    Linkedin,
    Website,
}

/// A resolved, clickable social link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub platform: SocialPlatform,
    pub url: String,
}

/// Social handles of a legend. A missing field means the link is not shown.
///
/// Handles are stored without scheme or domain, except `website`, which may
/// already be a full URL.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLinks {
    pub twitter: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub website: Option<String>,
}

impl SocialLinks {
    pub fn handle(&self, platform: SocialPlatform) -> Option<&str> {
        match platform {
            SocialPlatform::Twitter => self.twitter.as_deref(),
            SocialPlatform::Github => self.github.as_deref(),
            SocialPlatform::Linkedin => self.linkedin.as_deref(),
            SocialPlatform::Website => self.website.as_deref(),
        }
    }

    /// Build the link URL for `platform`, if a handle is set.
    pub fn url(&self, platform: SocialPlatform) -> Option<String> {
        let handle = self.handle(platform)?;
        let url = match platform {
            SocialPlatform::Twitter => format!("https://twitter.com/{handle}"),
            SocialPlatform::Github => format!("https://github.com/{handle}"),
            SocialPlatform::Linkedin => format!("https://linkedin.com/in/{handle}"),
            SocialPlatform::Website if handle.starts_with("http") => handle.to_owned(),
            SocialPlatform::Website => format!("https://{handle}"),
        };
        Some(url)
    }

    /// All present links, in twitter, github, linkedin, website order.
    pub fn links(&self) -> Vec<SocialLink> {
        use strum::IntoEnumIterator;

        SocialPlatform::iter()
            .filter_map(|platform| {
                self.url(platform)
                    .map(|url| SocialLink { platform, url })
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.links().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_year_month() {
        let joined = YearMonth::parse("2021-06").unwrap();
        assert_eq!(joined.year(), 2021);
        assert_eq!(joined.month(), 6);
        assert_eq!(joined.to_string(), "2021-06");
        assert_eq!(
            joined.first_day(),
            NaiveDate::from_ymd_opt(2021, 6, 1).unwrap()
        );
        assert!(YearMonth::parse("2020-03").unwrap() < joined);
    }

    #[test]
    fn test_reject_bad_year_month() {
        assert!(matches!(
            YearMonth::parse("2021-13"),
            Err(DirectoryError::InvalidYearMonth { .. })
        ));
        assert!(matches!(
            YearMonth::parse("June 2021"),
            Err(DirectoryError::InvalidYearMonth { .. })
        ));
        assert!(matches!(
            YearMonth::parse("2021-6"),
            Err(DirectoryError::MalformedYearMonth { .. })
        ));
        assert!(YearMonth::parse("").is_err());
    }

    #[test]
    fn test_social_link_urls() {
        let socials = SocialLinks {
            twitter: Some("akshaybd".into()),
            github: Some("soju-dev".into()),
            linkedin: Some("priya-sharma-sol".into()),
            website: Some("superteam.fun".into()),
        };
        let links = socials.links();
        let urls: Vec<&str> = links.iter().map(|l| l.url.as_str()).collect();
        assert_eq!(
            urls,
            [
                "https://twitter.com/akshaybd",
                "https://github.com/soju-dev",
                "https://linkedin.com/in/priya-sharma-sol",
                "https://superteam.fun",
            ]
        );
        assert_eq!(links[3].platform, SocialPlatform::Website);
    }

    #[test]
    fn test_website_keeps_existing_scheme() {
        let socials = SocialLinks {
            website: Some("http://rajart.xyz".into()),
            ..Default::default()
        };
        assert_eq!(
            socials.url(SocialPlatform::Website).as_deref(),
            Some("http://rajart.xyz")
        );
        assert_eq!(socials.url(SocialPlatform::Twitter), None);
        assert_eq!(socials.links().len(), 1);
        assert!(SocialLinks::default().is_empty());
    }
}
