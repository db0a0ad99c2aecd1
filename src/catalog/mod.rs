//! The built-in hall-of-fame catalog and its construction-time validation.
//!
//! The records are written as a static literal of borrowed strings and turned
//! into owned [`Legend`]s once, when a [`Directory`](crate::Directory) is
//! built. Anything the type system cannot rule out (duplicate ids, malformed
//! dates) is rejected here instead of in the queries.

mod legends;
mod templates;

use std::collections::HashSet;

use tracing::debug;

use crate::error::{DirectoryError, Result};
use crate::model::{Achievement, Category, Legend, LegendStats, SocialLinks, Template, YearMonth};

pub(crate) struct LegendSeed {
    id: &'static str,
    name: &'static str,
    title: &'static str,
    avatar: &'static str,
    category: Category,
    bio: &'static str,
    achievements: &'static [AchievementSeed],
    socials: SocialSeed,
    joined: &'static str,
    featured: bool,
    stats: LegendStats,
    xp: u32,
}

pub(crate) struct AchievementSeed {
    title: &'static str,
    description: &'static str,
    date: &'static str,
}

#[derive(Clone, Copy)]
pub(crate) struct SocialSeed {
    twitter: Option<&'static str>,
    github: Option<&'static str>,
    linkedin: Option<&'static str>,
    website: Option<&'static str>,
}

impl SocialSeed {
    const NONE: SocialSeed = SocialSeed {
        twitter: None,
        github: None,
        linkedin: None,
        website: None,
    };
}

pub(crate) struct TemplateSeed {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    tags: &'static [&'static str],
}

impl LegendSeed {
    fn build(&self) -> Result<Legend> {
        let achievements = self
            .achievements
            .iter()
            .map(|a| -> Result<Achievement> {
                Ok(Achievement {
                    title: a.title.to_owned(),
                    description: a.description.to_owned(),
                    date: YearMonth::parse(a.date)?,
                    icon: None,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Legend {
            id: self.id.to_owned(),
            name: self.name.to_owned(),
            title: self.title.to_owned(),
            bio: self.bio.to_owned(),
            avatar: self.avatar.to_owned(),
            category: self.category,
            achievements,
            socials: SocialLinks {
                twitter: self.socials.twitter.map(str::to_owned),
                github: self.socials.github.map(str::to_owned),
                linkedin: self.socials.linkedin.map(str::to_owned),
                website: self.socials.website.map(str::to_owned),
            },
            joined: YearMonth::parse(self.joined)?,
            featured: self.featured,
            stats: self.stats,
            xp: self.xp,
        })
    }
}

impl TemplateSeed {
    // id and slug coincide for every built-in theme
    fn build(&self) -> Template {
        Template {
            id: self.id.to_owned(),
            name: self.name.to_owned(),
            slug: self.id.to_owned(),
            description: self.description.to_owned(),
            screenshot: format!("/screenshots/{}.png", self.id),
            tags: self.tags.iter().map(|t| (*t).to_owned()).collect(),
        }
    }
}

/// Build the built-in legend records, parsing every date.
pub fn legends() -> Result<Vec<Legend>> {
    legends::LEGENDS.iter().map(LegendSeed::build).collect()
}

/// Build the built-in gallery templates.
pub fn templates() -> Vec<Template> {
    templates::TEMPLATES.iter().map(TemplateSeed::build).collect()
}

/// Check the invariants the types alone do not enforce: non-empty, unique
/// legend ids and unique template slugs.
pub fn validate(legends: &[Legend], templates: &[Template]) -> Result<()> {
    let mut ids = HashSet::with_capacity(legends.len());
    for legend in legends {
        if legend.id.is_empty() {
            return Err(DirectoryError::EmptyLegendId);
        }
        if !ids.insert(legend.id.as_str()) {
            return Err(DirectoryError::DuplicateLegendId {
                id: legend.id.clone(),
            });
        }
    }

    let mut slugs = HashSet::with_capacity(templates.len());
    for template in templates {
        if !slugs.insert(template.slug.as_str()) {
            return Err(DirectoryError::DuplicateTemplateSlug {
                slug: template.slug.clone(),
            });
        }
    }

    debug!(
        legends = legends.len(),
        templates = templates.len(),
        "validated catalog"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let legends = legends().unwrap();
        let templates = templates();
        assert_eq!(legends.len(), 12);
        assert_eq!(templates.len(), 10);
        validate(&legends, &templates).unwrap();
    }

    #[test]
    fn test_builtin_legend_fields() {
        let legends = legends().unwrap();
        let akshay = &legends[0];
        assert_eq!(akshay.id, "founder-1");
        assert_eq!(akshay.category, Category::Founders);
        assert_eq!(akshay.joined.to_string(), "2021-06");
        assert_eq!(akshay.achievements.len(), 2);
        assert_eq!(akshay.socials.website.as_deref(), Some("superteam.fun"));
        assert!(akshay.featured);
        assert!(legends.iter().all(|l| !l.achievements.is_empty()));
    }

    #[test]
    fn test_template_screenshot_paths() {
        let templates = templates();
        let arcade = templates.iter().find(|t| t.id == "retro-arcade").unwrap();
        assert_eq!(arcade.slug, "retro-arcade");
        assert_eq!(arcade.screenshot, "/screenshots/retro-arcade.png");
        assert_eq!(arcade.tags, ["pixel", "retro", "gaming"]);
    }

    #[test]
    fn test_validate_rejects_duplicate_id() {
        let mut legends = legends().unwrap();
        legends[1].id = legends[0].id.clone();
        let err = validate(&legends, &[]).unwrap_err();
        assert!(matches!(err, DirectoryError::DuplicateLegendId { ref id } if id == "founder-1"));
    }

    #[test]
    fn test_validate_rejects_empty_id() {
        let mut legends = legends().unwrap();
        legends[5].id.clear();
        assert!(matches!(
            validate(&legends, &[]),
            Err(DirectoryError::EmptyLegendId)
        ));
    }

    #[test]
    fn test_validate_rejects_duplicate_slug() {
        let mut templates = templates();
        templates[2].slug = "museum".into();
        let err = validate(&[], &templates).unwrap_err();
        assert!(matches!(err, DirectoryError::DuplicateTemplateSlug { ref slug } if slug == "museum"));
    }
}
