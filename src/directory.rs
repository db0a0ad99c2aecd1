use tracing::{debug, instrument};

use crate::catalog;
use crate::error::Result;
use crate::model::*;
use crate::query;

/// The main entry point for looking up legends and templates.
///
/// A `Directory` owns a validated, immutable catalog. Every method is a pure
/// read over it; list results borrow from the directory and keep catalog
/// order.
///
/// # Examples
///
/// ```
/// # fn example() -> legend_directory::Result<()> {
/// use legend_directory::{Category, Directory};
///
/// let directory = Directory::new()?;
/// let founders = directory.legends_by_category(Category::Founders);
/// println!("Found {} founders", founders.len());
/// assert!(directory.legend_by_id("nonexistent").is_none());
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct Directory {
    legends: Vec<Legend>,
    templates: Vec<Template>,
}

impl Directory {
    /// Load the built-in hall-of-fame catalog.
    pub fn new() -> Result<Self> {
        Self::with_catalog(catalog::legends()?, catalog::templates())
    }

    /// Load a caller-provided catalog.
    ///
    /// Rejects empty or duplicate legend ids and duplicate template slugs.
    pub fn with_catalog(legends: Vec<Legend>, templates: Vec<Template>) -> Result<Self> {
        catalog::validate(&legends, &templates)?;
        Ok(Self { legends, templates })
    }

    /// Every legend, in catalog order.
    pub fn legends(&self) -> &[Legend] {
        &self.legends
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// Legends in `category`, in catalog order. Empty if none match.
    #[instrument(skip(self))]
    pub fn legends_by_category(&self, category: Category) -> Vec<&Legend> {
        let legends = query::filter_by_category(category, &self.legends);
        debug!(count = legends.len(), "filtered legends by category");
        legends
    }

    /// Legends flagged as featured, in catalog order.
    #[instrument(skip(self))]
    pub fn featured_legends(&self) -> Vec<&Legend> {
        let legends = query::filter_featured(&self.legends);
        debug!(count = legends.len(), "collected featured legends");
        legends
    }

    /// Exact lookup by id. `None` when no legend has that id.
    #[instrument(skip(self))]
    pub fn legend_by_id(&self, id: &str) -> Option<&Legend> {
        let legend = self.legends.iter().find(|l| l.id == id);
        if legend.is_none() {
            debug!("legend not found");
        }
        legend
    }

    /// Legends matching a filter-bar selection, in catalog order.
    #[instrument(skip(self))]
    pub fn select(&self, selection: CategorySelection) -> Vec<&Legend> {
        let legends = query::filter_by_selection(selection, &self.legends);
        debug!(count = legends.len(), "applied category selection");
        legends
    }

    /// Exact lookup of a gallery template by slug.
    #[instrument(skip(self))]
    pub fn template_by_slug(&self, slug: &str) -> Option<&Template> {
        let template = self.templates.iter().find(|t| t.slug == slug);
        if template.is_none() {
            debug!("template not found");
        }
        template
    }
}
