/// All errors that can occur while building or parsing directory data.
///
/// Queries over a loaded [`Directory`](crate::Directory) never fail; these
/// only surface when a catalog is validated or a string is parsed at the
/// boundary.
#[derive(thiserror::Error, Debug)]
pub enum DirectoryError {
    /// A legend was declared with an empty id.
    #[error("legend id must not be empty")]
    EmptyLegendId,

    /// Two legends share the same id.
    #[error("duplicate legend id: {id}")]
    DuplicateLegendId { id: String },

    /// Two templates share the same slug.
    #[error("duplicate template slug: {slug}")]
    DuplicateTemplateSlug { slug: String },

    /// A category (or category selection) string did not name a known category.
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// A year-month string could not be parsed as a date.
    #[error("invalid year-month {value:?}: {source}")]
    InvalidYearMonth {
        value: String,
        source: chrono::ParseError,
    },

    /// A year-month string parsed, but is not written as `YYYY-MM`.
    #[error("year-month {value:?} is not in YYYY-MM form")]
    MalformedYearMonth { value: String },
}

pub type Result<T> = std::result::Result<T, DirectoryError>;
