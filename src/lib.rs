//! Read-only directory of hall-of-fame legends.
//!
//! The crate holds a fixed, validated catalog of [`Legend`] records and the
//! pure queries every presentation theme is built on: category filters,
//! search, XP ranking, grouping, tiers and a deterministic constellation
//! layout.
//!
//! ```
//! use legend_directory::{compute_tier, filter_by_search, sort_by_xp, Directory, Tier};
//!
//! let directory = Directory::new()?;
//! let solana = filter_by_search("solana", directory.legends());
//! let ranked = sort_by_xp(solana);
//! assert_eq!(compute_tier(ranked[0].xp), Tier::Grandmaster);
//! # Ok::<(), legend_directory::DirectoryError>(())
//! ```

pub mod catalog;
mod directory;
pub mod error;
pub mod model;
pub mod query;

pub use directory::Directory;
pub use error::{DirectoryError, Result};
pub use model::*;
pub use query::{
    compute_tier, deterministic_position, filter_by_search, group_by_category, sort_by_xp,
};
