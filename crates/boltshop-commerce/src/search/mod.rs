//! Shop listing: filtering, sorting and pagination over the catalog.

mod filter;
mod query;
mod results;

pub use filter::{matches_category, matches_text, normalize_text};
pub use query::{compare_names, ShopQuery, SortMode, ALL_CATEGORIES};
pub use results::{Pagination, ProductPage};

/// Products per page in the shop listing.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Upper bound for a requested page size.
pub const MAX_PAGE_SIZE: usize = 100;
