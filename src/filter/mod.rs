//! Filters over namespace listings.

mod name_filter;

pub use name_filter::{ListingFilter, NameFilter};
