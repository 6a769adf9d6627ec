//! Search module.
//!
//! In-memory filter and sort pipelines over the static catalogs.

mod filter;
mod query;
mod sort;

pub use filter::{CatalogFilter, PartFilter, PriceBand};
pub use query::CatalogQuery;
pub use sort::SortKey;
