//! Core library for PCForge, a custom PC build configurator.
//!
//! A [`BuildSession`] owns a [`SelectionAggregator`] holding at most one
//! [`CatalogItem`] per [`ComponentCategory`]. Totals and the compatibility
//! label are derived from the selection on demand by the [`summary`]
//! functions. Catalog data comes from any [`CatalogProvider`].

pub mod catalog;
pub mod category;
pub mod config;
pub mod error;
pub mod item;
pub mod price;
pub mod selection;
pub mod session;
pub mod summary;

#[cfg(test)]
mod tests;

pub use catalog::CatalogProvider;
pub use catalog::StaticCatalog;
pub use category::CategoryInfo;
pub use category::ComponentCategory;
pub use config::BuilderConfig;
pub use config::ConfigSource;
pub use config::LogConfig;
pub use error::BuilderError;
pub use error::Result;
pub use item::CatalogItem;
pub use item::ItemAttributes;
pub use price::Price;
pub use selection::SelectionAggregator;
pub use selection::SelectionMap;
pub use session::BuildSession;
pub use session::SaveBuildRequest;
pub use session::SaveBuildResponse;
pub use summary::BuildSummary;
pub use summary::COMPATIBLE_THRESHOLD;
pub use summary::Compatibility;
pub use summary::CompatibilityStatus;
pub use summary::compute_compatibility;
pub use summary::compute_total;
