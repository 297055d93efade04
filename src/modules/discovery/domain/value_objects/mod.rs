pub mod filter_catalog;
pub mod filter_selection;
pub mod language;
pub mod numeric_range;

pub use filter_catalog::{FilterCatalog, FilterCategory, FilterGroup, GroupedSelection};
pub use filter_selection::FilterSelection;
pub use language::normalize_language;
pub use numeric_range::NumericRange;
