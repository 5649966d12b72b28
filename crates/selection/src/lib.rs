//! Selection state shared by the map and the project catalog.
//!
//! Everything here is pure and total; rendering lives in `views`.

pub mod category;
pub mod filter;
pub mod index_set;
pub mod persist;
pub mod tags;

pub use category::{CategorySelection, CategoryToggle};
pub use filter::ProjectFilter;
pub use persist::FilterKeys;
pub use tags::{ActiveTags, TagSelection, tag_counts};
