//! Line classification for Korean statute structure.
//!
//! Each structural level (편, 장, 절, 조, 항, 호, 목) is described by a
//! declarative [`LevelSpec`]. The [`HierarchyRegistry`] tests a line against
//! the registered specs in priority order and reports the first match.

mod config;
mod registry;
mod types;

pub use config::{create_korean_law_hierarchy, korean_law_hierarchy};
pub use registry::HierarchyRegistry;
pub use types::{Level, LevelSpec, LineMatch};
