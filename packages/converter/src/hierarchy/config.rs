//! Configuration for the Korean statute hierarchy.

use std::sync::LazyLock;

use regex::Regex;

use super::registry::HierarchyRegistry;
use super::types::{Level, LevelSpec};

#[allow(clippy::expect_used)] // Static patterns that are guaranteed to be valid
fn spec(level: Level, pattern: &str) -> LevelSpec {
    LevelSpec::new(level, Regex::new(pattern).expect("valid regex"))
}

/// Create the hierarchy registry for Korean statutes.
///
/// Levels are registered in classification priority order:
///
/// ```text
/// 제1편 ...              part       (heading only)
/// 제1장 ...              chapter    (heading only)
/// 제1절 ...              section    (heading only)
/// 제3조의2(정의) ...     article    number, title, rest
/// ① ...                  paragraph  circled digit ①..⑳
/// 1. ...                 item       decimal
/// 가. ...                sub-item   single Hangul syllable
/// ```
#[must_use]
pub fn create_korean_law_hierarchy() -> HierarchyRegistry {
    let mut registry = HierarchyRegistry::new();

    registry.register(spec(Level::Part, r"^제[\d\s]+편"));
    registry.register(spec(Level::Chapter, r"^제[\d\s]+장"));
    registry.register(spec(Level::Section, r"^제[\d\s]+절"));
    registry.register(spec(Level::Article, r"^제(\d+(?:의\d+)?)조\s*\((.*?)\)(.*)"));
    registry.register(spec(Level::Paragraph, r"^([①-⑳])\s*(.*)"));
    registry.register(spec(Level::Item, r"^(\d+)\.\s*(.*)"));
    registry.register(spec(Level::SubItem, r"^([가-힣])\.\s*(.*)"));

    registry
}

static KOREAN_LAW_HIERARCHY: LazyLock<HierarchyRegistry> =
    LazyLock::new(create_korean_law_hierarchy);

/// Shared instance of [`create_korean_law_hierarchy`].
#[must_use]
pub fn korean_law_hierarchy() -> &'static HierarchyRegistry {
    &KOREAN_LAW_HIERARCHY
}
