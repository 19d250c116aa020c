//! Ordered registry of level specifications.

use super::types::{Level, LevelSpec, LineMatch};

/// Registry of level specifications, kept in priority order.
///
/// The first registered spec whose pattern matches a line wins, so a line
/// is assigned to at most one level.
#[derive(Debug, Clone, Default)]
pub struct HierarchyRegistry {
    specs: Vec<LevelSpec>,
}

impl HierarchyRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self { specs: Vec::new() }
    }

    /// Register a level specification with the lowest priority so far.
    pub fn register(&mut self, spec: LevelSpec) {
        self.specs.push(spec);
    }

    /// Registered levels in priority order.
    pub fn levels(&self) -> impl Iterator<Item = Level> + '_ {
        self.specs.iter().map(|spec| spec.level)
    }

    /// Classify a line against the registered levels.
    ///
    /// Returns `None` when no level matches.
    #[must_use]
    pub fn classify<'a>(&self, line: &'a str) -> Option<LineMatch<'a>> {
        self.specs.iter().find_map(|spec| match_spec(spec, line))
    }
}

fn match_spec<'a>(spec: &LevelSpec, line: &'a str) -> Option<LineMatch<'a>> {
    if let Some(kind) = spec.level.container_kind() {
        return spec
            .pattern
            .is_match(line)
            .then_some(LineMatch::Container { kind, title: line });
    }

    let caps = spec.pattern.captures(line)?;
    let group = |i: usize| caps.get(i).map_or("", |m| m.as_str());

    let matched = match spec.level {
        Level::Article => LineMatch::Article {
            number: group(1),
            title: group(2),
            rest: group(3).trim(),
        },
        Level::Paragraph => LineMatch::Paragraph {
            number: group(1),
            text: group(2).trim(),
        },
        Level::Item => LineMatch::Item {
            number: group(1),
            text: group(2).trim(),
        },
        Level::SubItem => LineMatch::SubItem {
            number: group(1),
            text: group(2).trim(),
        },
        Level::Part | Level::Chapter | Level::Section => return None,
    };

    Some(matched)
}
