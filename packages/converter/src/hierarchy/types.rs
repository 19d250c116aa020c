//! Types for the line classification system.

use regex::Regex;

use crate::types::ContainerKind;

/// Structural level a line can introduce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// 편
    Part,
    /// 장
    Chapter,
    /// 절
    Section,
    /// 조
    Article,
    /// 항 (①..⑳)
    Paragraph,
    /// 호 (1., 2., ...)
    Item,
    /// 목 (가., 나., ...)
    SubItem,
}

impl Level {
    /// Container kind for the grouping levels.
    #[must_use]
    pub fn container_kind(&self) -> Option<ContainerKind> {
        match self {
            Self::Part => Some(ContainerKind::Part),
            Self::Chapter => Some(ContainerKind::Chapter),
            Self::Section => Some(ContainerKind::Section),
            _ => None,
        }
    }
}

/// Declarative specification of one structural level.
///
/// Capture group conventions:
/// - containers: none needed, the whole line becomes the title
/// - article: (1) number, (2) heading title, (3) rest of the line
/// - paragraph, item, sub-item: (1) marker, (2) text
#[derive(Debug, Clone)]
pub struct LevelSpec {
    pub level: Level,
    pub pattern: Regex,
}

impl LevelSpec {
    #[must_use]
    pub fn new(level: Level, pattern: Regex) -> Self {
        Self { level, pattern }
    }
}

/// Result of classifying one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineMatch<'a> {
    /// Part, chapter or section heading; the title is the raw line.
    Container { kind: ContainerKind, title: &'a str },

    /// Article heading such as "제3조의2(정의) 본문".
    Article {
        number: &'a str,
        title: &'a str,
        rest: &'a str,
    },

    /// Paragraph marker line.
    Paragraph { number: &'a str, text: &'a str },

    /// Item marker line.
    Item { number: &'a str, text: &'a str },

    /// Sub-item marker line.
    SubItem { number: &'a str, text: &'a str },
}

impl LineMatch<'_> {
    /// Level of the matched line.
    #[must_use]
    pub fn level(&self) -> Level {
        match self {
            Self::Container { kind, .. } => match kind {
                ContainerKind::Part => Level::Part,
                ContainerKind::Chapter => Level::Chapter,
                ContainerKind::Section => Level::Section,
            },
            Self::Article { .. } => Level::Article,
            Self::Paragraph { .. } => Level::Paragraph,
            Self::Item { .. } => Level::Item,
            Self::SubItem { .. } => Level::SubItem,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_container_kind() {
        assert_eq!(Level::Part.container_kind(), Some(ContainerKind::Part));
        assert_eq!(Level::Section.container_kind(), Some(ContainerKind::Section));
        assert_eq!(Level::Article.container_kind(), None);
        assert_eq!(Level::SubItem.container_kind(), None);
    }

    #[test]
    fn test_line_match_level() {
        let m = LineMatch::Container {
            kind: ContainerKind::Chapter,
            title: "제1장 총칙",
        };
        assert_eq!(m.level(), Level::Chapter);

        let m = LineMatch::Item {
            number: "1",
            text: "성인",
        };
        assert_eq!(m.level(), Level::Item);
    }
}
