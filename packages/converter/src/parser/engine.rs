//! Stateful tree builder that turns classified lines into a content tree.

use crate::hierarchy::{korean_law_hierarchy, HierarchyRegistry, LineMatch};
use crate::types::{Article, ContentNode, Item, Paragraph, SubItem};

use super::finalize::finalize_article;
use super::tree::{append_to_deepest, append_under};

/// Builds the content tree of one document, line by line.
///
/// Holds the growing tree and the single article that is still open. Each
/// parser belongs to exactly one document, so separate documents can be
/// parsed on separate threads.
///
/// # Examples
/// ```
/// use lexvis_converter::parser::StructureParser;
///
/// let mut parser = StructureParser::new();
/// parser.feed("제1장 총칙");
/// parser.feed("제1조(목적) 이 법은 ...");
/// let contents = parser.finish();
/// assert_eq!(contents.len(), 1);
/// ```
#[derive(Debug)]
pub struct StructureParser<'h> {
    hierarchy: &'h HierarchyRegistry,
    contents: Vec<ContentNode>,
    current_article: Option<Article>,
}

impl StructureParser<'static> {
    /// Create a parser using the Korean statute hierarchy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_hierarchy(korean_law_hierarchy())
    }
}

impl Default for StructureParser<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'h> StructureParser<'h> {
    /// Create a parser with a custom hierarchy.
    #[must_use]
    pub fn with_hierarchy(hierarchy: &'h HierarchyRegistry) -> Self {
        Self {
            hierarchy,
            contents: Vec::new(),
            current_article: None,
        }
    }

    /// The article currently being built, if any.
    #[must_use]
    pub fn current_article(&self) -> Option<&Article> {
        self.current_article.as_ref()
    }

    /// The tree committed so far, excluding the open article.
    #[must_use]
    pub fn contents(&self) -> &[ContentNode] {
        &self.contents
    }

    /// Process one line of the document.
    ///
    /// Lines that match no level, or whose level has no place to attach
    /// (e.g. an item before any paragraph), are dropped.
    pub fn feed(&mut self, line: &str) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }

        let Some(matched) = self.hierarchy.classify(line) else {
            tracing::trace!(line, "Unrecognized line, skipping");
            return;
        };

        let level = matched.level();
        let attached = match matched {
            LineMatch::Container { kind, title } => {
                append_under(
                    &mut self.contents,
                    kind.parent(),
                    ContentNode::container(kind, title),
                );
                true
            }
            LineMatch::Article {
                number,
                title,
                rest,
            } => {
                self.close_article();
                self.current_article = Some(Article::new(number, title, rest));
                true
            }
            LineMatch::Paragraph { number, text } => self.attach_paragraph(number, text),
            LineMatch::Item { number, text } => self.attach_item(number, text),
            LineMatch::SubItem { number, text } => self.attach_sub_item(number, text),
        };

        if !attached {
            tracing::trace!(line, ?level, "No open parent, skipping");
        }
    }

    /// Feed every line of a sequence.
    pub fn feed_all<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.feed(line.as_ref());
        }
    }

    /// Close the open article, if any, and return the finished tree.
    #[must_use]
    pub fn finish(mut self) -> Vec<ContentNode> {
        self.close_article();
        self.contents
    }

    /// Finalize the open article and commit it to the deepest open container.
    fn close_article(&mut self) {
        if let Some(mut article) = self.current_article.take() {
            finalize_article(&mut article);
            append_to_deepest(&mut self.contents, ContentNode::Article(article));
        }
    }

    fn attach_paragraph(&mut self, number: &str, text: &str) -> bool {
        let Some(article) = self.current_article.as_mut() else {
            return false;
        };
        article.push_paragraph(Paragraph::new(number, text));
        true
    }

    fn attach_item(&mut self, number: &str, text: &str) -> bool {
        let Some(paragraph) = self
            .current_article
            .as_mut()
            .and_then(Article::last_paragraph_mut)
        else {
            return false;
        };
        paragraph.push_item(Item::new(number, text));
        true
    }

    fn attach_sub_item(&mut self, number: &str, text: &str) -> bool {
        let Some(item) = self
            .current_article
            .as_mut()
            .and_then(Article::last_paragraph_mut)
            .and_then(Paragraph::last_item_mut)
        else {
            return false;
        };
        item.push_sub_item(SubItem::new(number, text));
        true
    }
}

/// Parse a full line sequence into a content tree.
#[must_use]
pub fn parse_structure<I, S>(lines: I) -> Vec<ContentNode>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = StructureParser::new();
    parser.feed_all(lines);
    parser.finish()
}
