//! Core data types for converted statutes.
//!
//! The content tree is a sum type per level: containers (편/장/절) hold
//! further nodes, articles (조) hold paragraphs (항), paragraphs hold items
//! (호) and items hold sub-items (목). Optional sequences are `Option<Vec<_>>`
//! so that "absent" and "present but empty" stay distinguishable until an
//! article is finalized.
//!
//! Serialized field names follow the JSON consumed by the LexVis front end
//! (`num`, `content`, `sub_items`, `mst`, `promulgDate`, ...).

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

/// Structural container levels, outermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerKind {
    /// 편
    Part,
    /// 장
    Chapter,
    /// 절
    Section,
}

impl ContainerKind {
    /// The container level a heading of this kind is nested under, if any.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        match self {
            Self::Part => None,
            Self::Chapter => Some(Self::Part),
            Self::Section => Some(Self::Chapter),
        }
    }
}

/// Grouping node with a raw heading and ordered children.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    /// Raw heading line, e.g. "제1장 총칙".
    pub title: String,
    pub children: Vec<ContentNode>,
}

impl Container {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            children: Vec::new(),
        }
    }
}

/// A node of the content tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentNode {
    Part(Container),
    Chapter(Container),
    Section(Container),
    Article(Article),
}

impl ContentNode {
    /// Create an empty container node of the given kind.
    #[must_use]
    pub fn container(kind: ContainerKind, title: impl Into<String>) -> Self {
        let container = Container::new(title);
        match kind {
            ContainerKind::Part => Self::Part(container),
            ContainerKind::Chapter => Self::Chapter(container),
            ContainerKind::Section => Self::Section(container),
        }
    }

    /// Container kind of this node, `None` for articles.
    #[must_use]
    pub fn kind(&self) -> Option<ContainerKind> {
        match self {
            Self::Part(_) => Some(ContainerKind::Part),
            Self::Chapter(_) => Some(ContainerKind::Chapter),
            Self::Section(_) => Some(ContainerKind::Section),
            Self::Article(_) => None,
        }
    }

    /// Children of a container node.
    #[must_use]
    pub fn children(&self) -> Option<&Vec<ContentNode>> {
        match self {
            Self::Part(c) | Self::Chapter(c) | Self::Section(c) => Some(&c.children),
            Self::Article(_) => None,
        }
    }

    /// Mutable children of a container node.
    pub fn children_mut(&mut self) -> Option<&mut Vec<ContentNode>> {
        match self {
            Self::Part(c) | Self::Chapter(c) | Self::Section(c) => Some(&mut c.children),
            Self::Article(_) => None,
        }
    }

    #[must_use]
    pub fn as_article(&self) -> Option<&Article> {
        match self {
            Self::Article(article) => Some(article),
            _ => None,
        }
    }
}

/// A single article (조).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Article number, possibly in branch form ("3의2").
    #[serde(rename = "num")]
    pub number: String,

    /// Text inside the parenthesised heading.
    pub title: String,

    /// Free text following the heading, before the first paragraph.
    #[serde(rename = "content")]
    pub leading_content: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paragraphs: Option<Vec<Paragraph>>,
}

impl Article {
    /// Open a new article with an empty paragraph sequence.
    #[must_use]
    pub fn new(
        number: impl Into<String>,
        title: impl Into<String>,
        leading_content: impl Into<String>,
    ) -> Self {
        Self {
            number: number.into(),
            title: title.into(),
            leading_content: leading_content.into(),
            paragraphs: Some(Vec::new()),
        }
    }

    /// Paragraphs of the article, empty when the sequence is absent.
    #[must_use]
    pub fn paragraphs(&self) -> &[Paragraph] {
        self.paragraphs.as_deref().unwrap_or_default()
    }

    pub fn push_paragraph(&mut self, paragraph: Paragraph) {
        self.paragraphs.get_or_insert_with(Vec::new).push(paragraph);
    }

    pub fn last_paragraph_mut(&mut self) -> Option<&mut Paragraph> {
        self.paragraphs.as_mut()?.last_mut()
    }
}

/// A paragraph (항), numbered with a circled digit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Circled-digit marker, e.g. "①".
    #[serde(rename = "num")]
    pub number: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Item>>,
}

impl Paragraph {
    #[must_use]
    pub fn new(number: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            content: content.into(),
            items: Some(Vec::new()),
        }
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        self.items.as_deref().unwrap_or_default()
    }

    pub fn push_item(&mut self, item: Item) {
        self.items.get_or_insert_with(Vec::new).push(item);
    }

    pub fn last_item_mut(&mut self) -> Option<&mut Item> {
        self.items.as_mut()?.last_mut()
    }
}

/// An item (호), numbered with a decimal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "num")]
    pub number: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_items: Option<Vec<SubItem>>,
}

impl Item {
    #[must_use]
    pub fn new(number: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            content: content.into(),
            sub_items: Some(Vec::new()),
        }
    }

    #[must_use]
    pub fn sub_items(&self) -> &[SubItem] {
        self.sub_items.as_deref().unwrap_or_default()
    }

    pub fn push_sub_item(&mut self, sub_item: SubItem) {
        self.sub_items.get_or_insert_with(Vec::new).push(sub_item);
    }
}

/// A sub-item (목), numbered with a single Hangul syllable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubItem {
    #[serde(rename = "num")]
    pub number: String,
    pub content: String,
}

impl SubItem {
    #[must_use]
    pub fn new(number: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            content: content.into(),
        }
    }
}

/// Header fields found near the top of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentMetadata {
    /// Issuing ministry (소관부처).
    pub department: String,

    /// Promulgation date as `YYYYMMDD`, or empty.
    pub promulgation_date: String,

    /// Enforcement date as `YYYYMMDD`, or empty.
    pub enforcement_date: String,
}

/// One converted document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    #[serde(rename = "mst")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub doc_type: String,
    pub department: String,
    #[serde(rename = "promulgDate")]
    pub promulgation_date: String,
    #[serde(rename = "enforcDate")]
    pub enforcement_date: String,
    pub contents: Vec<ContentNode>,
}

impl DocumentRecord {
    /// Count articles anywhere in the content tree.
    #[must_use]
    pub fn article_count(&self) -> usize {
        count_articles(&self.contents)
    }
}

fn count_articles(nodes: &[ContentNode]) -> usize {
    nodes
        .iter()
        .map(|node| match node {
            ContentNode::Article(_) => 1,
            other => other.children().map_or(0, |c| count_articles(c)),
        })
        .sum()
}

/// Render the content tree as an indented outline, one node per line.
///
/// # Examples
/// ```
/// use lexvis_converter::types::{outline, Article, ContainerKind, ContentNode};
///
/// let mut chapter = ContentNode::container(ContainerKind::Chapter, "제1장 총칙");
/// if let Some(children) = chapter.children_mut() {
///     children.push(ContentNode::Article(Article::new("1", "목적", "")));
/// }
/// assert_eq!(outline(&[chapter]), "제1장 총칙\n  제1조(목적)\n");
/// ```
#[must_use]
pub fn outline(nodes: &[ContentNode]) -> String {
    let mut out = String::new();
    write_outline(&mut out, nodes, 0);
    out
}

fn write_outline(out: &mut String, nodes: &[ContentNode], depth: usize) {
    let indent = "  ".repeat(depth);
    for node in nodes {
        match node {
            ContentNode::Part(c) | ContentNode::Chapter(c) | ContentNode::Section(c) => {
                let _ = writeln!(out, "{indent}{}", c.title);
                write_outline(out, &c.children, depth + 1);
            }
            ContentNode::Article(article) => {
                let _ = write!(out, "{indent}제{}조({})", article.number, article.title);
                let count = article.paragraphs().len();
                if count > 0 {
                    let _ = write!(out, " [{count}항]");
                }
                out.push('\n');
            }
        }
    }
}
