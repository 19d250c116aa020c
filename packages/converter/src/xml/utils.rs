//! Helpers for walking `word/document.xml`.
//!
//! Tag names are compared without their namespace prefix, so `w:body` and
//! `body` are treated alike.

use roxmltree::Node;

/// Get the tag name without namespace prefix.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use lexvis_converter::xml::get_tag_name;
///
/// let xml = r#"<w:body xmlns:w="urn:w"><w:p/></w:body>"#;
/// let doc = Document::parse(xml).unwrap();
/// assert_eq!(get_tag_name(doc.root_element()), "body");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Check if a node is an element with the given tag name.
pub fn has_tag(node: Node<'_, '_>, tag: &str) -> bool {
    node.is_element() && get_tag_name(node) == tag
}

/// Find the first child element with the given tag name.
pub fn find_child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|child| has_tag(*child, tag))
}

/// Find all child elements with the given tag name.
pub fn find_children<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(move |child| has_tag(*child, tag))
}

/// Get all element children of a node.
pub fn element_children<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|child| child.is_element())
}

/// Top-level paragraphs of the document body, in document order.
///
/// Paragraphs nested in tables or text boxes are not included.
pub fn body_paragraphs<'a, 'input>(
    document: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    let body = if has_tag(document, "body") {
        Some(document)
    } else {
        find_child(document, "body")
    };
    body.into_iter()
        .flat_map(|body| find_children(body, "p"))
}

/// Visible text of one paragraph.
///
/// Text runs are concatenated, tabs become `\t`, line breaks become a space.
/// Deleted revisions and nested paragraphs are skipped.
pub fn paragraph_text(paragraph: Node<'_, '_>) -> String {
    let mut text = String::new();
    collect_text(paragraph, &mut text);
    text
}

fn collect_text(node: Node<'_, '_>, out: &mut String) {
    for child in element_children(node) {
        match get_tag_name(child) {
            "t" => out.push_str(child.text().unwrap_or_default()),
            "tab" => out.push('\t'),
            "br" | "cr" => out.push(' '),
            "del" | "p" => {}
            _ => collect_text(child, out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    const W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

    fn wrap(body: &str) -> String {
        format!(r#"<w:document xmlns:w="{W}"><w:body>{body}</w:body></w:document>"#)
    }

    #[test]
    fn test_get_tag_name_with_namespace() {
        let xml = wrap("");
        let doc = Document::parse(&xml).unwrap();
        assert_eq!(get_tag_name(doc.root_element()), "document");
    }

    #[test]
    fn test_find_child_and_children() {
        let xml = r#"<root><item>1</item><other/><item>2</item></root>"#;
        let doc = Document::parse(xml).unwrap();
        let root = doc.root_element();

        assert!(find_child(root, "other").is_some());
        assert!(find_child(root, "missing").is_none());
        assert_eq!(find_children(root, "item").count(), 2);
        assert_eq!(element_children(root).count(), 3);
    }

    #[test]
    fn test_body_paragraphs_skips_tables() {
        let xml = wrap(
            "<w:p><w:r><w:t>하나</w:t></w:r></w:p>\
             <w:tbl><w:tr><w:tc><w:p><w:r><w:t>표</w:t></w:r></w:p></w:tc></w:tr></w:tbl>\
             <w:p><w:r><w:t>둘</w:t></w:r></w:p>",
        );
        let doc = Document::parse(&xml).unwrap();

        let texts: Vec<_> = body_paragraphs(doc.root_element())
            .map(paragraph_text)
            .collect();
        assert_eq!(texts, vec!["하나", "둘"]);
    }

    #[test]
    fn test_paragraph_text_joins_runs() {
        let xml = wrap(
            "<w:p><w:r><w:t>제1조</w:t></w:r><w:r><w:t xml:space=\"preserve\">(목적) </w:t></w:r>\
             <w:r><w:t>본문</w:t></w:r></w:p>",
        );
        let doc = Document::parse(&xml).unwrap();
        let paragraph = body_paragraphs(doc.root_element()).next().unwrap();

        assert_eq!(paragraph_text(paragraph), "제1조(목적) 본문");
    }

    #[test]
    fn test_paragraph_text_tabs_breaks_and_deletions() {
        let xml = wrap(
            "<w:p><w:r><w:t>가</w:t><w:tab/><w:t>나</w:t><w:br/><w:t>다</w:t></w:r>\
             <w:del><w:r><w:delText>삭제</w:delText></w:r></w:del>\
             <w:ins><w:r><w:t>라</w:t></w:r></w:ins></w:p>",
        );
        let doc = Document::parse(&xml).unwrap();
        let paragraph = body_paragraphs(doc.root_element()).next().unwrap();

        assert_eq!(paragraph_text(paragraph), "가\t나 다라");
    }

    #[test]
    fn test_body_paragraphs_without_body() {
        let doc = Document::parse("<root/>").unwrap();
        assert_eq!(body_paragraphs(doc.root_element()).count(), 0);
    }
}
