//! Normalization applied to an article when parsing moves past it.

use crate::types::{Article, Paragraph};

/// Marker of the first paragraph.
const FIRST_PARAGRAPH: char = '①';

/// Finalize an article before it is committed to the tree.
///
/// - Leading content starting with ① becomes paragraph ① at the front.
/// - Empty item lists are dropped; for paragraphs that keep their items,
///   empty sub-item lists are dropped.
/// - An empty paragraph list is dropped.
///
/// Applying this twice gives the same result as applying it once.
pub fn finalize_article(article: &mut Article) {
    let leading = article.leading_content.trim();
    if let Some(rest) = leading.strip_prefix(FIRST_PARAGRAPH) {
        let paragraph = Paragraph::new(FIRST_PARAGRAPH.to_string(), rest.trim_start());
        article
            .paragraphs
            .get_or_insert_with(Vec::new)
            .insert(0, paragraph);
        article.leading_content.clear();
    }

    if let Some(paragraphs) = article.paragraphs.as_mut() {
        for paragraph in paragraphs.iter_mut() {
            prune_paragraph(paragraph);
        }
    }

    if article.paragraphs.as_ref().is_some_and(Vec::is_empty) {
        article.paragraphs = None;
    }
}

fn prune_paragraph(paragraph: &mut Paragraph) {
    if paragraph.items.as_ref().is_some_and(Vec::is_empty) {
        paragraph.items = None;
        return;
    }

    for item in paragraph.items.iter_mut().flatten() {
        if item.sub_items.as_ref().is_some_and(Vec::is_empty) {
            item.sub_items = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Item, SubItem};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_glued_first_paragraph_is_split_off() {
        let mut article = Article::new("2", "정의", "①이 법에서 사용하는 용어의 뜻은 다음과 같다.");
        article.push_paragraph(Paragraph::new("②", "그 밖의 용어"));

        finalize_article(&mut article);

        assert_eq!(article.leading_content, "");
        let paragraphs = article.paragraphs();
        assert_eq!(paragraphs.len(), 2);
        assert_eq!(paragraphs[0].number, "①");
        assert_eq!(paragraphs[0].content, "이 법에서 사용하는 용어의 뜻은 다음과 같다.");
        assert_eq!(paragraphs[1].number, "②");
        assert_eq!(paragraphs[0].items, None);
    }

    #[test]
    fn test_glued_paragraph_with_space() {
        let mut article = Article::new("4", "적용", "① 본문");
        finalize_article(&mut article);
        assert_eq!(article.paragraphs()[0].content, "본문");
    }

    #[test]
    fn test_plain_leading_content_is_kept() {
        let mut article = Article::new("1", "목적", "이 법은 국민의 안전을 목적으로 한다.");
        finalize_article(&mut article);

        assert_eq!(article.leading_content, "이 법은 국민의 안전을 목적으로 한다.");
        assert_eq!(article.paragraphs, None);
    }

    #[test]
    fn test_other_circled_digit_is_not_split_off() {
        let mut article = Article::new("1", "목적", "② 둘째");
        finalize_article(&mut article);
        assert_eq!(article.leading_content, "② 둘째");
        assert_eq!(article.paragraphs, None);
    }

    #[test]
    fn test_prunes_empty_sequences() {
        let mut article = Article::new("1", "목적", "");
        let mut with_items = Paragraph::new("①", "a");
        with_items.push_item(Item::new("1", "성인"));
        let mut with_sub_items = Item::new("2", "미성년자");
        with_sub_items.push_sub_item(SubItem::new("가", "남성"));
        with_items.push_item(with_sub_items);
        article.push_paragraph(with_items);
        article.push_paragraph(Paragraph::new("②", "b"));

        finalize_article(&mut article);

        let paragraphs = article.paragraphs();
        let items = paragraphs[0].items();
        assert_eq!(items[0].sub_items, None);
        assert_eq!(items[1].sub_items(), &[SubItem::new("가", "남성")]);
        assert_eq!(paragraphs[1].items, None);
    }

    #[test]
    fn test_finalize_is_idempotent() {
        let mut article = Article::new("3의2", "정의", "①첫째");
        let mut paragraph = Paragraph::new("②", "둘째");
        paragraph.push_item(Item::new("1", "하나"));
        article.push_paragraph(paragraph);

        finalize_article(&mut article);
        let once = article.clone();
        finalize_article(&mut article);

        assert_eq!(article, once);
        assert_eq!(article.paragraphs().len(), 2);
    }

    #[test]
    fn test_finalize_empty_article_is_idempotent() {
        let mut article = Article::new("9", "삭제", "");
        finalize_article(&mut article);
        finalize_article(&mut article);
        assert_eq!(article.paragraphs, None);
        assert_eq!(article.leading_content, "");
    }
}
