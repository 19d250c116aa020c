//! WordprocessingML navigation and text extraction.

mod utils;

pub use utils::{
    body_paragraphs, element_children, find_child, find_children, get_tag_name, has_tag,
    paragraph_text,
};
