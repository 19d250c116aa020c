//! Navigation helpers over the growing content tree.
//!
//! Insertion points are always found along the "last child" chain: the most
//! recently appended node at each level. Lookups walk that chain read-only
//! and report a depth; mutation then descends exactly that many levels.

use crate::types::{ContainerKind, ContentNode};

/// Depth of the children list of the nearest container of `kind` on the
/// last-child chain, or `None` when the chain holds no such container.
///
/// Depth 0 is `contents` itself, depth 1 the children of its last node, etc.
#[must_use]
pub fn ancestor_depth(contents: &[ContentNode], kind: ContainerKind) -> Option<usize> {
    let mut list = contents;
    let mut depth = 0;

    while let Some(last) = list.last() {
        let Some(children) = last.children() else {
            break;
        };
        depth += 1;
        if last.kind() == Some(kind) {
            return Some(depth);
        }
        list = children.as_slice();
    }

    None
}

/// Depth of the deepest open container on the last-child chain.
///
/// The walk stops at an article or at an empty children list.
#[must_use]
pub fn open_depth(contents: &[ContentNode]) -> usize {
    let mut list = contents;
    let mut depth = 0;

    while let Some(children) = list.last().and_then(ContentNode::children) {
        depth += 1;
        list = children.as_slice();
    }

    depth
}

/// Descend `depth` levels along the last-child chain.
fn descend_mut(contents: &mut Vec<ContentNode>, depth: usize) -> Option<&mut Vec<ContentNode>> {
    let mut list = contents;
    for _ in 0..depth {
        list = list.last_mut()?.children_mut()?;
    }
    Some(list)
}

fn append_at_depth(contents: &mut Vec<ContentNode>, depth: usize, node: ContentNode) {
    match descend_mut(contents, depth) {
        Some(list) => list.push(node),
        None => contents.push(node),
    }
}

/// Append a node under the nearest container of kind `parent`.
///
/// Without a parent kind, or when no such container is open, the node is
/// appended to the top level.
pub fn append_under(contents: &mut Vec<ContentNode>, parent: Option<ContainerKind>, node: ContentNode) {
    let depth = parent
        .and_then(|kind| ancestor_depth(contents, kind))
        .unwrap_or(0);
    append_at_depth(contents, depth, node);
}

/// Append a node to the deepest currently open container.
pub fn append_to_deepest(contents: &mut Vec<ContentNode>, node: ContentNode) {
    let depth = open_depth(contents);
    append_at_depth(contents, depth, node);
}
