//! # Table of Contents
//!
//! An independent read-only pass over the lines: every header line becomes a
//! [`TocItem`]. Block parsing is unaffected whether or not this runs.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::{
    blocks::kinds::Heading,
    source::LineSource,
};

static NON_SLUG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[^a-z0-9-]").expect("slug pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocItem {
    pub title: String,
    /// 1, 2 or 3.
    pub level: u8,
    pub slug: String,
}

/// Collects header lines in source order.
///
/// Headers are matched on every line, including lines inside code fences.
pub fn generate_toc(text: &str) -> Vec<TocItem> {
    toc_for_lines(&LineSource::new(text))
}

pub fn toc_for_lines(src: &LineSource) -> Vec<TocItem> {
    src.iter()
        .filter_map(|line| Heading::match_line(line.text()))
        .map(|(level, title)| TocItem {
            title: title.to_string(),
            level,
            slug: slugify(title),
        })
        .collect()
}

/// Lowercases, turns spaces into `-` and drops anything outside `[a-z0-9-]`.
pub fn slugify(title: &str) -> String {
    let dashed = title.to_lowercase().replace(' ', "-");
    NON_SLUG.replace_all(&dashed, "").into_owned()
}

/// A TOC item with the deeper items that follow it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocNode {
    pub item: TocItem,
    pub children: Vec<TocNode>,
}

/// Nests each item under the closest preceding item of a shallower level.
///
/// Items with no shallower predecessor become roots, so a document starting
/// at `##` still yields a usable outline.
pub fn build_outline(items: &[TocItem]) -> Vec<TocNode> {
    let mut roots: Vec<TocNode> = vec![];
    // Path of indices from a root to the most recent node.
    let mut path: Vec<usize> = vec![];

    for item in items {
        while let Some(depth) = path.len().checked_sub(1) {
            let open = node_at(&roots, &path[..=depth]);
            if open.is_some_and(|n| n.item.level < item.level) {
                break;
            }
            path.pop();
        }
        let node = TocNode {
            item: item.clone(),
            children: vec![],
        };
        match node_at_mut(&mut roots, &path) {
            Some(parent) => {
                parent.children.push(node);
                path.push(parent.children.len() - 1);
            }
            None => {
                roots.push(node);
                path = vec![roots.len() - 1];
            }
        }
    }
    roots
}

fn node_at<'a>(roots: &'a [TocNode], path: &[usize]) -> Option<&'a TocNode> {
    let (first, rest) = path.split_first()?;
    rest.iter()
        .try_fold(roots.get(*first)?, |node, &i| node.children.get(i))
}

fn node_at_mut<'a>(roots: &'a mut [TocNode], path: &[usize]) -> Option<&'a mut TocNode> {
    let (first, rest) = path.split_first()?;
    rest.iter()
        .try_fold(roots.get_mut(*first)?, |node, &i| node.children.get_mut(i))
}
