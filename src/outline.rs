//! Heading tree construction.
//!
//! Headings are stored in an arena and addressed by [`NodeId`], so the
//! builder can keep positions of nodes whose child lists are still growing.
//! Parents are resolved with a per-level frontier of the most recent
//! heading at each level. When a heading skips a level and has no natural
//! parent, it is adopted by the fallback anchor: the deepest node of the
//! unbroken level chain started at the synthetic root.

use crate::headings::MARKER;

/// Deepest heading level accepted into the outline.
pub const MAX_LEVEL: usize = 6;

/// Prefix distinguishing table-of-contents anchors from heading anchors.
pub const TOC_PREFIX: &str = "toc-";

/// Position of a node inside an [`Outline`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HeadingNode {
    pub title: String,
    pub identifier: String,
    pub level: usize,
    pub children: Vec<NodeId>,
}

/// The heading tree of one document, rooted at a synthetic level-0 node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outline {
    nodes: Vec<HeadingNode>,
}

impl Outline {
    /// The synthetic root. It is never rendered.
    pub const ROOT: NodeId = NodeId(0);

    fn new() -> Self {
        Self {
            nodes: vec![HeadingNode::default()],
        }
    }

    /// Look up a node.
    ///
    /// # Panics
    /// Panics if `id` was not produced by this outline.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &HeadingNode {
        &self.nodes[id.0]
    }

    /// Headings attached directly under the synthetic root.
    #[must_use]
    pub fn top_level(&self) -> &[NodeId] {
        &self.node(Self::ROOT).children
    }

    /// Number of headings, excluding the root.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn attach(&mut self, parent: NodeId, node: HeadingNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        self.nodes[parent.0].children.push(id);
        id
    }
}

impl Default for Outline {
    fn default() -> Self {
        Self::new()
    }
}

/// Incrementally builds an [`Outline`] in document order.
#[derive(Debug)]
pub struct OutlineBuilder {
    outline: Outline,
    frontier: [Option<NodeId>; MAX_LEVEL + 1],
    fallback: NodeId,
}

impl OutlineBuilder {
    #[must_use]
    pub fn new() -> Self {
        let mut frontier = [None; MAX_LEVEL + 1];
        frontier[0] = Some(Outline::ROOT);
        Self {
            outline: Outline::new(),
            frontier,
            fallback: Outline::ROOT,
        }
    }

    /// Attach a heading and return its position.
    ///
    /// Returns `None`, leaving the tree untouched, when `level` is outside
    /// `1..=MAX_LEVEL`.
    pub fn push(&mut self, level: usize, title: &str, identifier: &str) -> Option<NodeId> {
        if !(1..=MAX_LEVEL).contains(&level) {
            return None;
        }
        let parent = self.frontier[level - 1].unwrap_or(self.fallback);
        let id = self.outline.attach(
            parent,
            HeadingNode {
                title: title.to_string(),
                identifier: identifier.to_string(),
                level,
                children: Vec::new(),
            },
        );
        self.frontier[level] = Some(id);
        if level == self.outline.node(self.fallback).level + 1 {
            self.fallback = id;
        }
        Some(id)
    }

    #[must_use]
    pub fn finish(self) -> Outline {
        self.outline
    }
}

impl Default for OutlineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Rebuild a heading line so it links to its table-of-contents entry and to
/// itself, and declares `identifier` as its anchor.
///
/// # Examples
///
/// ```
/// use mdtoc::outline::rewrite_heading;
/// assert_eq!(
///     rewrite_heading(2, "Install", "install"),
///     "## [Install](#toc-install) [[link](#install)] {#install}\n",
/// );
/// ```
#[must_use]
pub fn rewrite_heading(level: usize, title: &str, identifier: &str) -> String {
    let markers = MARKER.to_string().repeat(level);
    format!(
        "{markers} [{title}](#{TOC_PREFIX}{identifier}) [[link](#{identifier})] {{#{identifier}}}\n"
    )
}
