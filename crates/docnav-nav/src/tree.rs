//! Resolved navigation tree.
//!
//! Produced by [`NavigationBuilder`](crate::NavigationBuilder) and handed to
//! the renderer as-is. Fields are read-only; every link already carries its
//! resolved target.

use serde::{Deserialize, Serialize};

/// Ordered root entries of the sidebar.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NavigationTree {
    items: Vec<NavNode>,
}

/// Resolved sidebar entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NavNode {
    /// Navigable leaf.
    Link(NavLink),
    /// Entry with at least one child.
    Group(NavGroup),
    /// "Coming soon" entry, never navigable.
    Placeholder(NavPlaceholder),
}

/// Navigable leaf.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavLink {
    label: String,
    target: String,
    resolved_target: String,
}

/// Group of entries.
///
/// Deserialization goes through [`RawGroup`] so a snapshot read back from
/// JSON cannot hold a group without children.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawGroup")]
pub struct NavGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    resolved_target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    base_path: Option<String>,
    collapsed: bool,
    children: Vec<NavNode>,
}

/// Group as written in a snapshot, before shape checks.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawGroup {
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    target: Option<String>,
    #[serde(default)]
    resolved_target: Option<String>,
    #[serde(default)]
    base_path: Option<String>,
    #[serde(default)]
    collapsed: bool,
    children: Vec<NavNode>,
}

impl TryFrom<RawGroup> for NavGroup {
    type Error = String;

    fn try_from(raw: RawGroup) -> Result<Self, Self::Error> {
        if raw.children.is_empty() {
            return Err("a group requires at least one child".to_owned());
        }
        if raw.target.is_some() != raw.resolved_target.is_some() {
            return Err("a group header needs both target and resolvedTarget".to_owned());
        }
        Ok(Self {
            label: raw.label,
            target: raw.target,
            resolved_target: raw.resolved_target,
            base_path: raw.base_path,
            collapsed: raw.collapsed,
            children: raw.children,
        })
    }
}

/// Label-only entry for unpublished content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavPlaceholder {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
}

/// A navigable entry seen during traversal: a link or a clickable group header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry<'a> {
    /// Display text.
    pub label: Option<&'a str>,
    /// Target as declared.
    pub target: &'a str,
    /// Target after base-path resolution.
    pub resolved_target: &'a str,
}

/// Ancestor group on the way to an entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BreadcrumbItem {
    /// Group label.
    pub label: Option<String>,
    /// Group header link, if the group is clickable.
    pub resolved_target: Option<String>,
}

/// Node counts for a tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TreeStats {
    /// Link leaves.
    pub links: usize,
    /// Groups.
    pub groups: usize,
    /// Placeholders.
    pub placeholders: usize,
    /// Deepest nesting level (1 for a flat sidebar, 0 when empty).
    pub depth: usize,
}

impl NavigationTree {
    pub(crate) fn new(items: Vec<NavNode>) -> Self {
        Self { items }
    }

    /// Root entries in declaration order.
    #[must_use]
    pub fn items(&self) -> &[NavNode] {
        &self.items
    }

    /// True when the sidebar has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Every navigable entry in render order (depth-first, pre-order).
    ///
    /// Group headers come before their children. Placeholders are skipped.
    #[must_use]
    pub fn links(&self) -> Vec<NavEntry<'_>> {
        fn walk<'a>(nodes: &'a [NavNode], out: &mut Vec<NavEntry<'a>>) {
            for node in nodes {
                match node {
                    NavNode::Link(link) => out.push(NavEntry {
                        label: Some(&link.label),
                        target: &link.target,
                        resolved_target: &link.resolved_target,
                    }),
                    NavNode::Group(group) => {
                        if let (Some(target), Some(resolved)) =
                            (&group.target, &group.resolved_target)
                        {
                            out.push(NavEntry {
                                label: group.label.as_deref(),
                                target: target.as_str(),
                                resolved_target: resolved.as_str(),
                            });
                        }
                        walk(&group.children, out);
                    }
                    NavNode::Placeholder(_) => {}
                }
            }
        }

        let mut out = Vec::new();
        walk(&self.items, &mut out);
        out
    }

    /// Ancestor groups of the entry resolving to `resolved_target`.
    ///
    /// Returns `None` when no entry has that target. The entry itself is not
    /// included, so a root-level link yields an empty trail.
    #[must_use]
    pub fn breadcrumbs(&self, resolved_target: &str) -> Option<Vec<BreadcrumbItem>> {
        fn search(
            nodes: &[NavNode],
            wanted: &str,
            trail: &mut Vec<BreadcrumbItem>,
        ) -> bool {
            for node in nodes {
                match node {
                    NavNode::Link(link) if link.resolved_target == wanted => return true,
                    NavNode::Group(group) => {
                        if group.resolved_target.as_deref() == Some(wanted) {
                            return true;
                        }
                        trail.push(BreadcrumbItem {
                            label: group.label.clone(),
                            resolved_target: group.resolved_target.clone(),
                        });
                        if search(&group.children, wanted, trail) {
                            return true;
                        }
                        trail.pop();
                    }
                    NavNode::Link(_) | NavNode::Placeholder(_) => {}
                }
            }
            false
        }

        let mut trail = Vec::new();
        search(&self.items, resolved_target, &mut trail).then_some(trail)
    }

    /// Count nodes by kind.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        fn walk(nodes: &[NavNode], level: usize, stats: &mut TreeStats) {
            if !nodes.is_empty() {
                stats.depth = stats.depth.max(level);
            }
            for node in nodes {
                match node {
                    NavNode::Link(_) => stats.links += 1,
                    NavNode::Placeholder(_) => stats.placeholders += 1,
                    NavNode::Group(group) => {
                        stats.groups += 1;
                        walk(&group.children, level + 1, stats);
                    }
                }
            }
        }

        let mut stats = TreeStats::default();
        walk(&self.items, 1, &mut stats);
        stats
    }
}

impl NavNode {
    /// Display text, if any.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Link(link) => Some(&link.label),
            Self::Group(group) => group.label.as_deref(),
            Self::Placeholder(placeholder) => placeholder.label.as_deref(),
        }
    }

    /// Resolved link. Always `None` for placeholders.
    #[must_use]
    pub fn resolved_target(&self) -> Option<&str> {
        match self {
            Self::Link(link) => Some(&link.resolved_target),
            Self::Group(group) => group.resolved_target.as_deref(),
            Self::Placeholder(_) => None,
        }
    }

    /// Children in declaration order; empty for leaves.
    #[must_use]
    pub fn children(&self) -> &[NavNode] {
        match self {
            Self::Group(group) => &group.children,
            Self::Link(_) | Self::Placeholder(_) => &[],
        }
    }
}

impl NavLink {
    pub(crate) fn new(label: String, target: String, resolved_target: String) -> Self {
        Self {
            label,
            target,
            resolved_target,
        }
    }

    /// Display text.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Target as declared.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Target after base-path resolution.
    #[must_use]
    pub fn resolved_target(&self) -> &str {
        &self.resolved_target
    }
}

impl NavGroup {
    pub(crate) fn new(
        label: Option<String>,
        header: Option<(String, String)>,
        base_path: Option<String>,
        collapsed: bool,
        children: Vec<NavNode>,
    ) -> Self {
        let (target, resolved_target) = header.unzip();
        Self {
            label,
            target,
            resolved_target,
            base_path,
            collapsed,
            children,
        }
    }

    /// Display text.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Header link as declared.
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// Header link after base-path resolution.
    #[must_use]
    pub fn resolved_target(&self) -> Option<&str> {
        self.resolved_target.as_deref()
    }

    /// Base path in effect for this group's children.
    #[must_use]
    pub fn base_path(&self) -> Option<&str> {
        self.base_path.as_deref()
    }

    /// Initial collapse state.
    #[must_use]
    pub fn collapsed(&self) -> bool {
        self.collapsed
    }

    /// Children in declaration order, never empty.
    #[must_use]
    pub fn children(&self) -> &[NavNode] {
        &self.children
    }
}

impl NavPlaceholder {
    pub(crate) fn new(label: Option<String>) -> Self {
        Self { label }
    }

    /// Display text.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}
