//! Declaration to tree resolution.
//!
//! Resolution is a single depth-first pass. Each node's effective base path
//! is its own `base_path` or the one inherited from the nearest ancestor, and
//! every link target is prefixed with it unless the target is an external URL.
//! Once the tree is resolved, navigable targets are checked for duplicates.

use std::collections::{BTreeSet, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::declaration::{NodeDecl, parse_sidebar};
use crate::error::{BuildWarning, NavError, NodeLocation};
use crate::tree::{NavGroup, NavLink, NavNode, NavPlaceholder, NavigationTree};

/// URL scheme prefix (`https:`, `mailto:`, ...).
static SCHEME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*:").unwrap());

/// Check whether a target is an absolute external URL.
#[must_use]
pub fn is_external_url(target: &str) -> bool {
    SCHEME_RE.is_match(target)
}

/// Apply a base path to a target.
///
/// Concatenation is purely lexical; external URLs are returned unchanged.
#[must_use]
pub fn resolve_target(base_path: Option<&str>, target: &str) -> String {
    match base_path {
        Some(base) if !is_external_url(target) => format!("{base}{target}"),
        _ => target.to_owned(),
    }
}

/// Result of a successful build.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuiltNavigation {
    /// The resolved tree.
    pub tree: NavigationTree,
    /// Advisory findings, in declaration order.
    pub warnings: Vec<BuildWarning>,
}

/// Navigation tree builder.
///
/// Holds only options; every call is independent.
#[derive(Clone, Copy, Debug, Default)]
pub struct NavigationBuilder {
    strict: bool,
}

impl NavigationBuilder {
    /// Create a builder with default (non-strict) options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat advisory warnings as errors.
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Parse and build a raw sidebar declaration.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::Structural`] for malformed nodes,
    /// [`NavError::DuplicateTarget`] when targets collide, and
    /// [`NavError::InertBasePath`] in strict mode.
    pub fn build(&self, raw: &Value) -> Result<BuiltNavigation, NavError> {
        let decls = parse_sidebar(raw)?;
        self.build_declarations(&decls)
    }

    /// Build from typed declarations.
    ///
    /// # Errors
    ///
    /// Same as [`NavigationBuilder::build`].
    pub fn build_declarations(&self, decls: &[NodeDecl]) -> Result<BuiltNavigation, NavError> {
        let mut warnings = Vec::new();
        let items = resolve_nodes(decls, None, &NodeLocation::root(), &mut warnings)?;
        let tree = NavigationTree::new(items);

        let duplicates = validate_unique_paths(&tree);
        if !duplicates.is_empty() {
            return Err(NavError::DuplicateTarget {
                targets: duplicates.into_iter().collect(),
            });
        }

        if self.strict
            && let Some(warning) = warnings.first()
        {
            return Err(warning.clone().into_error());
        }
        for warning in &warnings {
            tracing::warn!(%warning, "Navigation warning");
        }

        let stats = tree.stats();
        tracing::debug!(
            links = stats.links,
            groups = stats.groups,
            placeholders = stats.placeholders,
            "Built navigation tree"
        );

        Ok(BuiltNavigation { tree, warnings })
    }
}

/// Build a raw sidebar declaration with default options.
///
/// # Errors
///
/// See [`NavigationBuilder::build`].
pub fn build(raw: &Value) -> Result<BuiltNavigation, NavError> {
    NavigationBuilder::new().build(raw)
}

/// Resolved targets that appear more than once in the tree.
///
/// Covers links and clickable group headers at any depth. The result is
/// sorted and empty when every target is unique.
#[must_use]
pub fn validate_unique_paths(tree: &NavigationTree) -> BTreeSet<String> {
    let mut seen = HashSet::new();
    tree.links()
        .into_iter()
        .filter(|entry| !seen.insert(entry.resolved_target))
        .map(|entry| entry.resolved_target.to_owned())
        .collect()
}

fn resolve_nodes(
    decls: &[NodeDecl],
    inherited: Option<&str>,
    parent: &NodeLocation,
    warnings: &mut Vec<BuildWarning>,
) -> Result<Vec<NavNode>, NavError> {
    decls
        .iter()
        .enumerate()
        .map(|(index, decl)| resolve_node(decl, inherited, &parent.child(index), warnings))
        .collect()
}

fn resolve_node(
    decl: &NodeDecl,
    inherited: Option<&str>,
    location: &NodeLocation,
    warnings: &mut Vec<BuildWarning>,
) -> Result<NavNode, NavError> {
    match decl {
        NodeDecl::Link {
            label,
            target,
            base_path,
        } => {
            require_label(Some(label.as_str()), location)?;
            require_target(target, location)?;
            let base = base_path.as_deref().or(inherited);
            let resolved = resolve_target(base, target);
            Ok(NavNode::Link(NavLink::new(
                label.clone(),
                target.clone(),
                resolved,
            )))
        }
        NodeDecl::Group {
            label,
            target,
            base_path,
            collapsed,
            children,
        } => {
            require_label(label.as_deref(), location)?;
            if children.is_empty() {
                return Err(NavError::structural(
                    location,
                    "a group requires at least one child",
                ));
            }
            let base = base_path.as_deref().or(inherited);
            let header = match target {
                Some(target) => {
                    require_target(target, location)?;
                    Some((target.clone(), resolve_target(base, target)))
                }
                None => None,
            };
            let children = resolve_nodes(children, base, location, warnings)?;
            Ok(NavNode::Group(NavGroup::new(
                label.clone(),
                header,
                base.map(str::to_owned),
                *collapsed,
                children,
            )))
        }
        NodeDecl::Placeholder { label, base_path } => {
            require_label(label.as_deref(), location)?;
            if let Some(base) = base_path.as_deref().filter(|base| !base.is_empty()) {
                warnings.push(BuildWarning::InertBasePath {
                    location: location.clone(),
                    base_path: base.to_owned(),
                });
            }
            Ok(NavNode::Placeholder(NavPlaceholder::new(label.clone())))
        }
    }
}

/// Labels are optional on groups and placeholders, but never blank.
fn require_label(label: Option<&str>, location: &NodeLocation) -> Result<(), NavError> {
    match label {
        Some(label) if label.trim().is_empty() => {
            Err(NavError::structural(location, "label cannot be empty"))
        }
        _ => Ok(()),
    }
}

fn require_target(target: &str, location: &NodeLocation) -> Result<(), NavError> {
    if target.trim().is_empty() {
        return Err(NavError::structural(location, "target cannot be empty"));
    }
    Ok(())
}
