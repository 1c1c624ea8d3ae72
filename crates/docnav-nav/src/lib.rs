//! Sidebar navigation model for docnav.
//!
//! This crate provides:
//! - [`NodeDecl`]: sidebar entries as declared by site authors
//! - [`NavigationBuilder`]: base-path resolution and validation
//! - [`NavigationTree`]: the resolved, read-only tree handed to renderers
//!
//! # Quick Start
//!
//! ```
//! use docnav_nav::{NavigationBuilder, NodeDecl};
//!
//! let sidebar = vec![
//!     NodeDecl::group(
//!         "Overview",
//!         vec![
//!             NodeDecl::link("Getting started", "getting_started"),
//!             NodeDecl::link("Source", "https://example.com"),
//!             NodeDecl::placeholder("Migration guide"),
//!         ],
//!     )
//!     .with_base_path("/overview/"),
//! ];
//!
//! let built = NavigationBuilder::new().build_declarations(&sidebar).unwrap();
//! let targets: Vec<_> = built.tree.links().iter().map(|e| e.resolved_target).collect();
//! assert_eq!(targets, ["/overview/getting_started", "https://example.com"]);
//! ```

mod builder;
mod declaration;
mod error;
mod tree;

pub use builder::{
    BuiltNavigation, NavigationBuilder, build, is_external_url, resolve_target,
    validate_unique_paths,
};
pub use declaration::{NodeDecl, parse_sidebar};
pub use error::{BuildWarning, NavError, NodeLocation};
pub use tree::{
    BreadcrumbItem, NavEntry, NavGroup, NavLink, NavNode, NavPlaceholder, NavigationTree,
    TreeStats,
};
