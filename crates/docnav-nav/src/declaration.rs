//! Sidebar declarations as written by site authors.
//!
//! A declaration is either built in code with the [`NodeDecl`] constructors or
//! parsed from a loosely typed document (TOML, YAML or JSON all deserialize
//! into [`serde_json::Value`]) with [`parse_sidebar`].
//!
//! Node keys:
//!
//! | Key           | Alias   | Type     |
//! |---------------|---------|----------|
//! | `label`       | `text`  | string   |
//! | `target`      | `link`  | string   |
//! | `children`    | `items` | sequence |
//! | `base_path`   | `base`  | string   |
//! | `collapsed`   |         | bool     |
//! | `placeholder` |         | bool     |

use serde_json::Value;

use crate::error::{NavError, NodeLocation};

/// One declared sidebar entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeDecl {
    /// Navigable leaf.
    Link {
        /// Display text.
        label: String,
        /// External URL or site-relative path.
        target: String,
        /// Prefix applied to `target`.
        base_path: Option<String>,
    },
    /// Entry with children, optionally clickable itself.
    Group {
        /// Display text.
        label: Option<String>,
        /// Optional header link.
        target: Option<String>,
        /// Prefix inherited by descendants.
        base_path: Option<String>,
        /// Initial collapse state.
        collapsed: bool,
        /// Ordered children.
        children: Vec<NodeDecl>,
    },
    /// Label-only "coming soon" entry.
    Placeholder {
        /// Display text.
        label: Option<String>,
        /// Declared base path (has nothing to apply to).
        base_path: Option<String>,
    },
}

impl NodeDecl {
    /// Create a link entry.
    pub fn link(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self::Link {
            label: label.into(),
            target: target.into(),
            base_path: None,
        }
    }

    /// Create an expanded group.
    pub fn group(label: impl Into<String>, children: Vec<NodeDecl>) -> Self {
        Self::Group {
            label: Some(label.into()),
            target: None,
            base_path: None,
            collapsed: false,
            children,
        }
    }

    /// Create a placeholder entry.
    pub fn placeholder(label: impl Into<String>) -> Self {
        Self::Placeholder {
            label: Some(label.into()),
            base_path: None,
        }
    }

    /// Set the base path of this entry.
    #[must_use]
    pub fn with_base_path(mut self, base: impl Into<String>) -> Self {
        match &mut self {
            Self::Link { base_path, .. }
            | Self::Group { base_path, .. }
            | Self::Placeholder { base_path, .. } => *base_path = Some(base.into()),
        }
        self
    }

    /// Make a group header clickable. No effect on other variants.
    #[must_use]
    pub fn with_target(mut self, link: impl Into<String>) -> Self {
        if let Self::Group { target, .. } = &mut self {
            *target = Some(link.into());
        }
        self
    }

    /// Start a group collapsed. No effect on other variants.
    #[must_use]
    pub fn collapsed(mut self) -> Self {
        if let Self::Group { collapsed, .. } = &mut self {
            *collapsed = true;
        }
        self
    }
}

/// Parse the sidebar root sequence.
///
/// # Errors
///
/// Returns [`NavError::Structural`] for the first malformed node found.
pub fn parse_sidebar(value: &Value) -> Result<Vec<NodeDecl>, NavError> {
    parse_sequence(value, &NodeLocation::root())
}

fn parse_sequence(value: &Value, location: &NodeLocation) -> Result<Vec<NodeDecl>, NavError> {
    let Value::Array(entries) = value else {
        let what = if location.indices().is_empty() {
            "the sidebar"
        } else {
            "children"
        };
        return Err(NavError::structural(
            location,
            format!("{what} must be a sequence, found {}", kind_of(value)),
        ));
    };
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| parse_node(entry, &location.child(index)))
        .collect()
}

fn parse_node(value: &Value, location: &NodeLocation) -> Result<NodeDecl, NavError> {
    let Value::Object(map) = value else {
        return Err(NavError::structural(
            location,
            format!("expected a mapping, found {}", kind_of(value)),
        ));
    };

    let mut fields = RawFields::default();
    for (key, value) in map {
        match key.as_str() {
            "label" | "text" => {
                let label = expect_string(value, key, location)?;
                set_once(&mut fields.label, label, "label", location)?;
            }
            "target" | "link" => {
                let target = expect_string(value, key, location)?;
                set_once(&mut fields.target, target, "target", location)?;
            }
            "base_path" | "base" => {
                let base = expect_string(value, key, location)?;
                set_once(&mut fields.base_path, base, "base_path", location)?;
            }
            "children" | "items" => {
                let children = parse_sequence(value, location)?;
                set_once(&mut fields.children, children, "children", location)?;
            }
            "collapsed" => fields.collapsed = expect_bool(value, key, location)?,
            "placeholder" => fields.placeholder = expect_bool(value, key, location)?,
            other => {
                return Err(NavError::structural(
                    location,
                    format!("unknown field `{other}`"),
                ));
            }
        }
    }

    fields.into_decl(location)
}

#[derive(Default)]
struct RawFields {
    label: Option<String>,
    target: Option<String>,
    base_path: Option<String>,
    children: Option<Vec<NodeDecl>>,
    collapsed: bool,
    placeholder: bool,
}

impl RawFields {
    fn into_decl(self, location: &NodeLocation) -> Result<NodeDecl, NavError> {
        let children = self.children.unwrap_or_default();

        if self.placeholder {
            if self.target.is_some() {
                return Err(NavError::structural(
                    location,
                    "a placeholder cannot declare a target",
                ));
            }
            if !children.is_empty() {
                return Err(NavError::structural(
                    location,
                    "a placeholder cannot declare children",
                ));
            }
            return Ok(NodeDecl::Placeholder {
                label: self.label,
                base_path: self.base_path,
            });
        }

        if !children.is_empty() {
            return Ok(NodeDecl::Group {
                label: self.label,
                target: self.target,
                base_path: self.base_path,
                collapsed: self.collapsed,
                children,
            });
        }

        let Some(target) = self.target else {
            if self.label.is_none() {
                return Err(NavError::structural(
                    location,
                    "entry has no label, target or children",
                ));
            }
            return Ok(NodeDecl::Placeholder {
                label: self.label,
                base_path: self.base_path,
            });
        };
        let Some(label) = self.label else {
            return Err(NavError::structural(location, "a link requires a label"));
        };
        if self.collapsed {
            tracing::debug!(%location, "Ignoring `collapsed` on an entry without children");
        }
        Ok(NodeDecl::Link {
            label,
            target,
            base_path: self.base_path,
        })
    }
}

fn set_once<T>(
    slot: &mut Option<T>,
    value: T,
    field: &str,
    location: &NodeLocation,
) -> Result<(), NavError> {
    if slot.is_some() {
        return Err(NavError::structural(
            location,
            format!("field `{field}` is declared more than once"),
        ));
    }
    *slot = Some(value);
    Ok(())
}

fn expect_string(value: &Value, key: &str, location: &NodeLocation) -> Result<String, NavError> {
    value.as_str().map(str::to_owned).ok_or_else(|| {
        NavError::structural(
            location,
            format!("`{key}` must be a string, found {}", kind_of(value)),
        )
    })
}

fn expect_bool(value: &Value, key: &str, location: &NodeLocation) -> Result<bool, NavError> {
    value.as_bool().ok_or_else(|| {
        NavError::structural(
            location,
            format!("`{key}` must be a boolean, found {}", kind_of(value)),
        )
    })
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
