//! Builder errors and advisory warnings.

use std::fmt;

use serde::Serialize;

/// Position of a node inside the sidebar declaration.
///
/// Rendered as `sidebar[1].children[0]`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct NodeLocation(Vec<usize>);

impl NodeLocation {
    /// Location of the sidebar root sequence.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Location of the `index`-th child of this node.
    #[must_use]
    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    /// Indices from the root down to this node.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.0
    }
}

impl fmt::Display for NodeLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("sidebar")?;
        for (depth, index) in self.0.iter().enumerate() {
            if depth == 0 {
                write!(f, "[{index}]")?;
            } else {
                write!(f, ".children[{index}]")?;
            }
        }
        Ok(())
    }
}

impl From<NodeLocation> for String {
    fn from(location: NodeLocation) -> Self {
        location.to_string()
    }
}

/// Navigation build error.
///
/// Any of these aborts the build; no partial tree is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavError {
    /// Malformed node shape.
    #[error("{location}: {message}")]
    Structural {
        /// Offending node.
        location: NodeLocation,
        /// What is wrong with it.
        message: String,
    },
    /// Two navigable entries resolve to the same path.
    #[error("duplicate navigation targets: {}", .targets.join(", "))]
    DuplicateTarget {
        /// Every duplicated resolved target, sorted.
        targets: Vec<String>,
    },
    /// Base path with nothing to apply to (strict mode only).
    #[error("{location}: base path {base_path:?} has no descendants to apply to")]
    InertBasePath {
        /// Offending node.
        location: NodeLocation,
        /// The declared base path.
        base_path: String,
    },
}

impl NavError {
    pub(crate) fn structural(location: &NodeLocation, message: impl Into<String>) -> Self {
        Self::Structural {
            location: location.clone(),
            message: message.into(),
        }
    }
}

/// Advisory finding that does not block the build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BuildWarning {
    /// A base path declared on a placeholder, which has nothing to prefix.
    InertBasePath {
        /// Offending node.
        location: NodeLocation,
        /// The declared base path.
        base_path: String,
    },
}

impl BuildWarning {
    /// Promote the warning to the matching hard error.
    #[must_use]
    pub fn into_error(self) -> NavError {
        match self {
            Self::InertBasePath {
                location,
                base_path,
            } => NavError::InertBasePath {
                location,
                base_path,
            },
        }
    }
}

impl fmt::Display for BuildWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InertBasePath {
                location,
                base_path,
            } => write!(
                f,
                "{location}: base path {base_path:?} is ignored on a placeholder"
            ),
        }
    }
}
