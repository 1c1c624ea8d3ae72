//! Pass-through site sections: identity, top navigation, social links,
//! footer and search.
//!
//! None of these reference the sidebar tree. They are validated for
//! non-empty fields and otherwise handed to the renderer unchanged.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Search provider used when none is configured.
pub const LOCAL_SEARCH: &str = "local";

/// Site branding metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteIdentity {
    /// Site title.
    pub title: String,
    /// Short description (used for meta tags).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Tagline shown on the landing page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    /// Favicon references.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub favicons: Vec<String>,
    /// Logo reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

impl Default for SiteIdentity {
    fn default() -> Self {
        Self {
            title: "Documentation".to_owned(),
            description: None,
            tagline: None,
            favicons: Vec::new(),
            logo: None,
        }
    }
}

/// Top navigation bar entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopNavLink {
    /// Display text.
    #[serde(alias = "text")]
    pub label: String,
    /// Link target.
    pub link: String,
}

/// Social profile link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Icon key, e.g. `github`.
    #[serde(alias = "icon")]
    pub platform: String,
    /// Profile URL.
    pub link: String,
}

/// Footer text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Footer {
    /// Message line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Copyright line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

/// Search provider selection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Provider identifier: `local` or a hosted service name.
    pub provider: String,
    /// Provider options, passed through opaquely.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub options: BTreeMap<String, String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            provider: LOCAL_SEARCH.to_owned(),
            options: BTreeMap::new(),
        }
    }
}

/// Search provider kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchProvider<'a> {
    /// Built-in local search.
    Local,
    /// Hosted service, by identifier.
    Hosted(&'a str),
}

impl SearchConfig {
    /// Classify the configured provider.
    #[must_use]
    pub fn kind(&self) -> SearchProvider<'_> {
        if self.provider.eq_ignore_ascii_case(LOCAL_SEARCH) {
            SearchProvider::Local
        } else {
            SearchProvider::Hosted(&self.provider)
        }
    }
}
