//! Resolved configuration handed to the site renderer.

use docnav_nav::{BuildWarning, NavigationTree};
use serde::{Deserialize, Serialize};

use crate::site::{Footer, SearchConfig, SiteIdentity, SocialLink, TopNavLink};

/// Fully resolved site configuration.
///
/// Serializes to the JSON document consumed by the renderer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSnapshot {
    /// Branding metadata.
    pub identity: SiteIdentity,
    /// Top navigation bar.
    #[serde(default)]
    pub top_nav: Vec<TopNavLink>,
    /// Resolved sidebar.
    #[serde(default)]
    pub sidebar: NavigationTree,
    /// Social profile links.
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
    /// Footer text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<Footer>,
    /// Search provider selection.
    #[serde(default)]
    pub search: SearchConfig,
}

/// Snapshot plus the advisory warnings raised while building it.
#[derive(Clone, Debug)]
pub struct Snapshot {
    /// The resolved configuration.
    pub site: SiteSnapshot,
    /// Non-fatal findings from the navigation build.
    pub warnings: Vec<BuildWarning>,
}

impl SiteSnapshot {
    /// Parse a snapshot previously produced by [`SiteSnapshot::to_json`].
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not describe a snapshot.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Serialize for the renderer.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self, pretty: bool) -> Result<String, serde_json::Error> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}
