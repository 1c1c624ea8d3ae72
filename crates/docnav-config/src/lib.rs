//! Configuration management for docnav.
//!
//! Parses `docnav.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories. Files ending in
//! `.yaml` or `.yml` are parsed as YAML instead.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! The search provider may also be given as a root-level `search_provider`
//! (or `searchProvider`) key. It must agree with `search.provider` when both
//! are set.
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `search.provider`
//! - `search.options.*`
//!
//! ## Example
//!
//! ```toml
//! [identity]
//! title = "Plugin Docs"
//!
//! [[top_nav]]
//! label = "Guide"
//! link = "/overview/getting_started"
//!
//! [[sidebar]]
//! label = "Overview"
//! base_path = "/overview/"
//!
//! [[sidebar.children]]
//! label = "Getting started"
//! target = "getting_started"
//!
//! [[sidebar.children]]
//! label = "Migration"
//! placeholder = true
//!
//! [search]
//! provider = "local"
//! ```

mod expand;
mod site;
mod snapshot;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use docnav_nav::{NavError, NavigationBuilder};
use serde::Deserialize;
use serde_json::Value;

pub use site::{
    Footer, LOCAL_SEARCH, SearchConfig, SearchProvider, SiteIdentity, SocialLink, TopNavLink,
};
pub use snapshot::{SiteSnapshot, Snapshot};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override search provider.
    pub search_provider: Option<String>,
    /// Override strict navigation checks.
    pub strict: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docnav.toml";

/// Configuration file syntax.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML (default).
    Toml,
    /// YAML.
    Yaml,
}

impl ConfigFormat {
    /// Pick the format from a file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Toml,
        }
    }
}

/// Site configuration.
///
/// Unknown root keys are rejected so that misspelled sections surface as
/// parse errors instead of silently falling back to defaults.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Branding metadata.
    pub identity: SiteIdentity,
    /// Top navigation bar.
    #[serde(alias = "topNav")]
    pub top_nav: Vec<TopNavLink>,
    /// Raw sidebar declaration, resolved by [`Config::snapshot`].
    pub sidebar: Value,
    /// Social profile links.
    #[serde(alias = "socialLinks")]
    pub social_links: Vec<SocialLink>,
    /// Footer text (optional section).
    pub footer: Option<Footer>,
    /// Search provider selection (resolved from `search` and `search_provider`).
    #[serde(skip)]
    pub search: SearchConfig,
    /// Raw `[search]` section as declared.
    #[serde(rename = "search")]
    search_raw: SearchConfigRaw,
    /// Root-level shorthand for `search.provider`.
    #[serde(alias = "searchProvider")]
    search_provider: Option<String>,
    /// Navigation build options.
    pub build: BuildConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            identity: SiteIdentity::default(),
            top_nav: Vec::new(),
            sidebar: Value::Array(Vec::new()),
            social_links: Vec::new(),
            footer: None,
            search: SearchConfig::default(),
            search_raw: SearchConfigRaw::default(),
            search_provider: None,
            build: BuildConfig::default(),
            config_path: None,
        }
    }
}

/// Raw `[search]` section, before the root-level shorthand is merged in.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SearchConfigRaw {
    provider: Option<String>,
    options: BTreeMap<String, String>,
}

/// Navigation build options.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Reject advisory warnings instead of reporting them.
    pub strict: bool,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    ParseYaml(#[from] serde_yaml::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`search.options.api_key`").
        field: String,
        /// Error message (e.g., "${`SEARCH_API_KEY`} not set").
        message: String,
    },
    /// Sidebar could not be built.
    #[error("Navigation error: {0}")]
    Navigation(#[from] NavError),
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `docnav.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails
    /// or the result is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            tracing::debug!("No {CONFIG_FILENAME} found, using defaults");
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Parse configuration from a string without touching the filesystem.
    ///
    /// Environment variables are expanded and the result validated.
    ///
    /// # Errors
    ///
    /// Returns error if parsing, expansion or validation fails.
    pub fn parse(content: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        let mut config: Self = match format {
            ConfigFormat::Toml => toml::from_str(content)?,
            ConfigFormat::Yaml if content.trim().is_empty() => Self::default(),
            ConfigFormat::Yaml => serde_yaml::from_str(content)?,
        };
        config.resolve_search()?;
        config.expand_env_vars()?;
        config.validate()?;
        Ok(config)
    }

    /// Merge the root-level `search_provider` shorthand into `search`.
    ///
    /// Both spellings may be given only if they agree.
    fn resolve_search(&mut self) -> Result<(), ConfigError> {
        let raw = std::mem::take(&mut self.search_raw);
        let provider = match (raw.provider, self.search_provider.take()) {
            (Some(nested), Some(root)) if nested != root => {
                return Err(ConfigError::Validation(format!(
                    "search_provider \"{root}\" conflicts with search.provider \"{nested}\""
                )));
            }
            (Some(provider), _) | (None, Some(provider)) => provider,
            (None, None) => LOCAL_SEARCH.to_owned(),
        };
        self.search = SearchConfig {
            provider,
            options: raw.options,
        };
        Ok(())
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(provider) = &settings.search_provider {
            self.search.provider.clone_from(provider);
        }
        if let Some(strict) = settings.strict {
            self.build.strict = strict;
        }
    }

    /// Build the navigation tree and assemble the renderer snapshot.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Navigation` if the sidebar is malformed, has
    /// duplicate targets, or (in strict mode) raises a warning.
    pub fn snapshot(&self) -> Result<Snapshot, ConfigError> {
        let built = NavigationBuilder::new()
            .strict(self.build.strict)
            .build(&self.sidebar)?;

        let site = SiteSnapshot {
            identity: self.identity.clone(),
            top_nav: self.top_nav.clone(),
            sidebar: built.tree,
            social_links: self.social_links.clone(),
            footer: self.footer.clone(),
            search: self.search.clone(),
        };

        Ok(Snapshot {
            site,
            warnings: built.warnings,
        })
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&content, ConfigFormat::from_path(path))?;
        config.config_path = Some(path.to_path_buf());

        tracing::info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Checks pass-through sections. The sidebar is checked by
    /// [`Config::snapshot`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.identity.title, "identity.title")?;

        for (i, link) in self.top_nav.iter().enumerate() {
            require_non_empty(&link.label, &format!("top_nav[{i}].label"))?;
            require_non_empty(&link.link, &format!("top_nav[{i}].link"))?;
        }

        for (i, link) in self.social_links.iter().enumerate() {
            require_non_empty(&link.platform, &format!("social_links[{i}].platform"))?;
            require_non_empty(&link.link, &format!("social_links[{i}].link"))?;
        }

        require_non_empty(&self.search.provider, "search.provider")?;

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.search.provider = expand::expand_env(&self.search.provider, "search.provider")?;

        for (key, value) in &mut self.search.options {
            *value = expand::expand_env(value, &format!("search.options.{key}"))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docnav_nav::{BuildWarning, NavNode};
    use pretty_assertions::assert_eq;

    const FULL_TOML: &str = r#"
[identity]
title = "Plugin Docs"
description = "Everything about plugins"
tagline = "Build faster"
favicons = ["/favicon.ico", "/favicon.svg"]
logo = "/logo.svg"

[[top_nav]]
label = "Guide"
link = "/overview/getting_started"

[[top_nav]]
label = "Changelog"
link = "https://example.com/changelog"

[[sidebar]]
label = "Overview"
base_path = "/overview/"

[[sidebar.children]]
label = "Getting started"
target = "getting_started"

[[sidebar.children]]
label = "Source"
target = "https://example.com"

[[sidebar]]
label = "Plugins"
base_path = "/plugins/"
collapsed = true

[[sidebar.children]]
label = "Configuration"
target = "configuration"

[[sidebar.children]]
label = "Writing plugins"
placeholder = true

[[social_links]]
platform = "github"
link = "https://github.com/example/docs"

[footer]
message = "Released under the MIT License."
copyright = "Copyright 2026"

[search]
provider = "local"
"#;

    /// Assert that validation fails with expected substrings in the error message.
    fn assert_validation_error(config: &Config, expected_substrings: &[&str]) {
        let result = config.validate();
        assert!(result.is_err(), "Expected validation to fail");
        let err = result.unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(_)),
            "Expected ConfigError::Validation, got {err:?}"
        );
        let msg = err.to_string();
        for s in expected_substrings {
            assert!(
                msg.contains(s),
                "Expected error to contain '{s}', got: {msg}"
            );
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.identity.title, "Documentation");
        assert!(config.top_nav.is_empty());
        assert_eq!(config.sidebar, Value::Array(Vec::new()));
        assert_eq!(config.search.provider, "local");
        assert!(!config.build.strict);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config = Config::parse("", ConfigFormat::Toml).unwrap();
        assert_eq!(config.identity.title, "Documentation");
        assert_eq!(config.search.provider, "local");

        let snapshot = config.snapshot().unwrap();
        assert!(snapshot.site.sidebar.is_empty());
    }

    #[test]
    fn test_parse_full_toml_config() {
        let config = Config::parse(FULL_TOML, ConfigFormat::Toml).unwrap();

        assert_eq!(config.identity.title, "Plugin Docs");
        assert_eq!(config.identity.favicons.len(), 2);
        assert_eq!(config.identity.logo.as_deref(), Some("/logo.svg"));
        assert_eq!(config.top_nav.len(), 2);
        assert_eq!(config.top_nav[1].label, "Changelog");
        assert_eq!(config.social_links[0].platform, "github");
        assert_eq!(
            config.footer.as_ref().and_then(|f| f.copyright.as_deref()),
            Some("Copyright 2026")
        );
    }

    #[test]
    fn test_snapshot_resolves_sidebar() {
        let config = Config::parse(FULL_TOML, ConfigFormat::Toml).unwrap();

        let snapshot = config.snapshot().unwrap();

        let targets: Vec<_> = snapshot
            .site
            .sidebar
            .links()
            .iter()
            .map(|e| e.resolved_target)
            .collect();
        assert_eq!(
            targets,
            vec![
                "/overview/getting_started",
                "https://example.com",
                "/plugins/configuration"
            ]
        );
        let NavNode::Group(plugins) = &snapshot.site.sidebar.items()[1] else {
            panic!("Expected group");
        };
        assert!(plugins.collapsed());
        assert!(matches!(plugins.children()[1], NavNode::Placeholder(_)));
        assert!(snapshot.warnings.is_empty());
    }

    #[test]
    fn test_snapshot_passes_sections_through() {
        let config = Config::parse(FULL_TOML, ConfigFormat::Toml).unwrap();

        let snapshot = config.snapshot().unwrap();

        assert_eq!(snapshot.site.identity, config.identity);
        assert_eq!(snapshot.site.top_nav, config.top_nav);
        assert_eq!(snapshot.site.social_links, config.social_links);
        assert_eq!(snapshot.site.footer, config.footer);
        assert_eq!(snapshot.site.search, config.search);
    }

    #[test]
    fn test_snapshot_json_round_trip() {
        let snapshot = Config::parse(FULL_TOML, ConfigFormat::Toml)
            .unwrap()
            .snapshot()
            .unwrap();

        let json = snapshot.site.to_json(true).unwrap();
        let parsed = SiteSnapshot::from_json(&json).unwrap();

        assert_eq!(parsed, snapshot.site);
    }

    #[test]
    fn test_snapshot_json_shape() {
        let snapshot = Config::parse(FULL_TOML, ConfigFormat::Toml)
            .unwrap()
            .snapshot()
            .unwrap();

        let json: Value = serde_json::from_str(&snapshot.site.to_json(false).unwrap()).unwrap();

        assert_eq!(json["identity"]["title"], "Plugin Docs");
        assert_eq!(json["topNav"][0]["link"], "/overview/getting_started");
        assert_eq!(json["sidebar"][0]["kind"], "group");
        assert_eq!(
            json["sidebar"][0]["children"][0]["resolvedTarget"],
            "/overview/getting_started"
        );
        assert_eq!(json["socialLinks"][0]["platform"], "github");
        assert_eq!(json["search"]["provider"], "local");
    }

    #[test]
    fn test_parse_yaml_config() {
        let yaml = r"
identity:
  title: YAML Docs
topNav:
  - text: Home
    link: /
sidebar:
  - text: Guide
    base: /guide/
    items:
      - text: Intro
        link: intro
socialLinks:
  - icon: github
    link: https://github.com/example
";
        let config = Config::parse(yaml, ConfigFormat::Yaml).unwrap();

        assert_eq!(config.identity.title, "YAML Docs");
        assert_eq!(config.top_nav[0].label, "Home");
        assert_eq!(config.social_links[0].platform, "github");
        let snapshot = config.snapshot().unwrap();
        assert_eq!(
            snapshot.site.sidebar.links()[0].resolved_target,
            "/guide/intro"
        );
    }

    #[test]
    fn test_parse_empty_yaml() {
        let config = Config::parse("  \n", ConfigFormat::Yaml).unwrap();
        assert_eq!(config.identity.title, "Documentation");
    }

    #[test]
    fn test_config_format_from_path() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("docnav.toml")),
            ConfigFormat::Toml
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("site/docnav.yaml")),
            ConfigFormat::Yaml
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("docnav.YML")),
            ConfigFormat::Yaml
        );
        assert_eq!(ConfigFormat::from_path(Path::new("docnav")), ConfigFormat::Toml);
    }

    #[test]
    fn test_snapshot_duplicate_targets() {
        let toml = r#"
[[sidebar]]
label = "Plugins"
base_path = "/plugins/"

[[sidebar.children]]
label = "Configuration"
target = "configuration"

[[sidebar]]
label = "Reference"

[[sidebar.children]]
label = "Plugin configuration"
target = "/plugins/configuration"
"#;
        let config = Config::parse(toml, ConfigFormat::Toml).unwrap();

        let err = config.snapshot().unwrap_err();

        assert!(matches!(
            err,
            ConfigError::Navigation(NavError::DuplicateTarget { .. })
        ));
        assert!(err.to_string().contains("/plugins/configuration"));
    }

    #[test]
    fn test_snapshot_structural_error() {
        let toml = r#"
[[sidebar]]
label = "Broken"
children = "nope"
"#;
        let config = Config::parse(toml, ConfigFormat::Toml).unwrap();

        let err = config.snapshot().unwrap_err();

        assert!(matches!(
            err,
            ConfigError::Navigation(NavError::Structural { .. })
        ));
    }

    #[test]
    fn test_snapshot_warning_and_strict() {
        let toml = r#"
[[sidebar]]
label = "Later"
placeholder = true
base_path = "/later/"
"#;
        let mut config = Config::parse(toml, ConfigFormat::Toml).unwrap();

        let snapshot = config.snapshot().unwrap();
        assert!(matches!(
            snapshot.warnings.as_slice(),
            [BuildWarning::InertBasePath { .. }]
        ));

        config.apply_cli_settings(&CliSettings {
            strict: Some(true),
            ..Default::default()
        });
        let err = config.snapshot().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Navigation(NavError::InertBasePath { .. })
        ));
    }

    #[test]
    fn test_parse_build_strict() {
        let toml = r"
[build]
strict = true
";
        let config = Config::parse(toml, ConfigFormat::Toml).unwrap();
        assert!(config.build.strict);
    }

    #[test]
    fn test_parse_root_search_provider() {
        let config = Config::parse("searchProvider = \"algolia\"\n", ConfigFormat::Toml).unwrap();
        assert_eq!(config.search.kind(), SearchProvider::Hosted("algolia"));

        let config = Config::parse("search_provider: typesense\n", ConfigFormat::Yaml).unwrap();
        assert_eq!(config.search.provider, "typesense");

        let snapshot = Config::parse("searchProvider = \"algolia\"\n", ConfigFormat::Toml)
            .unwrap()
            .snapshot()
            .unwrap();
        assert_eq!(snapshot.site.search.provider, "algolia");
    }

    #[test]
    fn test_parse_root_search_provider_keeps_options() {
        let toml = r#"
searchProvider = "algolia"

[search.options]
index_name = "docs"
"#;
        let config = Config::parse(toml, ConfigFormat::Toml).unwrap();

        assert_eq!(config.search.provider, "algolia");
        assert_eq!(config.search.options["index_name"], "docs");
    }

    #[test]
    fn test_parse_root_search_provider_agreeing_with_section() {
        let toml = r#"
searchProvider = "algolia"

[search]
provider = "algolia"
"#;
        let config = Config::parse(toml, ConfigFormat::Toml).unwrap();
        assert_eq!(config.search.provider, "algolia");
    }

    #[test]
    fn test_parse_root_search_provider_conflict() {
        let toml = r#"
searchProvider = "algolia"

[search]
provider = "local"
"#;
        let err = Config::parse(toml, ConfigFormat::Toml).unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
        let msg = err.to_string();
        assert!(msg.contains("search_provider"), "got: {msg}");
        assert!(msg.contains("search.provider"), "got: {msg}");
    }

    #[test]
    fn test_parse_unknown_root_key_rejected() {
        let err = Config::parse("serchProvider = \"algolia\"\n", ConfigFormat::Toml).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("serchProvider"));

        let err = Config::parse("searchprovider: algolia\n", ConfigFormat::Yaml).unwrap_err();
        assert!(matches!(err, ConfigError::ParseYaml(_)));
    }

    #[test]
    fn test_apply_cli_settings_search_provider() {
        let mut config = Config::default();
        let overrides = CliSettings {
            search_provider: Some("algolia".to_owned()),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.search.provider, "algolia");
        assert!(!config.build.strict); // Unchanged
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::parse(FULL_TOML, ConfigFormat::Toml).unwrap();

        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(config.search.provider, "local");
        assert!(!config.build.strict);
    }

    #[test]
    fn test_expand_env_vars_search() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("DOCNAV_TEST_SEARCH_PROVIDER", "algolia");
            std::env::set_var("DOCNAV_TEST_SEARCH_KEY", "secret-key");
        }

        let toml = r#"
[search]
provider = "${DOCNAV_TEST_SEARCH_PROVIDER}"

[search.options]
api_key = "${DOCNAV_TEST_SEARCH_KEY}"
index_name = "${DOCNAV_TEST_SEARCH_INDEX:-docs}"
"#;
        let config = Config::parse(toml, ConfigFormat::Toml).unwrap();

        assert_eq!(config.search.kind(), SearchProvider::Hosted("algolia"));
        assert_eq!(config.search.options["api_key"], "secret-key");
        assert_eq!(config.search.options["index_name"], "docs");

        unsafe {
            std::env::remove_var("DOCNAV_TEST_SEARCH_PROVIDER");
            std::env::remove_var("DOCNAV_TEST_SEARCH_KEY");
        }
    }

    #[test]
    fn test_expand_env_vars_missing_required_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("MISSING_VAR_DOCNAV_TEST");
        }

        let toml = r#"
[search.options]
app_id = "${MISSING_VAR_DOCNAV_TEST}"
"#;
        let err = Config::parse(toml, ConfigFormat::Toml).unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("MISSING_VAR_DOCNAV_TEST"));
        assert!(err.to_string().contains("search.options.app_id"));
    }

    #[test]
    fn test_parse_invalid_toml() {
        let err = Config::parse("[identity\ntitle = 1", ConfigFormat::Toml).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let err = Config::parse("identity: [oops", ConfigFormat::Yaml).unwrap_err();
        assert!(matches!(err, ConfigError::ParseYaml(_)));
    }

    // Validation tests

    #[test]
    fn test_validate_title_empty() {
        let mut config = Config::default();
        config.identity.title = String::new();
        assert_validation_error(&config, &["identity.title", "empty"]);
    }

    #[test]
    fn test_validate_top_nav_label_empty() {
        let mut config = Config::default();
        config.top_nav.push(TopNavLink {
            label: " ".to_owned(),
            link: "/guide".to_owned(),
        });
        assert_validation_error(&config, &["top_nav[0].label"]);
    }

    #[test]
    fn test_validate_social_platform_empty() {
        let mut config = Config::default();
        config.social_links.push(SocialLink {
            platform: "github".to_owned(),
            link: "https://github.com/example".to_owned(),
        });
        config.social_links.push(SocialLink {
            platform: String::new(),
            link: "https://example.com".to_owned(),
        });
        assert_validation_error(&config, &["social_links[1].platform"]);
    }

    #[test]
    fn test_validate_search_provider_empty() {
        let mut config = Config::default();
        config.search.provider = String::new();
        assert_validation_error(&config, &["search.provider"]);
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docnav.toml");
        std::fs::write(&path, FULL_TOML).unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.identity.title, "Plugin Docs");
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_yaml_path_with_cli_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.yml");
        std::fs::write(&path, "identity:\n  title: From YAML\n").unwrap();
        let settings = CliSettings {
            search_provider: Some("typesense".to_owned()),
            strict: Some(true),
        };

        let config = Config::load(Some(&path), Some(&settings)).unwrap();

        assert_eq!(config.identity.title, "From YAML");
        assert_eq!(config.search.provider, "typesense");
        assert!(config.build.strict);
    }

    #[test]
    fn test_load_rejects_empty_cli_provider() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docnav.toml");
        std::fs::write(&path, "").unwrap();
        let settings = CliSettings {
            search_provider: Some(String::new()),
            ..Default::default()
        };

        let err = Config::load(Some(&path), Some(&settings)).unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::NotFound(_)));
        assert!(err.to_string().contains("missing.toml"));
    }
}
