//! Site configuration management for `lingora.toml`.
//!
//! # Sections
//!
//! | Section      | Purpose                                         |
//! |--------------|-------------------------------------------------|
//! | `[base]`     | Site metadata (title, description, url)         |
//! | `[metadata]` | Generator-facing post metadata (layout)         |
//! | `[switcher]` | Switch-flow settings (preference store path)    |
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "My Blog"
//! description = "A trilingual personal blog"
//! url = "https://myblog.com"
//!
//! [metadata]
//! layout = "layouts/post.njk"
//!
//! [switcher]
//! preferences = ".lingora/preferences.json"
//! ```

mod base;
pub mod defaults;
mod error;
mod metadata;
mod switcher;

use base::BaseConfig;
use error::ConfigError;
use metadata::MetadataConfig;
use switcher::SwitcherConfig;

use crate::cli::{Cli, Commands};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing lingora.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// CLI arguments reference
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory (set after loading)
    #[serde(skip)]
    root: Option<PathBuf>,

    /// Basic site information
    #[serde(default)]
    pub base: BaseConfig,

    /// Generator-facing post metadata
    #[serde(default)]
    pub metadata: MetadataConfig,

    /// Switch-flow settings
    #[serde(default)]
    pub switcher: SwitcherConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::Malformed)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Unreadable(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Get CLI arguments reference
    pub fn get_cli(&self) -> &'static Cli {
        self.cli.unwrap()
    }

    /// Site origin for the existence probe: `--base-url` wins over
    /// `[base].url`.
    pub fn probe_base_url(&self) -> Option<String> {
        if let Commands::Switch {
            base_url: Some(url),
            ..
        } = &self.get_cli().command
        {
            return Some(url.clone());
        }
        self.base.url.clone()
    }

    /// Preference store path, resolved against the project root.
    pub fn preferences_path(&self) -> PathBuf {
        if self.switcher.preferences.is_absolute() {
            self.switcher.preferences.clone()
        } else {
            self.get_root().join(&self.switcher.preferences)
        }
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &'static Cli) {
        self.cli = Some(cli);

        let root = cli
            .root
            .as_ref()
            .cloned()
            .unwrap_or_else(|| self.get_root().to_owned());
        let root = Self::normalize_path(&root);
        self.config_path = Self::normalize_path(&root.join(&cli.config));
        self.root = Some(root);
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration for the current command
    pub fn validate(&self) -> Result<()> {
        if let Some(base_url) = &self.base.url
            && !base_url.starts_with("http")
        {
            bail!(ConfigError::Invalid(
                "[base.url] must start with http:// or https://".into()
            ));
        }

        if self.get_cli().is_switch() && self.probe_base_url().is_none() {
            bail!(ConfigError::Invalid(
                "`switch` needs a site origin: set [base.url] or pass --base-url".into()
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        let config_str = r#"
            [base]
            title = "My Blog"
            description = "A test blog"
        "#;
        let result = SiteConfig::from_str(config_str);

        assert!(result.is_ok());
        let config = result.unwrap();
        assert_eq!(config.base.title, "My Blog");
        assert_eq!(config.base.description, "A test blog");
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let invalid_config = r#"
            [base
            title = "My Blog"
        "#;
        let result = SiteConfig::from_str(invalid_config);

        assert!(result.is_err());
    }

    #[test]
    fn test_empty_config_is_all_defaults() {
        let config = SiteConfig::from_str("").unwrap();

        assert_eq!(config.base.url, None);
        assert_eq!(config.metadata.layout, "layouts/post.njk");
        assert_eq!(
            config.switcher.preferences,
            PathBuf::from(".lingora/preferences.json")
        );
    }

    #[test]
    fn test_get_root_default() {
        let config = SiteConfig::default();
        assert_eq!(config.get_root(), Path::new("./"));
    }

    #[test]
    fn test_preferences_path_absolute_kept() {
        let config: SiteConfig = toml::from_str(
            r#"
            [switcher]
            preferences = "/var/state/prefs.json"
        "#,
        )
        .unwrap();

        assert_eq!(
            config.preferences_path(),
            PathBuf::from("/var/state/prefs.json")
        );
    }

    fn static_cli(args: &[&str]) -> &'static Cli {
        use clap::Parser;
        Box::leak(Box::new(Cli::parse_from(args)))
    }

    #[test]
    fn test_validate_switch_requires_an_origin() {
        let mut config = SiteConfig::default();
        config.update_with_cli(static_cli(&["lingora", "switch", "ro"]));

        let err = config.validate().unwrap_err();
        assert!(format!("{err}").contains("site origin"));
    }

    #[test]
    fn test_validate_switch_accepts_configured_url() {
        let mut config = SiteConfig::from_str(
            r#"
            [base]
            url = "https://myblog.com"
        "#,
        )
        .unwrap();
        config.update_with_cli(static_cli(&["lingora", "switch", "ro"]));

        assert!(config.validate().is_ok());
        assert_eq!(
            config.probe_base_url(),
            Some("https://myblog.com".to_string())
        );
    }

    #[test]
    fn test_validate_switch_accepts_base_url_flag() {
        let mut config = SiteConfig::default();
        config.update_with_cli(static_cli(&[
            "lingora",
            "switch",
            "ro",
            "--base-url",
            "http://127.0.0.1:8080",
        ]));

        assert!(config.validate().is_ok());
        // The flag wins even with no [base].url configured
        assert_eq!(
            config.probe_base_url(),
            Some("http://127.0.0.1:8080".to_string())
        );
    }

    #[test]
    fn test_validate_other_commands_need_no_origin() {
        let mut config = SiteConfig::default();
        config.update_with_cli(static_cli(&["lingora", "metadata"]));

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_http_url() {
        let mut config = SiteConfig::from_str(
            r#"
            [base]
            url = "myblog.com"
        "#,
        )
        .unwrap();
        config.update_with_cli(static_cli(&["lingora", "metadata"]));

        let err = config.validate().unwrap_err();
        assert!(format!("{err}").contains("must start with http"));
    }

    #[test]
    fn test_unknown_top_level_field_rejection() {
        let config = r#"
            [base]
            title = "Test"

            [unknown_section]
            field = "value"
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);
        assert!(result.is_err());
    }

    #[test]
    fn test_full_config_all_sections() {
        let config = r#"
            [base]
            title = "My Blog"
            description = "A trilingual personal blog"
            url = "https://myblog.com"

            [metadata]
            layout = "layouts/post.njk"

            [switcher]
            preferences = ".lingora/preferences.json"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.base.title, "My Blog");
        assert_eq!(config.base.url, Some("https://myblog.com".to_string()));
        assert_eq!(config.metadata.layout, "layouts/post.njk");
        assert_eq!(
            config.switcher.preferences,
            PathBuf::from(".lingora/preferences.json")
        );
    }
}
