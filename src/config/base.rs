//! `[base]` section configuration.
//!
//! Contains basic site information like title, description and base URL.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in lingora.toml - basic site metadata.
///
/// # Example
/// ```toml
/// [base]
/// title = "My Blog"
/// description = "A trilingual personal blog"
/// url = "https://myblog.com"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Site title, informational only.
    #[serde(default)]
    pub title: String,

    /// Site description, informational only.
    #[serde(default)]
    pub description: String,

    /// Site origin the existence probe resolves relative URLs against.
    /// Required by `lingora switch` unless `--base-url` is given.
    #[serde(default = "defaults::base::url")]
    #[educe(Default = defaults::base::url())]
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_base_config_full() {
        let config = r#"
            [base]
            title = "My Blog"
            description = "A trilingual blog"
            url = "https://myblog.com"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.base.title, "My Blog");
        assert_eq!(config.base.description, "A trilingual blog");
        assert_eq!(config.base.url, Some("https://myblog.com".to_string()));
    }

    #[test]
    fn test_base_config_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();

        assert_eq!(config.base.title, "");
        assert_eq!(config.base.description, "");
        assert_eq!(config.base.url, None);
    }

    #[test]
    fn test_unknown_field_rejection() {
        let config = r#"
            [base]
            title = "Test"
            unknown_field = "should_fail"
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);

        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }
}
