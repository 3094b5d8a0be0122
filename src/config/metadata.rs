//! `[metadata]` section configuration.
//!
//! Controls the static metadata emitted for the site generator.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[metadata]` section in lingora.toml - generator-facing post metadata.
///
/// # Example
/// ```toml
/// [metadata]
/// layout = "layouts/post.njk"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct MetadataConfig {
    /// Layout template applied to every post, shared across locales.
    #[serde(default = "defaults::metadata::layout")]
    #[educe(Default = defaults::metadata::layout())]
    pub layout: String,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_metadata_config() {
        let config = r#"
            [metadata]
            layout = "layouts/article.njk"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.metadata.layout, "layouts/article.njk");
    }

    #[test]
    fn test_metadata_config_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();

        assert_eq!(config.metadata.layout, "layouts/post.njk");
    }

    #[test]
    fn test_unknown_field_rejection() {
        let config = r#"
            [metadata]
            template = "wrong-key"
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);

        assert!(result.is_err());
    }
}
