//! Supported locales and locale-code parsing.
//!
//! The site publishes content under exactly three locales. Everything that
//! names a language - content directories, permalinks, the switcher's page
//! attributes, the persisted preference - uses the two-letter codes defined
//! here. Any other code is treated as absent and falls back to
//! [`DEFAULT_LOCALE`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// The supported locales, in the order the switcher advertises them.
pub const LOCALES: [Locale; 3] = [Locale::En, Locale::Se, Locale::Ro];

/// Fallback locale when nothing is stored or detected.
pub const DEFAULT_LOCALE: Locale = Locale::En;

/// A language variant the site is published in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English
    En,
    /// Swedish
    Se,
    /// Romanian
    Ro,
}

impl Locale {
    /// Two-letter code used in paths, attributes and storage.
    pub const fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Se => "se",
            Locale::Ro => "ro",
        }
    }

    /// Parse a raw code. Returns `None` for anything outside the
    /// supported set, including casing variants - codes are exact.
    pub fn parse(code: &str) -> Option<Self> {
        LOCALES.into_iter().find(|locale| locale.code() == code)
    }

    /// Home page path for this locale, e.g. `/en/`.
    pub fn home_path(self) -> String {
        format!("/{}/", self.code())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_supported_codes() {
        assert_eq!(Locale::parse("en"), Some(Locale::En));
        assert_eq!(Locale::parse("se"), Some(Locale::Se));
        assert_eq!(Locale::parse("ro"), Some(Locale::Ro));
    }

    #[test]
    fn test_parse_rejects_unsupported() {
        assert_eq!(Locale::parse("fr"), None);
        assert_eq!(Locale::parse("EN"), None);
        assert_eq!(Locale::parse("en-US"), None);
        assert_eq!(Locale::parse(""), None);
        assert_eq!(Locale::parse(" en"), None);
    }

    #[test]
    fn test_locales_order() {
        // The switcher renders triggers in this order
        let codes: Vec<_> = LOCALES.iter().map(|l| l.code()).collect();
        assert_eq!(codes, ["en", "se", "ro"]);
    }

    #[test]
    fn test_home_path() {
        assert_eq!(Locale::En.home_path(), "/en/");
        assert_eq!(Locale::Ro.home_path(), "/ro/");
    }

    #[test]
    fn test_display_matches_code() {
        for locale in LOCALES {
            assert_eq!(locale.to_string(), locale.code());
        }
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Locale::Se).unwrap(), r#""se""#);
        let parsed: Locale = serde_json::from_str(r#""ro""#).unwrap();
        assert_eq!(parsed, Locale::Ro);
    }

    #[test]
    fn test_default_locale() {
        assert_eq!(DEFAULT_LOCALE, Locale::En);
    }
}
