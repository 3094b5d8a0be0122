//! Current-page state and target URL computation.

use crate::locale::{DEFAULT_LOCALE, LOCALES, Locale};
use regex::Regex;
use std::sync::LazyLock;

/// Attribute on the page root holding the page's locale code.
pub const LANG_ATTR: &str = "data-current-lang";

/// Attribute on the page root holding the page's path.
pub const PATH_ATTR: &str = "data-current-path";

/// Matches a leading locale segment, e.g. `/en/` in `/en/blog/post/`.
static LOCALE_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    let codes: Vec<_> = LOCALES.iter().map(|locale| locale.code()).collect();
    Regex::new(&format!("^/({})/", codes.join("|"))).unwrap()
});

/// What the switcher knows about the page being viewed.
///
/// Read from the host page's attributes on every use, never cached; the
/// template writes the attributes once per rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageInfo {
    pub current_lang: Locale,
    pub current_path: String,
}

impl PageInfo {
    /// Build page info from the raw attribute values, applying the
    /// documented fallbacks: unknown or missing language becomes
    /// [`DEFAULT_LOCALE`], missing path becomes `/`.
    pub fn from_attrs(lang: Option<&str>, path: Option<&str>) -> Self {
        Self {
            current_lang: lang.and_then(Locale::parse).unwrap_or(DEFAULT_LOCALE),
            current_path: path.unwrap_or("/").to_owned(),
        }
    }

    /// Path of the equivalent page in `target`.
    ///
    /// - Same language: the current path, unchanged.
    /// - Path starts with a supported locale segment: that segment is
    ///   replaced, the remainder kept byte-identical. A post is assumed to
    ///   keep its slug across locales; when slugs diverge the existence
    ///   probe catches it at navigation time.
    /// - Anything else (root, unprefixed pages): the target's home path.
    pub fn target_url(&self, target: Locale) -> String {
        if self.current_lang == target {
            return self.current_path.clone();
        }

        if LOCALE_PREFIX.is_match(&self.current_path) {
            return LOCALE_PREFIX
                .replace(&self.current_path, format!("/{target}/"))
                .into_owned();
        }

        target.home_path()
    }
}
