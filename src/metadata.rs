//! Per-locale post metadata consumed by the site generator.
//!
//! Each locale's blog directory carries one [`LocaleMetadata`] instance. The
//! external generator globs the content tree, attaches the matching instance
//! to every post it finds, and calls [`LocaleMetadata::permalink`] to place
//! the rendered page.
//!
//! # Build-time contract
//!
//! | Key         | Meaning                                        |
//! |-------------|------------------------------------------------|
//! | `tags`      | collections the post joins (`posts`, `posts_{lang}`) |
//! | `layout`    | template applied to every post                 |
//! | `lang`      | locale code of the directory                   |
//! | `permalink` | output URL derived from the post's file slug   |

use crate::locale::{LOCALES, Locale};
use serde::{Deserialize, Serialize};

/// Collection tag shared by posts of every locale.
pub const POSTS_TAG: &str = "posts";

// ============================================================================
// Page Context
// ============================================================================

/// The slice of the generator's page context that permalinks depend on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageContext {
    /// Generator-derived identifier for the content file.
    #[serde(rename = "fileSlug")]
    pub file_slug: String,
}

impl PageContext {
    pub fn new(file_slug: impl Into<String>) -> Self {
        Self {
            file_slug: file_slug.into(),
        }
    }
}

// ============================================================================
// Locale Metadata
// ============================================================================

/// Static metadata applied to every post under one locale's directory.
///
/// Immutable once built; the generator consumes it read-only.
#[derive(Debug, Clone, Serialize)]
pub struct LocaleMetadata {
    /// Collection tags (`posts` plus the locale-scoped `posts_{lang}`).
    pub tags: Vec<String>,
    /// Layout template path, shared across locales.
    pub layout: String,
    /// Locale this directory publishes in.
    pub lang: Locale,
}

impl LocaleMetadata {
    /// Build the metadata for one locale directory.
    pub fn for_locale(lang: Locale, layout: &str) -> Self {
        Self {
            tags: vec![POSTS_TAG.to_owned(), format!("{POSTS_TAG}_{lang}")],
            layout: layout.to_owned(),
            lang,
        }
    }

    /// Derive the output URL for a post: `/{lang}/blog/{fileSlug}/`.
    ///
    /// Total over well-formed input; slug hygiene is the generator's concern.
    pub fn permalink(&self, page: &PageContext) -> String {
        format!("/{}/blog/{}/", self.lang, page.file_slug)
    }
}

/// Metadata for all supported locales, in [`LOCALES`] order.
pub fn all_locales(layout: &str) -> Vec<LocaleMetadata> {
    LOCALES
        .into_iter()
        .map(|lang| LocaleMetadata::for_locale(lang, layout))
        .collect()
}
