//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn url() -> Option<String> {
        None
    }
}

// ============================================================================
// [metadata] Section Defaults
// ============================================================================

pub mod metadata {
    pub fn layout() -> String {
        "layouts/post.njk".into()
    }
}

// ============================================================================
// [switcher] Section Defaults
// ============================================================================

pub mod switcher {
    use std::path::PathBuf;

    pub fn preferences() -> PathBuf {
        ".lingora/preferences.json".into()
    }
}
