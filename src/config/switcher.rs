//! `[switcher]` section configuration.
//!
//! Settings for the CLI host of the language-switch flow.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[switcher]` section in lingora.toml - switch-flow settings.
///
/// # Example
/// ```toml
/// [switcher]
/// preferences = ".lingora/preferences.json"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SwitcherConfig {
    /// Path of the preference store file (relative to the project root).
    /// Stands in for the browser's persistent storage.
    #[serde(default = "defaults::switcher::preferences")]
    #[educe(Default = defaults::switcher::preferences())]
    pub preferences: PathBuf,
}
