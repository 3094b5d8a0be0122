//! Host-page abstraction and the switching flow itself.
//!
//! The switcher's logic is host-independent: everything it needs from the
//! rendered page goes through [`HostPage`], so the same flow runs against a
//! browser DOM, the CLI's [`ConsoleHost`], or a test double. The host
//! environment constructs a [`Switcher`] and calls [`Switcher::initialize`]
//! once its page is ready; clicks on switch triggers are forwarded to
//! [`Switcher::switch_language`].
//!
//! # Runtime page contract
//!
//! | Hook                | Meaning                                  |
//! |---------------------|------------------------------------------|
//! | `data-current-lang` | locale of the rendered page              |
//! | `data-current-path` | path of the rendered page                |
//! | `#home-link`        | optional link retargeted to the stored preference |
//! | `.lang-switch`      | trigger elements, each with a `data-lang` code |

use super::{
    page::{LANG_ATTR, PATH_ATTR, PageInfo},
    probe::ExistenceProbe,
    storage::{PreferenceStore, store_language, stored_language},
};
use crate::locale::Locale;
use crate::log;

/// Element id of the retargetable home link.
pub const HOME_LINK_ID: &str = "home-link";

/// Class carried by every switch trigger element.
pub const TRIGGER_CLASS: &str = "lang-switch";

/// Attribute on a trigger naming its target locale.
pub const TRIGGER_LANG_ATTR: &str = "data-lang";

// ============================================================================
// Host Page
// ============================================================================

/// What the switcher needs from the page it runs against.
///
/// Implementations are thin: no logic beyond relaying reads and writes to
/// the actual page representation.
pub trait HostPage {
    /// Value of an attribute on the page root, if present.
    fn page_attr(&self, name: &str) -> Option<String>;

    /// Raw `data-lang` values of the switch triggers, in page order.
    /// Missing attributes surface as `None`.
    fn trigger_langs(&self) -> Vec<Option<String>>;

    /// Wire the click handler to every switch trigger.
    fn bind_triggers(&mut self);

    /// Toggle the "active" mark on the trigger at `index`.
    fn set_trigger_active(&mut self, index: usize, active: bool);

    /// Point the home link (if the page has one) at `href`.
    fn set_home_href(&mut self, href: &str);

    /// Leave the current page for `url`.
    fn navigate(&mut self, url: &str);
}

// ============================================================================
// Switcher
// ============================================================================

/// The language-switching flow, generic over host, storage and probe.
#[derive(Debug)]
pub struct Switcher<H, S, P> {
    host: H,
    store: S,
    probe: P,
}

impl<H, S, P> Switcher<H, S, P>
where
    H: HostPage,
    S: PreferenceStore,
    P: ExistenceProbe,
{
    pub fn new(host: H, store: S, probe: P) -> Self {
        Self { host, store, probe }
    }

    /// Current page state, re-read from the host attributes on every call.
    pub fn page_info(&self) -> PageInfo {
        PageInfo::from_attrs(
            self.host.page_attr(LANG_ATTR).as_deref(),
            self.host.page_attr(PATH_ATTR).as_deref(),
        )
    }

    /// URL of the equivalent page in `target`. See [`PageInfo::target_url`].
    pub fn target_url(&self, target: Locale) -> String {
        self.page_info().target_url(target)
    }

    /// One-time page setup, run by the host once its page is ready:
    /// retarget the home link to the stored preference, bind the triggers,
    /// mark the current locale's trigger active, then record the page's
    /// locale as the new preference (last viewed wins).
    pub fn initialize(&mut self) {
        let preferred = stored_language(&self.store);
        self.host.set_home_href(&preferred.home_path());

        self.host.bind_triggers();

        let current = self.page_info().current_lang;
        let langs = self.host.trigger_langs();
        for (index, raw) in langs.iter().enumerate() {
            let active = raw.as_deref().and_then(Locale::parse) == Some(current);
            self.host.set_trigger_active(index, active);
        }

        store_language(&mut self.store, current);
    }

    /// Handle a click on a switch trigger carrying `raw_lang`.
    ///
    /// Unsupported codes are a silent no-op. Otherwise the choice is
    /// persisted, the target URL computed and probed, and navigation goes to
    /// the URL when the probe succeeds or to the target's home page when it
    /// does not. Never errors outward; a second overlapping call is simply
    /// an independent flow.
    pub async fn switch_language(&mut self, raw_lang: &str) {
        let Some(target) = Locale::parse(raw_lang) else {
            return;
        };

        store_language(&mut self.store, target);

        let url = self.target_url(target);
        let home = target.home_path();

        let exists = self.probe.exists(&url).await;
        if !exists && url != home {
            // Untranslated page (or slug divergence): degrade to the home page
            self.host.navigate(&home);
        } else {
            self.host.navigate(&url);
        }
    }

    pub fn into_host(self) -> H {
        self.host
    }
}

// ============================================================================
// Console Host
// ============================================================================

/// Host used by the CLI: page state comes from command-line flags and
/// "navigation" is a log line plus a recorded destination.
#[derive(Debug, Default)]
pub struct ConsoleHost {
    lang: Option<String>,
    path: Option<String>,
    destination: Option<String>,
}

impl ConsoleHost {
    pub fn new(lang: Option<Locale>, path: Option<String>) -> Self {
        Self {
            lang: lang.map(|locale| locale.code().to_owned()),
            path,
            destination: None,
        }
    }

    /// Where the flow navigated to, once it has.
    pub fn destination(&self) -> Option<&str> {
        self.destination.as_deref()
    }
}

impl HostPage for ConsoleHost {
    fn page_attr(&self, name: &str) -> Option<String> {
        match name {
            LANG_ATTR => self.lang.clone(),
            PATH_ATTR => self.path.clone(),
            _ => None,
        }
    }

    fn trigger_langs(&self) -> Vec<Option<String>> {
        Vec::new()
    }

    fn bind_triggers(&mut self) {}

    fn set_trigger_active(&mut self, _index: usize, _active: bool) {}

    fn set_home_href(&mut self, _href: &str) {}

    fn navigate(&mut self, url: &str) {
        log!("switch"; "navigating to {url}");
        self.destination = Some(url.to_owned());
    }
}
