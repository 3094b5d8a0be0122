//! Client-side language switching, reframed as host-independent logic.
//!
//! On the published site a ~100-line script performs the switch; this module
//! is that behavior behind explicit seams so it can be exercised and tested
//! off-browser:
//!
//! - [`page`] - current-page state and target URL computation
//! - [`storage`] - preference persistence with a swallow-all-errors boundary
//! - [`probe`] - HEAD existence check deciding the fallback navigation
//! - [`host`] - the [`host::HostPage`] seam and the switching flow itself
//!
//! Every failure mode degrades locally: bad storage reads become the default
//! locale, failed probes become a home-page destination, unsupported codes
//! become no-ops. Nothing here returns an error to the host.

pub mod host;
pub mod page;
pub mod probe;
pub mod storage;

pub use host::{ConsoleHost, HostPage, Switcher};
pub use page::PageInfo;
pub use probe::{ExistenceProbe, HttpProbe};
pub use storage::{FileStore, MemoryStore, PreferenceStore};
