//! The stateful core: snapshot table, per-element pipeline, observation,
//! and the session state machine.

mod apply;
mod observe;
mod protocol;
mod session;
mod snapshot;
mod theme;

pub use apply::apply_dark_mode;
pub use observe::Observer;
pub use protocol::{ControlMessage, ProtocolError, parse_message};
pub use session::{ENGINE_ATTR, Session, SessionOptions, SessionState};
pub use snapshot::SnapshotTable;
pub use theme::{SiteTheme, detect_site_theme};

use std::sync::atomic::{AtomicBool, Ordering};

/// Injected-twice guard. A host may re-inject the engine into a document
/// it already lives in; only the first injection may install itself.
static LOADED: AtomicBool = AtomicBool::new(false);

/// Returns true exactly once per process.
pub fn mark_loaded() -> bool {
    !LOADED.swap(true, Ordering::SeqCst)
}
