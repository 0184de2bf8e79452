//! The session state machine.
//!
//! One `Session` per document context, owning the frozen site theme, the
//! snapshot table, and the observer handle. Transitions are idempotent:
//! re-entering the current state is a safe no-op.

use super::{
    ControlMessage, Observer, SiteTheme, SnapshotTable, apply_dark_mode, detect_site_theme,
};
use crate::classify::BG_BRIGHTNESS;
use crate::color::parse_color;
use crate::dom::{Document, NodeId, props};
use crate::profile::StylesheetHost;
use crate::{debug, log};

/// Root attribute marking an engine-active document.
pub const ENGINE_ATTR: &str = "data-umbra";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Disabled,
    Enabled,
}

/// Host-level knobs for a session.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Force the root/body background to black when a light-theme sweep
    /// leaves them light.
    pub force_root_background: bool,
    /// Hostname used for the site-profile capability.
    pub hostname: Option<String>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self { force_root_background: true, hostname: None }
    }
}

pub struct Session {
    state: SessionState,
    theme: SiteTheme,
    snapshots: SnapshotTable,
    observer: Observer,
    options: SessionOptions,
}

impl Session {
    pub fn new(options: SessionOptions) -> Self {
        if !super::mark_loaded() {
            debug!("session"; "engine already loaded in this context");
        }
        Self {
            state: SessionState::Disabled,
            theme: SiteTheme::Light,
            snapshots: SnapshotTable::new(),
            observer: Observer::new(),
            options,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_enabled(&self) -> bool {
        self.state == SessionState::Enabled
    }

    /// The theme frozen at enable time.
    pub fn theme(&self) -> SiteTheme {
        self.theme
    }

    pub fn snapshots(&self) -> &SnapshotTable {
        &self.snapshots
    }

    /// Enable: mark the document, inject the site profile, freeze the
    /// theme, sweep every element, force the root surfaces if still
    /// light, and start observing - in that order. Returns the number of
    /// style writes; enabling an enabled session is a no-op.
    pub fn enable(&mut self, doc: &mut Document, host: &mut dyn StylesheetHost) -> usize {
        if self.state == SessionState::Enabled {
            return 0;
        }

        doc.set_attr(doc.root(), ENGINE_ATTR, "");

        if let Some(hostname) = self.options.hostname.clone() {
            if let Err(err) = host.inject(doc, &hostname) {
                log!("warning"; "profile injection failed: {err}");
            }
        }

        self.theme = detect_site_theme(doc);
        debug!("session"; "site theme: {:?}", self.theme);

        let mut writes = 0;
        for id in doc.walk() {
            self.snapshots.save(doc, id);
            writes += apply_dark_mode(doc, id, self.theme);
        }

        if !self.theme.is_dark() && self.options.force_root_background {
            writes += self.force_root_background(doc);
        }

        self.observer.start(doc);
        self.state = SessionState::Enabled;
        writes
    }

    /// Disable: stop observing, remove the profile, restore every element
    /// still in the document, unmark. Disabling a disabled session is a
    /// no-op.
    pub fn disable(&mut self, doc: &mut Document, host: &mut dyn StylesheetHost) {
        if self.state == SessionState::Disabled {
            return;
        }

        self.observer.stop(doc);

        if let Some(hostname) = self.options.hostname.clone() {
            if let Err(err) = host.remove(doc, &hostname) {
                log!("warning"; "profile removal failed: {err}");
            }
        }

        self.snapshots.restore_all(doc);
        doc.remove_attr(doc.root(), ENGINE_ATTR);
        self.state = SessionState::Disabled;
    }

    /// Drain pending mutation batches through the observer. Insertions
    /// made while disabled were never recorded and stay untouched.
    pub fn pump(&mut self, doc: &mut Document) -> usize {
        let batch = doc.take_batch();
        if batch.is_empty() {
            return 0;
        }
        self.observer
            .deliver(doc, &batch, &mut self.snapshots, self.theme)
    }

    /// Direct entry point mirroring the control surface.
    pub fn start_observer(&mut self, doc: &mut Document) {
        self.observer.start(doc);
    }

    /// Direct entry point mirroring the control surface.
    pub fn stop_observer(&mut self, doc: &mut Document) {
        self.observer.stop(doc);
    }

    /// Route a control message to the matching transition.
    pub fn handle_message(
        &mut self,
        doc: &mut Document,
        host: &mut dyn StylesheetHost,
        message: &ControlMessage,
    ) {
        match message {
            ControlMessage::ToggleDarkMode { enabled: true } => {
                self.enable(doc, host);
            }
            ControlMessage::ToggleDarkMode { enabled: false } => {
                self.disable(doc, host);
            }
        }
    }

    /// After the sweep a light-theme page should no longer have a light
    /// root; anything unparseable or still bright goes straight to black.
    fn force_root_background(&mut self, doc: &mut Document) -> usize {
        let mut writes = 0;
        let targets: Vec<NodeId> = doc.body().into_iter().chain([doc.root()]).collect();
        for id in targets {
            self.snapshots.save(doc, id);
            let still_light = doc
                .computed(id, props::BACKGROUND_COLOR)
                .and_then(parse_color)
                .is_none_or(|c| c.brightness() > BG_BRIGHTNESS);
            if still_light {
                doc.set_important(id, props::BACKGROUND_COLOR, "rgb(0, 0, 0)");
                writes += 1;
            }
        }
        writes
    }
}
