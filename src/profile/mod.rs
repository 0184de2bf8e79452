//! Site-profile stylesheets.
//!
//! The engine carries no site-specific knowledge: at enable/disable time
//! it exercises a capability to inject or remove one opaque stylesheet
//! keyed by the current hostname. [`ProfileStore`] backs that capability
//! with a directory of `<hostname>.css` files; [`NullHost`] is the
//! capability for sessions with profiles disabled.

use crate::debug;
use crate::dom::Document;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Profile store errors.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),
}

/// The stylesheet capability the session calls at enable/disable time.
pub trait StylesheetHost {
    /// Inject the override stylesheet for `hostname`, if one exists.
    /// A missing profile is a quiet no-op, never an error.
    fn inject(&mut self, doc: &mut Document, hostname: &str) -> Result<(), ProfileError>;

    /// Remove a previously injected stylesheet.
    fn remove(&mut self, doc: &mut Document, hostname: &str) -> Result<(), ProfileError>;
}

/// Host used when profiles are disabled.
pub struct NullHost;

impl StylesheetHost for NullHost {
    fn inject(&mut self, _doc: &mut Document, _hostname: &str) -> Result<(), ProfileError> {
        Ok(())
    }

    fn remove(&mut self, _doc: &mut Document, _hostname: &str) -> Result<(), ProfileError> {
        Ok(())
    }
}

/// Directory-backed stylesheet store: `<dir>/<hostname>.css`.
pub struct ProfileStore {
    dir: PathBuf,
}

impl ProfileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, hostname: &str) -> Option<PathBuf> {
        // Hostnames come from outside; anything path-like is refused.
        if hostname.is_empty()
            || hostname.contains(['/', '\\'])
            || hostname.contains("..")
        {
            return None;
        }
        Some(self.dir.join(format!("{hostname}.css")))
    }
}

impl StylesheetHost for ProfileStore {
    fn inject(&mut self, doc: &mut Document, hostname: &str) -> Result<(), ProfileError> {
        let Some(path) = self.path_for(hostname) else {
            debug!("profile"; "refusing path-like hostname `{hostname}`");
            return Ok(());
        };
        match std::fs::read_to_string(&path) {
            Ok(css) => {
                doc.set_profile(hostname, &css);
                debug!("profile"; "injected {}", path.display());
                Ok(())
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!("profile"; "no profile for {hostname}");
                Ok(())
            }
            Err(err) => Err(ProfileError::Io(path, err)),
        }
    }

    fn remove(&mut self, doc: &mut Document, _hostname: &str) -> Result<(), ProfileError> {
        doc.clear_profile();
        Ok(())
    }
}

/// Convenience used by the CLI drivers.
pub fn host_for(enabled: bool, dir: &Path) -> Box<dyn StylesheetHost> {
    if enabled {
        Box::new(ProfileStore::new(dir))
    } else {
        Box::new(NullHost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_inject_reads_profile() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("example.com.css"), "body { margin: 0 }").unwrap();

        let mut store = ProfileStore::new(dir.path());
        let mut doc = Document::new();
        store.inject(&mut doc, "example.com").unwrap();
        assert_eq!(doc.profile(), Some(("example.com", "body { margin: 0 }")));

        store.remove(&mut doc, "example.com").unwrap();
        assert_eq!(doc.profile(), None);
    }

    #[test]
    fn test_missing_profile_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = ProfileStore::new(dir.path());
        let mut doc = Document::new();
        store.inject(&mut doc, "nothing.example").unwrap();
        assert_eq!(doc.profile(), None);
    }

    #[test]
    fn test_pathlike_hostname_refused() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("secret.css"), "x").unwrap();

        let mut store = ProfileStore::new(dir.path());
        let mut doc = Document::new();
        store.inject(&mut doc, "../secret").unwrap();
        store.inject(&mut doc, "a/b").unwrap();
        assert_eq!(doc.profile(), None);
    }

    #[test]
    fn test_null_host_does_nothing() {
        let mut doc = Document::new();
        NullHost.inject(&mut doc, "example.com").unwrap();
        assert_eq!(doc.profile(), None);
    }
}
