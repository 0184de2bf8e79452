//! HTML snapshot I/O.
//!
//! A snapshot is rendered HTML whose styling survives in `style`
//! attributes - the closest file-shaped stand-in for a live document's
//! computed styles. Loading derives per-element computed bases
//! (inheritance and UA defaults); serialization writes the possibly
//! rewritten inline styles back out.

mod load;
mod serialize;

pub use load::load;
pub use serialize::serialize;

use crate::dom::Document;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Snapshot I/O errors.
#[derive(Debug, Error)]
pub enum HtmlError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("HTML parsing error")]
    Parse,
}

/// Read and parse a snapshot file.
pub fn read_snapshot(path: &Path) -> Result<Document, HtmlError> {
    let raw =
        std::fs::read_to_string(path).map_err(|err| HtmlError::Io(path.to_path_buf(), err))?;
    load(&raw)
}
