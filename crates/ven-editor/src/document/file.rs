//! Loading and saving.
//!
//! Files are read as bytes and decoded lossily, so a stray invalid sequence
//! turns into U+FFFD instead of refusing to open. Saves go through a
//! temporary file in the target directory that is renamed over the
//! destination, so a failed write never truncates the existing file.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use super::Document;
use crate::error::{Error, Result};

impl Document {
    /// Open `path`. A file that does not exist yet gives an empty document
    /// that will be created on the first save.
    ///
    /// # Errors
    ///
    /// [`Error::Load`] if the file exists but cannot be read.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "new file");
                Vec::new()
            }
            Err(source) => {
                return Err(Error::Load {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let mut text = String::from_utf8_lossy(&bytes).into_owned();
        if !text.ends_with('\n') {
            text.push('\n');
        }

        let mut doc = Self::from_text(&text);
        doc.set_name(path);
        debug!(
            path = %path.display(),
            bytes = bytes.len(),
            lines = doc.line_count(),
            "loaded"
        );
        Ok(doc)
    }

    /// Write the document to its file.
    ///
    /// # Errors
    ///
    /// [`Error::NoFileName`] if the document has no name, [`Error::Save`] if
    /// writing fails. The document is unchanged on error.
    pub fn save(&mut self) -> Result<()> {
        let path = self.name.clone().ok_or(Error::NoFileName)?;
        self.write_to(&path)?;
        self.mutated = false;
        Ok(())
    }

    /// Write the document to `path` and make that its name.
    ///
    /// # Errors
    ///
    /// [`Error::Save`] if writing fails. Name and dirty flag are unchanged
    /// on error.
    pub fn save_as(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.write_to(path)?;
        self.set_name(path);
        self.mutated = false;
        Ok(())
    }

    /// Write through a temp file next to the real target. An existing file
    /// is resolved through symlinks first and keeps its permissions.
    fn write_to(&self, path: &Path) -> Result<()> {
        let contents = self.contents();
        let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        let permissions = fs::metadata(&target).ok().map(|meta| meta.permissions());
        let dir = target
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let written = NamedTempFile::new_in(dir)
            .and_then(|mut tmp| {
                tmp.write_all(contents.as_bytes())?;
                if let Some(permissions) = permissions {
                    tmp.as_file().set_permissions(permissions)?;
                }
                tmp.as_file().sync_all()?;
                Ok(tmp)
            })
            .and_then(|tmp| tmp.persist(&target).map_err(|e| e.error));

        match written {
            Ok(_) => {
                debug!(
                    path = %path.display(),
                    bytes = contents.len(),
                    lines = self.line_count,
                    "saved"
                );
                Ok(())
            }
            Err(source) => {
                warn!(path = %path.display(), error = %source, "save failed");
                Err(Error::Save {
                    path: path.to_path_buf(),
                    source,
                })
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
