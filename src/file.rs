//! File-backed documents.
//!
//! [`IniFile`] ties an [`Ini`] to the path it was read from. Saving always
//! re-serializes the whole document and replaces the file contents; there is
//! no incremental write.
//!
//! ## Examples
//!
//! ```rust,no_run
//! use strict_ini::IniFile;
//!
//! let mut file = IniFile::open("app.ini")?;
//! file.document_mut()
//!     .section_mut("server")?
//!     .item_mut("port")?
//!     .set(9090)?;
//! file.save()?;
//! # Ok::<(), strict_ini::Error>(())
//! ```

use crate::{Ini, IniOptions, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// An INI document together with the file it is saved to.
#[derive(Debug, Clone)]
pub struct IniFile {
    path: PathBuf,
    document: Ini,
    options: IniOptions,
}

impl IniFile {
    /// Reads and parses the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if the file cannot be read, or
    /// the parse error for its first malformed line.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let text = fs::read_to_string(&path)
            .map_err(|e| crate::Error::io(format!("cannot read {}: {}", path.display(), e)))?;
        let document = crate::from_str(&text)?;
        info!(
            path = %path.display(),
            sections = document.len(),
            "opened INI file"
        );
        Ok(IniFile {
            path,
            document,
            options: IniOptions::default(),
        })
    }

    /// Starts an empty document that will be saved to `path`.
    ///
    /// Nothing is written until [`IniFile::save`] is called.
    #[must_use]
    pub fn create<P: AsRef<Path>>(path: P) -> Self {
        IniFile {
            path: path.as_ref().to_path_buf(),
            document: Ini::new(),
            options: IniOptions::default(),
        }
    }

    /// Sets the options used when saving.
    #[must_use]
    pub fn with_options(mut self, options: IniOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn document(&self) -> &Ini {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Ini {
        &mut self.document
    }

    /// Consumes the file handle and returns its document.
    #[must_use]
    pub fn into_document(self) -> Ini {
        self.document
    }

    /// Writes the whole document back to its path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if the file cannot be written.
    pub fn save(&self) -> Result<()> {
        self.write_to(&self.path)
    }

    /// Writes the whole document to `path` and makes it the new save target.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if the file cannot be written;
    /// the save target is unchanged in that case.
    pub fn save_as<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        self.write_to(path)?;
        self.path = path.to_path_buf();
        Ok(())
    }

    fn write_to(&self, path: &Path) -> Result<()> {
        let text = crate::to_string_with_options(&self.document, &self.options);
        fs::write(path, text)
            .map_err(|e| crate::Error::io(format!("cannot write {}: {}", path.display(), e)))?;
        info!(
            path = %path.display(),
            sections = self.document.len(),
            "saved INI file"
        );
        Ok(())
    }
}
