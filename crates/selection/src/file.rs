//! File handles the selection layer works with.
//!
//! The host owns its files; we only ask questions about them. Everything the
//! validator and the canonicalizer need goes through [`FileReference`], so an
//! IDE virtual file, an in-memory buffer, or a plain path on disk all work.

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use canonical::Charset;

/// Read-only view of a host-owned file.
///
/// Implementations must not cache answers that can change while a modal
/// dialog is open: [`is_valid`](FileReference::is_valid) in particular is
/// asked again after the chooser returns.
pub trait FileReference {
    /// Location of the file, used for titles and logs.
    fn path(&self) -> &Path;

    /// Extension without the leading dot, if the name has one.
    fn extension(&self) -> Option<&str> {
        self.path().extension().and_then(OsStr::to_str)
    }

    /// True for folders, even when the name ends in `.json`.
    fn is_directory(&self) -> bool;

    /// True while the file still exists.
    fn is_valid(&self) -> bool;

    /// True when the content can be opened for reading right now.
    fn is_readable(&self) -> bool {
        self.is_valid()
    }

    /// Size of the content in bytes; `0` when unknown or unreadable.
    fn len(&self) -> u64;

    /// True when there are no bytes to compare.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Raw bytes of the file.
    fn contents(&self) -> io::Result<Vec<u8>>;

    /// Charset the host declares for this file.
    fn charset(&self) -> Charset {
        Charset::Utf8
    }
}

/// A file on the local filesystem with a declared charset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFile {
    path: PathBuf,
    charset: Charset,
}

impl LocalFile {
    /// Wraps `path`, declaring UTF-8 content.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            charset: Charset::Utf8,
        }
    }

    /// Overrides the declared charset.
    pub fn with_charset(mut self, charset: Charset) -> Self {
        self.charset = charset;
        self
    }
}

impl FileReference for LocalFile {
    fn path(&self) -> &Path {
        &self.path
    }

    fn is_directory(&self) -> bool {
        fs::metadata(&self.path)
            .map(|meta| meta.is_dir())
            .unwrap_or(false)
    }

    fn is_valid(&self) -> bool {
        fs::metadata(&self.path).is_ok()
    }

    fn len(&self) -> u64 {
        fs::metadata(&self.path).map(|meta| meta.len()).unwrap_or(0)
    }

    fn is_readable(&self) -> bool {
        fs::File::open(&self.path).is_ok()
    }

    fn contents(&self) -> io::Result<Vec<u8>> {
        fs::read(&self.path)
    }

    fn charset(&self) -> Charset {
        self.charset
    }
}
