use crate::domain::record::AccountsBatch;
use crate::error::{LoaderError, Result};
use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;
use zip::ZipArchive;

/// Upper bound on the buffer reserved up front from an entry's declared size.
/// The header value is untrusted; larger entries grow the buffer while reading.
const MAX_SIZE_HINT: u64 = 1 << 20;

/// One member of an accounts archive, read fully into memory.
#[derive(Debug, Clone, PartialEq)]
pub struct ArchiveEntry {
    pub name: String,
    pub contents: Vec<u8>,
}

impl ArchiveEntry {
    /// Decodes the entry as an `{"accounts": [...]}` document.
    pub fn batch(&self) -> Result<AccountsBatch> {
        AccountsBatch::from_slice(&self.contents).map_err(|source| LoaderError::DecodeError {
            entry: self.name.clone(),
            source,
        })
    }
}

/// Reads account documents from a zip archive.
///
/// The archive owns its underlying source; for file-backed archives the file
/// handle is closed when the `AccountsArchive` is dropped.
pub struct AccountsArchive<R: Read + Seek> {
    archive: ZipArchive<R>,
}

impl AccountsArchive<File> {
    /// Opens the zip archive at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::new(file)
    }
}

impl<R: Read + Seek> AccountsArchive<R> {
    /// Wraps any seekable source (e.g. a `File` or an in-memory `Cursor`).
    pub fn new(source: R) -> Result<Self> {
        let archive = ZipArchive::new(source)?;
        Ok(Self { archive })
    }

    /// Number of members in the archive, directories included.
    pub fn len(&self) -> usize {
        self.archive.len()
    }

    pub fn is_empty(&self) -> bool {
        self.archive.is_empty()
    }

    /// Returns an iterator that lazily reads entries in archive order.
    ///
    /// Each entry is read from the archive only when the iterator is advanced.
    /// Directory members are skipped.
    pub fn entries(&mut self) -> Entries<'_, R> {
        Entries {
            archive: &mut self.archive,
            next: 0,
        }
    }
}

pub struct Entries<'a, R: Read + Seek> {
    archive: &'a mut ZipArchive<R>,
    next: usize,
}

impl<R: Read + Seek> Iterator for Entries<'_, R> {
    type Item = Result<ArchiveEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.next < self.archive.len() {
            let index = self.next;
            self.next += 1;

            let mut file = match self.archive.by_index(index) {
                Ok(file) => file,
                Err(e) => return Some(Err(e.into())),
            };
            if file.is_dir() {
                continue;
            }

            let name = file.name().to_string();
            let mut contents = Vec::with_capacity(file.size().min(MAX_SIZE_HINT) as usize);
            if let Err(e) = file.read_to_end(&mut contents) {
                return Some(Err(e.into()));
            }
            return Some(Ok(ArchiveEntry { name, contents }));
        }
        None
    }
}
