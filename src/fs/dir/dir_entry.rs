use std::ffi::{CStr, OsStr};
use std::os::unix::ffi::OsStrExt;
use std::str;

use derive_more::{Display, From, IsVariant};

use crate::fs::dir::Directory;
use crate::fs::{FileType, OsError};
use crate::fs::syscall;

/// One entry of a directory, as reported by `readdir`.
#[derive(Debug)]
pub struct DirEntry {
    pub ino: u64,
    /// Classification from the entry's `d_type`. `None` when the filesystem doesn't
    /// report types and a `stat` call would be needed.
    pub file_type: Option<FileType>,
    pub name: EntryName,
}

/// A filename as returned by the OS: raw bytes, decoded to text where possible.
///
/// Decoding failure never fails an enumeration; the name is retained in its
/// [`Bytes`](EntryName::Bytes) form instead, with the exact bytes the OS produced.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, IsVariant)]
pub enum EntryName {
    #[display("{_0}")]
    Unicode(String),
    #[display("{}", String::from_utf8_lossy(_0))]
    Bytes(Vec<u8>),
}

impl EntryName {
    pub(crate) fn from_raw(bytes: &[u8]) -> EntryName {
        match str::from_utf8(bytes) {
            Ok(name) => EntryName::Unicode(name.to_owned()),
            Err(_) => EntryName::Bytes(bytes.to_owned()),
        }
    }

    /// The decoded form, if the name decoded.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            EntryName::Unicode(name) => Some(name),
            EntryName::Bytes(_) => None,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            EntryName::Unicode(name) => name.as_bytes(),
            EntryName::Bytes(bytes) => bytes,
        }
    }

    pub fn as_os_str(&self) -> &OsStr {
        OsStr::from_bytes(self.as_bytes())
    }
}

/// Iterator over the entries of an open [`Directory`]. `.` and `..` are skipped.
///
/// End-of-stream and failure both come out of `readdir` as null, so errno is zeroed
/// before every call and consulted afterwards to tell the two apart. After yielding an
/// error the iterator is fused.
pub struct Entries<'a> {
    pub(crate) dir: &'a mut Directory,
    pub(crate) failed: bool,
}

impl Iterator for Entries<'_> {
    type Item = Result<DirEntry, OsError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        loop {
            syscall::clear_err_no();
            // SAFETY: the stream stays open for as long as the Directory is borrowed.
            let entry = unsafe { libc::readdir64(self.dir.stream.0.as_ptr()) };
            if entry.is_null() {
                return match syscall::err_no() {
                    0 => None,
                    errno => {
                        self.failed = true;
                        Some(Err(OsError {
                            errno,
                            path: self.dir.path.clone(),
                        }))
                    }
                };
            }

            // SAFETY: readdir64 returned non-null, so entry points at a dirent64 that is
            // valid until the next call on this stream, with a NUL-terminated d_name.
            let entry = unsafe { &*entry };
            // SAFETY: d_name is NUL-terminated within its array.
            let name = unsafe { CStr::from_ptr(entry.d_name.as_ptr()) }.to_bytes();
            if name == b"." || name == b".." {
                continue;
            }

            return Some(Ok(DirEntry {
                ino: entry.d_ino,
                file_type: FileType::from_dirent_type(entry.d_type),
                name: EntryName::from_raw(name),
            }));
        }
    }
}
