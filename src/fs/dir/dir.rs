use std::ffi::CString;
use std::io;
use std::mem;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};
use std::ptr::NonNull;
use std::thread;

use libc::EINVAL;

use crate::fs::OsError;
use crate::fs::dir::{Entries, EntryName};
use crate::fs::syscall;

/// A scoped handle over an open directory stream. The stream is released exactly once,
/// either by [`close`](Directory::close) or on drop.
#[derive(Debug)]
pub struct Directory {
    pub(crate) stream: DirStream,
    pub(crate) path: PathBuf,
}

impl Directory {
    pub fn open<P: AsRef<Path>>(dir_path: P) -> Result<Directory, OsError> {
        let path = dir_path.as_ref().to_owned();
        let Ok(pathname) = CString::new(path.as_os_str().as_bytes()) else {
            // A path with an interior NUL byte can't name a directory.
            return Err(OsError { errno: EINVAL, path });
        };

        // SAFETY: pathname is NUL-terminated and outlives the call.
        match NonNull::new(unsafe { libc::opendir(pathname.as_ptr()) }) {
            None => Err(OsError::last(path)),
            Some(dirp) => Ok(Directory {
                stream: DirStream(dirp),
                path,
            }),
        }
    }

    /// Iterates the remaining entries of this directory, skipping `.` and `..`.
    pub fn entries(&mut self) -> Entries<'_> {
        Entries {
            dir: self,
            failed: false,
        }
    }

    pub fn close(self) -> Result<(), OsError> {
        let Directory { stream, path } = self;
        stream.close(&path)
    }
}

/// Exclusive owner of the raw stream returned by `opendir`.
#[derive(Debug)]
pub(crate) struct DirStream(pub(crate) NonNull<libc::DIR>);

impl DirStream {
    fn close(self, path: &Path) -> Result<(), OsError> {
        let dirp = self.0.as_ptr();
        mem::forget(self);

        // SAFETY: dirp came from opendir and ownership of it ends here.
        match unsafe { libc::closedir(dirp) } {
            -1 => Err(OsError::last(path)),
            _ => Ok(()),
        }
    }
}

impl Drop for DirStream {
    fn drop(&mut self) {
        // SAFETY: closedir invalidates the stream regardless of the outcome, but self is
        // already being dropped.
        if unsafe { libc::closedir(self.0.as_ptr()) } == -1
            // Panic only if we aren't already, to prevent aborting an existing unwind.
            && !thread::panicking()
        {
            panic!(
                "error while dropping directory stream: {}",
                io::Error::from_raw_os_error(syscall::err_no())
            );
        }
    }
}

/// Names of the entries in the directory at `dir_path`, excluding `.` and `..`, in the
/// order the OS enumerates them.
///
/// The directory stream is closed before returning, on success and on failure alike.
/// Any OS failure is surfaced immediately and the partially built listing is discarded.
pub fn list_dir<P: AsRef<Path>>(dir_path: P) -> Result<Vec<EntryName>, OsError> {
    let mut dir = Directory::open(dir_path)?;

    let mut names = Vec::new();
    for entry in dir.entries() {
        names.push(entry?.name);
    }
    dir.close()?;

    Ok(names)
}
