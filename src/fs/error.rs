use std::io::{self};
use std::path::PathBuf;

use derive_more::{Display, Error};

use crate::fs::syscall;

/// The one failure shape of this crate: the OS rejected an operation on `path` and set
/// `errno`. The code is passed through unmodified, so callers can match on the usual
/// `libc` constants.
#[derive(Debug, Display, Error)]
#[display("{}: {}", path.display(), io::Error::from_raw_os_error(*errno))]
pub struct OsError {
    pub errno: i32,
    pub path: PathBuf,
}

impl OsError {
    /// Captures the calling thread's current errno against `path`. Must be called
    /// before anything else can overwrite errno.
    pub(crate) fn last(path: impl Into<PathBuf>) -> OsError {
        OsError {
            errno: syscall::err_no(),
            path: path.into(),
        }
    }
}
