use std::io::{self};

pub fn err_no() -> i32 {
    // SAFETY: raw_os_error guarantees Some if constructed from last_os_error.
    unsafe { io::Error::last_os_error().raw_os_error().unwrap_unchecked() }
}

pub fn clear_err_no() {
    // readdir reports end-of-stream and failure identically (null), so errno has to be
    // zeroed before the call for the two to be distinguishable afterwards.
    // SAFETY: __errno_location returns a valid pointer to this thread's errno.
    unsafe { *libc::__errno_location() = 0 };
}
