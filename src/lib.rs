//! Directory listing built directly on the OS's directory-stream calls.
//!
//! This crate does one job: enumerate the entries of a directory, the way `opendir`,
//! `readdir` and `closedir` hand them out. The point is the contract around the awkward
//! cases: `.` and `..` are excluded, a name that doesn't decode is retained as raw bytes
//! rather than failing the whole listing, every failure carries the errno and the
//! offending path, and the directory stream is released on every exit path.
//!
//! Calls block the invoking thread for the duration of the enumeration. There is no
//! cancellation, no retrying and no shared state between calls.
//!
//! # Errors
//! There is exactly one failure shape, [`fs::OsError`]: whatever the OS reported,
//! unmodified, plus the path it was reported for. A listing that fails partway is
//! discarded rather than returned half-built.
//!
//! # Dependencies
//! The [`fs`] module relies on `libc` for its thin syscall wrappers, providing strong
//! typing and portability. This crate also depends on some derive macros because
//! they're helpful and remove the need for some very repetitive programming.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "fs")]
pub mod fs;
