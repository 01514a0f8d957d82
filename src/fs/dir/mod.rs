//! Types for enumerating the entries of a directory: the [`Directory`] handle, the
//! [`Entries`] iterator with its [`DirEntry`]/[`EntryName`] items, and the
//! [`list_dir`] shorthand that most callers want.
//!
//! # Ordering
//! Entries come back in whatever order the OS stores them, which is unspecified and
//! varies between filesystems. `.` and `..` are never produced.
//!
//! # Name Encoding
//! Entry names are byte strings as far as the OS is concerned. A name that decodes as
//! UTF-8 is produced as text; anything else is retained in its raw byte form instead of
//! failing the enumeration. See [`EntryName`].

mod dir;
mod dir_entry;
mod tests;

pub use dir::*;
pub use dir_entry::*;
