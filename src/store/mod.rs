//! Content stores: where template text comes from.
//!
//! A store maps a relative, slash-separated path to raw text. Absence is an
//! ordinary outcome (`Ok(None)`), distinct from an I/O failure (`Err`).
//!
//! - [`FsStore`]: files under a root directory (the prompts directory)
//! - [`MemoryStore`]: an in-memory map that counts reads

mod fs;
mod memory;

use std::io;

pub use fs::FsStore;
pub use memory::MemoryStore;

/// Source of raw template text.
pub trait ContentStore {
    /// Read the content at `path`, or `Ok(None)` if nothing is there.
    fn read(&self, path: &str) -> io::Result<Option<String>>;
}

impl<S: ContentStore + ?Sized> ContentStore for &S {
    fn read(&self, path: &str) -> io::Result<Option<String>> {
        (**self).read(path)
    }
}
