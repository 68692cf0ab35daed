//! Atomic output: write the finished `.dat` bytes to a temp file in the
//! target directory, then rename into place, so a reader never observes a
//! partially written database (§7).

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::Result;

/// Write `bytes` to `path` atomically.
///
/// The temp file is created alongside `path` (same directory) so the final
/// `rename` is same-filesystem and therefore atomic on every platform this
/// crate targets.
pub fn write_atomically(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    let mut tmp = match dir {
        Some(dir) => NamedTempFile::new_in(dir)?,
        None => NamedTempFile::new()?,
    };
    tmp.write_all(bytes)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
