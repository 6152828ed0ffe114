//! BOM detection and removal.
//!
//! `strip_bom` is pure so the detection logic is testable without touching
//! the filesystem; `process_file` wires it to the read/rewrite pipeline.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::core::bom::BomEncoding;
use crate::core::errors::Error;

/// Result classification of a single strip attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripOutcome {
    /// The BOM signature was present and has been removed.
    Stripped,
    /// The content did not start with the signature and was left untouched.
    NoBomFound,
}

/// Returns the content with the BOM removed, or `None` when `bytes` does not
/// start with the signature for `encoding`.
///
/// Input shorter than the signature (including empty input) is "no BOM",
/// not an error. The signature is removed entirely or not at all.
pub fn strip_bom(bytes: &[u8], encoding: BomEncoding) -> Option<&[u8]> {
    bytes.strip_prefix(encoding.signature())
}

/// Reads `path` fully, removes the BOM for `encoding` if present and rewrites
/// the file. A file without a BOM is not written to at all, so its
/// modification time is preserved.
pub fn process_file(path: &Path, encoding: BomEncoding) -> Result<StripOutcome, Error> {
    let content = fs::read(path).map_err(|e| Error::io(path, e))?;

    match strip_bom(&content, encoding) {
        Some(rest) => {
            tracing::info!("BOM found in {} ({})", path.display(), encoding);
            rewrite_atomic(path, rest)?;
            tracing::info!("BOM removed from {}", path.display());
            Ok(StripOutcome::Stripped)
        }
        None => {
            tracing::debug!("No BOM found in {} ({})", path.display(), encoding);
            Ok(StripOutcome::NoBomFound)
        }
    }
}

/// Writes `content` to a temporary sibling of `path`, then renames it over
/// `path`. An interrupted run leaves the original intact instead of a
/// truncated file.
fn rewrite_atomic(path: &Path, content: &[u8]) -> Result<(), Error> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| Error::io(path, e))?;
    tmp.write_all(content).map_err(|e| Error::io(path, e))?;
    tmp.persist(path).map_err(|e| Error::io(path, e.error))?;
    Ok(())
}
