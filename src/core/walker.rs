//! Directory traversal dispatching files to the BOM stripper.

use std::path::Path;

use walkdir::WalkDir;

use crate::core::bom::BomEncoding;
use crate::core::stripper::{self, StripOutcome};

/// Counters accumulated over one directory walk.
#[derive(Debug, Default, Clone, Copy)]
pub struct WalkSummary {
    /// Regular files handed to the stripper.
    pub files_processed: usize,
    /// Files whose BOM was removed.
    pub stripped: usize,
    /// Per-file and per-directory errors (logged, never fatal).
    pub failures: usize,
}

/// Walks `dir`, removing the BOM from every regular file found.
///
/// Non-recursive mode looks only at the directory's immediate entries;
/// subdirectories are skipped, not descended into. Entries that are neither
/// regular files nor directories (symlinks, devices, sockets) are skipped
/// silently. Errors are logged and counted at the entry they occurred on;
/// the walk itself never aborts, so one unreadable subtree does not affect
/// its siblings.
pub fn walk_directory(dir: &Path, encoding: BomEncoding, recursive: bool) -> WalkSummary {
    let mut summary = WalkSummary::default();

    // WalkDir keeps an explicit stack internally, so traversal depth is not
    // limited by the call stack. max_depth(1) yields the immediate entries
    // without descending.
    let walker = if recursive {
        WalkDir::new(dir)
    } else {
        WalkDir::new(dir).max_depth(1)
    };

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let path = err.path().unwrap_or(dir);
                tracing::error!("Error accessing {}: {}", path.display(), err);
                summary.failures += 1;
                continue;
            }
        };

        let file_type = entry.file_type();
        if file_type.is_file() {
            summary.files_processed += 1;
            match stripper::process_file(entry.path(), encoding) {
                Ok(StripOutcome::Stripped) => summary.stripped += 1,
                Ok(StripOutcome::NoBomFound) => {}
                Err(err) => {
                    tracing::error!("Error processing {}: {}", entry.path().display(), err);
                    summary.failures += 1;
                }
            }
        } else if file_type.is_dir() && !recursive && entry.depth() > 0 {
            tracing::info!(
                "Skipping subdirectory {} (recursive is off)",
                entry.path().display()
            );
        }
    }

    summary
}
