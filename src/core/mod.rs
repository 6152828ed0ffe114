/*!
# Core Module

BOM signatures, the stripping operation itself, and the directory walker.
*/

pub mod bom;
pub mod errors;
pub mod stripper;
pub mod walker;

pub use bom::BomEncoding;
pub use errors::Error;
pub use stripper::{process_file, strip_bom, StripOutcome};
pub use walker::{walk_directory, WalkSummary};
