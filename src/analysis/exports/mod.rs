//! Export detection: classification of export statements and per-file
//! multiplicity analysis.

mod analyzer;
mod detector;

pub use analyzer::{analyze_file_exports, export_summary, is_barrel_file, ExportAnalysis};
pub use detector::{detect_exports, ExportChecks, ExportInfo, ExportKind};
