//! Production glyph naming
//!
//! Everything that decides and records production names:
//! - `agl`: the codepoint -> canonical name lookup
//! - `resolver`: classification of a single glyph
//! - `report`: the per-font aggregate
//! - `writer`: the text report
//! - `apply`: the `public.postscriptNames` lib table

pub mod agl;
pub mod apply;
pub mod report;
pub mod resolver;
pub mod writer;

// Explicit re-exports for public API
pub use agl::{Aglfn, GlyphList};
pub use apply::{apply_and_save, apply_production_names, postscript_names, POSTSCRIPT_NAMES_KEY};
pub use report::{Rename, Report};
pub use resolver::{resolve, synthesized_name, GlyphRecord, NameStatus, ResolutionEntry, ResolveError};
pub use writer::{render_report, report_path_for, write_report, DEFAULT_REPORT_SUFFIX};
