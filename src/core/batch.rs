//! Batch processing of a directory of font sources
//!
//! Fonts are handled one at a time: load, resolve, apply, report. Nothing is
//! shared between fonts, and a font whose resolution fails is neither saved
//! nor reported.

use crate::data::{self, conversions};
use crate::naming::{self, GlyphList, Report};
use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// What to do when one font in a batch fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchPolicy {
    /// Stop at the first failing font and return its error.
    #[default]
    Abort,
    /// Log the failure and go on with the next font.
    Continue,
}

/// Settings for one run over a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOptions {
    pub policy: BatchPolicy,
    /// Write reports but leave the fonts untouched.
    pub dry_run: bool,
    /// Also print every report to stdout.
    pub print_reports: bool,
    pub report_suffix: String,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            policy: BatchPolicy::default(),
            dry_run: false,
            print_reports: false,
            report_suffix: naming::DEFAULT_REPORT_SUFFIX.to_string(),
        }
    }
}

/// The result of processing one font.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontOutcome {
    pub source: PathBuf,
    pub report_path: PathBuf,
    pub renamed: usize,
    pub already_correct: usize,
    pub no_codepoint: usize,
    /// Whether the font itself was saved.
    pub saved: bool,
}

/// A font that failed under [`BatchPolicy::Continue`].
#[derive(Debug)]
pub struct FontFailure {
    pub source: PathBuf,
    pub error: anyhow::Error,
}

#[derive(Debug, Default)]
pub struct BatchSummary {
    pub processed: Vec<FontOutcome>,
    pub failed: Vec<FontFailure>,
}

impl BatchSummary {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Resolve, apply, and report a single font source.
pub fn process_font(
    source: &Path,
    options: &BatchOptions,
    glyph_list: &dyn GlyphList,
) -> Result<FontOutcome> {
    let mut font = data::load_ufo_from_path(source)?;
    let source_name = data::source_name(source);
    let glyphs = conversions::glyph_records(&font);
    debug!("{}: {} glyphs in default layer", source_name, glyphs.len());

    let report = Report::build(source_name, &glyphs, glyph_list)
        .with_context(|| format!("Failed to resolve production names for {}", source.display()))?;

    info!(
        "FONT: {} ({}): {} to set, {} already correct, {} without Unicode",
        conversions::font_display_name(&font),
        report.source_name(),
        report.renames().len(),
        report.already_correct().len(),
        report.no_codepoint().len()
    );

    let saved = if options.dry_run {
        info!("Dry run: leaving {} unchanged", source.display());
        false
    } else if report.is_up_to_date() {
        debug!("{}: nothing to write", report.source_name());
        false
    } else {
        let written = naming::apply_and_save(&mut font, &report, source)?;
        info!("Set {} production names in {}", written, source.display());
        true
    };

    let report_path = naming::report_path_for(source, &options.report_suffix);
    naming::write_report(&report, &report_path)?;
    info!("Wrote report to {}", report_path.display());

    if options.print_reports {
        print_report(&mut std::io::stdout().lock(), &report)?;
    }

    Ok(FontOutcome {
        source: source.to_path_buf(),
        report_path,
        renamed: report.renames().len(),
        already_correct: report.already_correct().len(),
        no_codepoint: report.no_codepoint().len(),
        saved,
    })
}

/// Write the rendered report as-is; it already ends with a newline.
fn print_report(out: &mut impl Write, report: &Report) -> Result<()> {
    out.write_all(naming::render_report(report).as_bytes())
        .with_context(|| format!("Failed to print report for {}", report.source_name()))
}

/// Process every UFO found directly inside `dir`, in path order.
///
/// Under [`BatchPolicy::Abort`] the first failure is returned as the error.
/// Under [`BatchPolicy::Continue`] failures are collected in the summary.
pub fn process_directory(
    dir: &Path,
    options: &BatchOptions,
    glyph_list: &dyn GlyphList,
) -> Result<BatchSummary> {
    let sources = data::find_font_sources(dir)?;
    if sources.is_empty() {
        warn!("No UFO sources found in {}", dir.display());
    }

    let mut summary = BatchSummary::default();
    for source in sources {
        match process_font(&source, options, glyph_list) {
            Ok(outcome) => summary.processed.push(outcome),
            Err(err) => match options.policy {
                BatchPolicy::Abort => return Err(err),
                BatchPolicy::Continue => {
                    error!("Skipping {}: {:#}", source.display(), err);
                    summary.failed.push(FontFailure { source, error: err });
                }
            },
        }
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::GlyphRecord;
    use std::collections::BTreeMap;

    #[test]
    fn printed_report_has_no_trailing_blank_line() {
        let list: BTreeMap<u32, String> = [(0x41, "A".to_string())].into_iter().collect();
        let report = Report::build("Print.ufo", &vec![GlyphRecord::new("A", [0x41])], &list).unwrap();

        let mut out = Vec::new();
        print_report(&mut out, &report).unwrap();
        let printed = String::from_utf8(out).unwrap();
        assert_eq!(printed, naming::render_report(&report));
        assert!(printed.ends_with("    All glyphs have Unicode values!\n"));
        assert!(!printed.ends_with("\n\n"));
    }
}
