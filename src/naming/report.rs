//! The per-font naming report.

use super::agl::GlyphList;
use super::resolver::{resolve, GlyphRecord, NameStatus, ResolveError};
use std::collections::BTreeMap;

/// A glyph that needs a production name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rename {
    pub working_name: String,
    pub production_name: String,
    pub codepoint: u32,
}

/// Resolution results for every glyph in one font.
///
/// Each glyph lands in exactly one of the three partitions. A report is built
/// once and then only read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    source_name: String,
    renames: Vec<Rename>,
    already_correct: Vec<String>,
    no_codepoint: Vec<String>,
}

impl Report {
    /// Resolve every glyph in `glyphs`.
    ///
    /// Fails on the first glyph with more than one codepoint; no partial
    /// report is returned in that case.
    pub fn build<'a>(
        source_name: impl Into<String>,
        glyphs: impl IntoIterator<Item = &'a GlyphRecord>,
        glyph_list: &dyn GlyphList,
    ) -> Result<Self, ResolveError> {
        let mut renames = Vec::new();
        let mut already_correct = Vec::new();
        let mut no_codepoint = Vec::new();

        for glyph in glyphs {
            let entry = resolve(glyph, glyph_list)?;
            match entry.status {
                NameStatus::NoCodepoint => no_codepoint.push(entry.working_name),
                NameStatus::AlreadyCorrect { .. } => already_correct.push(entry.working_name),
                NameStatus::Rename {
                    codepoint,
                    production_name,
                } => renames.push(Rename {
                    working_name: entry.working_name,
                    production_name,
                    codepoint,
                }),
            }
        }

        renames.sort_by(|a, b| {
            a.codepoint
                .cmp(&b.codepoint)
                .then_with(|| a.working_name.cmp(&b.working_name))
        });
        already_correct.sort();
        no_codepoint.sort();

        Ok(Self {
            source_name: source_name.into(),
            renames,
            already_correct,
            no_codepoint,
        })
    }

    /// The font source this report describes, e.g. `MyFont-Regular.ufo`.
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Glyphs needing a production name, by ascending codepoint.
    pub fn renames(&self) -> &[Rename] {
        &self.renames
    }

    /// Working names already matching their production name, sorted.
    pub fn already_correct(&self) -> &[String] {
        &self.already_correct
    }

    /// Working names of glyphs without a codepoint, sorted.
    pub fn no_codepoint(&self) -> &[String] {
        &self.no_codepoint
    }

    /// The to-rename partition as working name -> production name.
    pub fn production_names(&self) -> BTreeMap<String, String> {
        self.renames
            .iter()
            .map(|r| (r.working_name.clone(), r.production_name.clone()))
            .collect()
    }

    pub fn glyph_count(&self) -> usize {
        self.renames.len() + self.already_correct.len() + self.no_codepoint.len()
    }

    /// True when no glyph needs a new production name.
    pub fn is_up_to_date(&self) -> bool {
        self.renames.is_empty()
    }
}
