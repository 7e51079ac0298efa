//! Production name resolution for a single glyph.

use super::agl::GlyphList;
use thiserror::Error;

/// The parts of a glyph the resolver looks at.
///
/// This is plain data, detached from norad, so that resolution stays a pure
/// function over one glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphRecord {
    /// The working name, unique within a font.
    pub name: String,
    /// The glyph's entry in `public.postscriptNames`, if it has one.
    pub production_name: Option<String>,
    pub codepoints: Vec<u32>,
}

impl GlyphRecord {
    pub fn new(name: impl Into<String>, codepoints: impl IntoIterator<Item = u32>) -> Self {
        Self {
            name: name.into(),
            production_name: None,
            codepoints: codepoints.into_iter().collect(),
        }
    }

    /// Attach an existing production name to this record.
    pub fn with_production_name(mut self, production_name: impl Into<String>) -> Self {
        self.production_name = Some(production_name.into());
        self
    }

    /// The name the glyph will carry in a compiled font today: its production
    /// name when one is set, otherwise its working name.
    pub fn current_name(&self) -> &str {
        self.production_name.as_deref().unwrap_or(&self.name)
    }
}

/// Errors that stop resolution for a font.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error(
        "glyph '{glyph}' has multiple codepoints ({}); multi-codepoint glyphs are not supported",
        format_codepoints(.codepoints)
    )]
    MultipleCodepoints { glyph: String, codepoints: Vec<u32> },
}

fn format_codepoints(codepoints: &[u32]) -> String {
    codepoints
        .iter()
        .map(|cp| format!("U+{cp:04X}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// How a glyph's name relates to its computed production name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameStatus {
    /// No codepoint; the glyph is left alone.
    NoCodepoint,
    /// The current name already is the production name.
    AlreadyCorrect {
        codepoint: u32,
        production_name: String,
    },
    /// The glyph needs `production_name`.
    Rename {
        codepoint: u32,
        production_name: String,
    },
}

/// The outcome of resolving one glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionEntry {
    pub working_name: String,
    pub status: NameStatus,
}

impl ResolutionEntry {
    /// The production name computed for this glyph, if it has a codepoint.
    pub fn production_name(&self) -> Option<&str> {
        match &self.status {
            NameStatus::NoCodepoint => None,
            NameStatus::AlreadyCorrect {
                production_name, ..
            }
            | NameStatus::Rename {
                production_name, ..
            } => Some(production_name),
        }
    }

    pub fn codepoint(&self) -> Option<u32> {
        match self.status {
            NameStatus::NoCodepoint => None,
            NameStatus::AlreadyCorrect { codepoint, .. } | NameStatus::Rename { codepoint, .. } => {
                Some(codepoint)
            }
        }
    }
}

/// The name used for a codepoint that has no entry in the glyph list.
///
/// `uniXXXX` inside the BMP, `uXXXXXX` above it.
pub fn synthesized_name(codepoint: u32) -> String {
    if codepoint <= 0xFFFF {
        format!("uni{codepoint:04X}")
    } else {
        format!("u{codepoint:06X}")
    }
}

/// Compute the production name status for one glyph.
pub fn resolve(
    glyph: &GlyphRecord,
    glyph_list: &dyn GlyphList,
) -> Result<ResolutionEntry, ResolveError> {
    let codepoint = match glyph.codepoints.as_slice() {
        [] => {
            return Ok(ResolutionEntry {
                working_name: glyph.name.clone(),
                status: NameStatus::NoCodepoint,
            })
        }
        [codepoint] => *codepoint,
        _ => {
            return Err(ResolveError::MultipleCodepoints {
                glyph: glyph.name.clone(),
                codepoints: glyph.codepoints.clone(),
            })
        }
    };

    let production_name = match glyph_list.name_for_codepoint(codepoint) {
        Some(canonical) => canonical.to_string(),
        None => synthesized_name(codepoint),
    };

    // a synthesized name that was applied on an earlier run counts as correct too
    let status = if production_name == glyph.current_name() {
        NameStatus::AlreadyCorrect {
            codepoint,
            production_name,
        }
    } else {
        NameStatus::Rename {
            codepoint,
            production_name,
        }
    };

    Ok(ResolutionEntry {
        working_name: glyph.name.clone(),
        status,
    })
}
