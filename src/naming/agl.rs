//! Codepoint to production name lookup.
//!
//! The built-in table is generated by our build.rs script from
//! `resources/aglfn.txt`, the Adobe Glyph List For New Fonts, at
//! https://github.com/adobe-type-tools/agl-aglfn/blob/master/aglfn.txt

use std::collections::{BTreeMap, HashMap};

include!(concat!(env!("OUT_DIR"), "/aglfn_codegen.rs"));

/// A read-only mapping from a Unicode codepoint to its canonical glyph name.
///
/// The resolver only ever sees this trait, so tests can hand it a small
/// fixture table instead of the full AGLFN.
pub trait GlyphList {
    /// The canonical name for `codepoint`, if the list has one.
    fn name_for_codepoint(&self, codepoint: u32) -> Option<&str>;
}

/// The Adobe Glyph List For New Fonts.
#[derive(Debug, Clone, Copy, Default)]
pub struct Aglfn;

impl Aglfn {
    /// Number of entries in the bundled table.
    pub fn len(&self) -> usize {
        AGLFN.len()
    }

    pub fn is_empty(&self) -> bool {
        AGLFN.is_empty()
    }
}

impl GlyphList for Aglfn {
    fn name_for_codepoint(&self, codepoint: u32) -> Option<&str> {
        AGLFN
            .binary_search_by(|probe| probe.0.cmp(&codepoint))
            .ok()
            .map(|idx| AGLFN[idx].1)
    }
}

impl GlyphList for BTreeMap<u32, String> {
    fn name_for_codepoint(&self, codepoint: u32) -> Option<&str> {
        self.get(&codepoint).map(String::as_str)
    }
}

impl GlyphList for HashMap<u32, String> {
    fn name_for_codepoint(&self, codepoint: u32) -> Option<&str> {
        self.get(&codepoint).map(String::as_str)
    }
}

impl<T: GlyphList + ?Sized> GlyphList for &T {
    fn name_for_codepoint(&self, codepoint: u32) -> Option<&str> {
        (**self).name_for_codepoint(codepoint)
    }
}
