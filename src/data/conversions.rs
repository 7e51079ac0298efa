//! UFO format conversion utilities
//!
//! Conversion from norad's font model into the detached glyph records used by
//! name resolution. This is pure data transformation; nothing here touches the
//! file system.

use crate::naming::{postscript_names, GlyphRecord};
use norad::Font;
use std::collections::BTreeMap;

impl GlyphRecord {
    /// Convert from a norad glyph, looking up its current production name in
    /// the font's `public.postscriptNames` table.
    pub fn from_norad_glyph(
        norad_glyph: &norad::Glyph,
        production_names: &BTreeMap<String, String>,
    ) -> Self {
        let name = norad_glyph.name().to_string();
        let production_name = production_names.get(&name).cloned();
        Self {
            codepoints: norad_glyph.codepoints.iter().map(u32::from).collect(),
            production_name,
            name,
        }
    }
}

/// Records for every glyph in the font's default layer, in layer order.
pub fn glyph_records(font: &Font) -> Vec<GlyphRecord> {
    let production_names = postscript_names(&font.lib);
    font.default_layer()
        .iter()
        .map(|glyph| GlyphRecord::from_norad_glyph(glyph, &production_names))
        .collect()
}

/// Family and style name for log output, e.g. "My Font Bold".
pub fn font_display_name(font: &Font) -> String {
    let parts: Vec<&str> = [
        font.font_info.family_name.as_deref(),
        font.font_info.style_name.as_deref(),
    ]
    .into_iter()
    .flatten()
    .collect();

    if parts.is_empty() {
        "Untitled".to_string()
    } else {
        parts.join(" ")
    }
}
