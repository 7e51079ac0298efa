//! Persisting production names into a font's lib.

use super::report::Report;
use anyhow::{Context, Result};
use norad::Font;
use plist::{Dictionary, Value};
use std::collections::BTreeMap;
use std::path::Path;

/// The UFO lib key holding the working name -> production name table.
pub const POSTSCRIPT_NAMES_KEY: &str = "public.postscriptNames";

/// Read the production name table from a font lib.
///
/// Non-string values are skipped; a missing or malformed table reads as empty.
pub fn postscript_names(lib: &Dictionary) -> BTreeMap<String, String> {
    lib.get(POSTSCRIPT_NAMES_KEY)
        .and_then(Value::as_dictionary)
        .map(|table| {
            table
                .iter()
                .filter_map(|(name, value)| {
                    value
                        .as_string()
                        .map(|prod| (name.to_string(), prod.to_string()))
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Merge the report's to-rename mapping into the font lib.
///
/// Entries for glyphs that are not renamed are kept as they are. Glyph names,
/// groups, kerning and features are not touched. Returns how many entries were
/// written.
pub fn apply_production_names(font: &mut Font, report: &Report) -> usize {
    let mut table = font
        .lib
        .get(POSTSCRIPT_NAMES_KEY)
        .and_then(Value::as_dictionary)
        .cloned()
        .unwrap_or_default();

    for rename in report.renames() {
        table.insert(
            rename.working_name.clone(),
            Value::String(rename.production_name.clone()),
        );
    }

    font.lib.insert(POSTSCRIPT_NAMES_KEY.to_string(), Value::Dictionary(table));
    report.renames().len()
}

/// Apply the report to `font` and save it back to `path`.
pub fn apply_and_save(font: &mut Font, report: &Report, path: &Path) -> Result<usize> {
    let written = apply_production_names(font, report);
    font.save(path)
        .with_context(|| format!("Failed to save font source {}", path.display()))?;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::resolver::GlyphRecord;
    use std::collections::BTreeMap;

    fn fixture() -> BTreeMap<u32, String> {
        [(0x0041, "A"), (0x0024, "dollar")]
            .into_iter()
            .map(|(cp, name)| (cp, name.to_string()))
            .collect()
    }

    #[test]
    fn writes_only_renames() {
        let glyphs = vec![
            GlyphRecord::new("A", [0x41]),
            GlyphRecord::new("dollar.oldname", [0x24]),
            GlyphRecord::new("space", []),
        ];
        let report = Report::build("Test.ufo", &glyphs, &fixture()).unwrap();
        let mut font = Font::new();
        assert_eq!(apply_production_names(&mut font, &report), 1);

        let names = postscript_names(&font.lib);
        assert_eq!(names.len(), 1);
        assert_eq!(names["dollar.oldname"], "dollar");
    }

    #[test]
    fn keeps_unrelated_entries() {
        let mut existing = Dictionary::new();
        existing.insert("ornament".into(), Value::String("uniE100".into()));
        existing.insert("dollar.oldname".into(), Value::String("uni0024".into()));
        let mut font = Font::new();
        font.lib.insert(POSTSCRIPT_NAMES_KEY.into(), Value::Dictionary(existing));

        let glyphs = vec![GlyphRecord::new("dollar.oldname", [0x24]).with_production_name("uni0024")];
        let report = Report::build("Test.ufo", &glyphs, &fixture()).unwrap();
        apply_production_names(&mut font, &report);

        let names = postscript_names(&font.lib);
        assert_eq!(names["ornament"], "uniE100");
        assert_eq!(names["dollar.oldname"], "dollar");
    }

    #[test]
    fn malformed_table_reads_as_empty() {
        let mut lib = Dictionary::new();
        lib.insert(POSTSCRIPT_NAMES_KEY.into(), Value::Boolean(false));
        assert!(postscript_names(&lib).is_empty());

        let mut table = Dictionary::new();
        table.insert("a".into(), Value::Boolean(true));
        table.insert("b".into(), Value::String("b".into()));
        lib.insert(POSTSCRIPT_NAMES_KEY.into(), Value::Dictionary(table));
        assert_eq!(postscript_names(&lib).len(), 1);
    }
}
