//! Plain text rendering of a [`Report`] and writing it next to its source.

use super::report::Report;
use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Suffix that replaces the `.ufo` extension of a source.
pub const DEFAULT_REPORT_SUFFIX: &str = "prod_names.txt";

const RULE: &str = "---------------------------------------------------";
const INDENT: &str = "    ";
const PROD_NAME_HEADER: &str = "PROD NAME";
const UNICODE_HEADER: &str = "UNICODE";
const WORKING_NAME_HEADER: &str = "WORKING NAME";

const NO_RENAMES: &str = "No names needed setting!";
const NO_ALREADY_CORRECT: &str = "No glyphs were already correctly named.";
const NO_MISSING_CODEPOINTS: &str = "All glyphs have Unicode values!";

/// The report path for a source: `Foo.ufo` becomes `Foo.prod_names.txt`.
pub fn report_path_for(source: &Path, suffix: &str) -> PathBuf {
    source.with_extension(suffix)
}

/// Render the report in its fixed text layout.
pub fn render_report(report: &Report) -> String {
    let mut out = String::new();
    // writing to a String cannot fail
    let _ = write_sections(&mut out, report);
    out
}

fn write_sections(out: &mut String, report: &Report) -> std::fmt::Result {
    writeln!(out, "PRODUCTION NAMING REPORT")?;
    writeln!(out)?;
    writeln!(out, "{}", report.source_name())?;
    writeln!(out, "{RULE}")?;

    writeln!(out, "Production names set:")?;
    writeln!(out)?;
    if report.renames().is_empty() {
        writeln!(out, "{INDENT}{NO_RENAMES}")?;
    } else {
        let width = report
            .renames()
            .iter()
            .map(|r| r.production_name.chars().count())
            .chain(std::iter::once(PROD_NAME_HEADER.len()))
            .max()
            .unwrap_or(PROD_NAME_HEADER.len());
        let unicode_width = UNICODE_HEADER.len();

        writeln!(
            out,
            "{INDENT}{PROD_NAME_HEADER:>width$} : {UNICODE_HEADER:<unicode_width$} • {WORKING_NAME_HEADER}"
        )?;
        writeln!(out)?;
        for rename in report.renames() {
            writeln!(
                out,
                "{INDENT}{:>width$} : {:<unicode_width$} • {}",
                rename.production_name,
                format_codepoint(rename.codepoint),
                rename.working_name
            )?;
        }
    }
    writeln!(out, "{RULE}")?;

    writeln!(out, "Glyphs with already-correct naming:")?;
    write_name_list(out, report.already_correct(), NO_ALREADY_CORRECT)?;
    writeln!(out, "{RULE}")?;

    writeln!(out, "Glyphs with no Unicode value:")?;
    write_name_list(out, report.no_codepoint(), NO_MISSING_CODEPOINTS)
}

fn write_name_list(out: &mut String, names: &[String], when_empty: &str) -> std::fmt::Result {
    if names.is_empty() {
        writeln!(out, "{INDENT}{when_empty}")
    } else {
        writeln!(out, "{INDENT}{}", names.join(" "))
    }
}

/// Hex without a `U+` marker: four digits in the BMP, six above it.
fn format_codepoint(codepoint: u32) -> String {
    if codepoint <= 0xFFFF {
        format!("{codepoint:04X}")
    } else {
        format!("{codepoint:06X}")
    }
}

/// Render `report` and write it to `path`.
///
/// The text goes to a temporary file in the same directory first, which is
/// then renamed over `path`, so a failed write never leaves a partial report.
pub fn write_report(report: &Report, path: &Path) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create a temporary report in {}", dir.display()))?;
    file.write_all(render_report(report).as_bytes())
        .with_context(|| format!("Failed to write report for {}", report.source_name()))?;
    file.persist(path)
        .with_context(|| format!("Failed to save report to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::resolver::GlyphRecord;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;

    fn fixture() -> BTreeMap<u32, String> {
        [(0x0041, "A"), (0x0024, "dollar")]
            .into_iter()
            .map(|(cp, name)| (cp, name.to_string()))
            .collect()
    }

    #[test]
    fn full_layout() {
        let glyphs = vec![
            GlyphRecord::new("A", [0x41]),
            GlyphRecord::new("dollar.oldname", [0x24]),
            GlyphRecord::new("privateUse1", [0xE000]),
            GlyphRecord::new("supplementary", [0x1F600]),
            GlyphRecord::new("space", []),
            GlyphRecord::new("a.ss01", []),
        ];
        let report = Report::build("MyFont-Regular.ufo", &glyphs, &fixture()).unwrap();

        let expected = "\
PRODUCTION NAMING REPORT

MyFont-Regular.ufo
---------------------------------------------------
Production names set:

    PROD NAME : UNICODE • WORKING NAME

       dollar : 0024    • dollar.oldname
      uniE000 : E000    • privateUse1
      u01F600 : 01F600  • supplementary
---------------------------------------------------
Glyphs with already-correct naming:
    A
---------------------------------------------------
Glyphs with no Unicode value:
    a.ss01 space
";
        assert_eq!(render_report(&report), expected);
    }

    #[test]
    fn empty_sections_fall_back() {
        let report = Report::build("Empty.ufo", &Vec::<GlyphRecord>::new(), &fixture()).unwrap();
        let expected = "\
PRODUCTION NAMING REPORT

Empty.ufo
---------------------------------------------------
Production names set:

    No names needed setting!
---------------------------------------------------
Glyphs with already-correct naming:
    No glyphs were already correctly named.
---------------------------------------------------
Glyphs with no Unicode value:
    All glyphs have Unicode values!
";
        assert_eq!(render_report(&report), expected);
    }

    #[test]
    fn long_names_widen_the_column() {
        let glyphs = vec![GlyphRecord::new("hello", [0x41]).with_production_name("nope")];
        let mut list = fixture();
        list.insert(0x41, "averyveryverylongname".to_string());
        let report = Report::build("Wide.ufo", &glyphs, &list).unwrap();
        let text = render_report(&report);
        assert!(text.contains("                PROD NAME : UNICODE • WORKING NAME\n"));
        assert!(text.contains("    averyveryverylongname : 0041    • hello\n"));
    }

    #[test]
    fn report_path_replaces_extension() {
        assert_eq!(
            report_path_for(Path::new("sources/MyFont-Regular.ufo"), DEFAULT_REPORT_SUFFIX),
            PathBuf::from("sources/MyFont-Regular.prod_names.txt")
        );
    }

    #[test]
    fn writes_report_file() {
        let dir = tempfile::tempdir().unwrap();
        let report = Report::build("Out.ufo", &vec![GlyphRecord::new("A", [0x41])], &fixture()).unwrap();
        let path = dir.path().join("Out.prod_names.txt");
        write_report(&report, &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, render_report(&report));
        // only the report itself is left behind
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
