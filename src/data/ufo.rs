//! UFO file I/O operations

use anyhow::{bail, Context, Result};
use norad::Font;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Load a UFO font file from disk
pub fn load_ufo_from_path(path: impl AsRef<Path>) -> Result<Font> {
    let path = path.as_ref();
    let font = Font::load(path)
        .with_context(|| format!("Failed to load font source {}", path.display()))?;
    Ok(font)
}

/// Whether `path` looks like a UFO package: a directory with a `.ufo`
/// extension, in any case.
pub fn is_ufo_path(path: &Path) -> bool {
    path.is_dir()
        && path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("ufo"))
}

/// UFO packages found directly inside `dir`, sorted by path.
///
/// Subdirectories are not searched.
pub fn find_font_sources(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        bail!("Not a directory: {}", dir.display());
    }

    let mut sources = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("Failed to read {}", dir.display()))? {
        let path = entry?.path();
        if is_ufo_path(&path) {
            sources.push(path);
        } else {
            debug!("Skipping {}", path.display());
        }
    }
    sources.sort();
    Ok(sources)
}

/// The name a source goes by in reports, e.g. `MyFont-Regular.ufo`.
pub fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
