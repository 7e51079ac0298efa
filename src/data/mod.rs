//! Font source data: UFO discovery, loading, and conversion into the plain
//! records the naming code works on.

pub mod conversions;
pub mod ufo;

pub use conversions::{font_display_name, glyph_records};
pub use ufo::{find_font_sources, load_ufo_from_path, source_name};
