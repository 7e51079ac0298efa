//! Application runner logic
//!
//! Handles the different ways to run prodnames

use crate::core::batch::{self, BatchSummary};
use crate::core::cli::CliArgs;
use crate::core::config_file::ConfigFile;
use crate::logging;
use crate::naming::Aglfn;
use anyhow::{anyhow, bail, Result};
use tracing::{info, warn};

/// Run prodnames with the given CLI arguments.
/// Handles special CLI flags and delegates to the batch driver.
pub fn run_app(cli_args: CliArgs) -> Result<()> {
    // Handle --new-config flag specially
    if cli_args.new_config {
        return ConfigFile::initialize_config_directory();
    }

    let config = ConfigFile::load();
    let _guard = logging::init_logging(cli_args.verbose, cli_args.log_to_file(config.as_ref()))?;

    cli_args.validate(config.as_ref()).map_err(|e| anyhow!(e))?;

    let dir = cli_args.sources_dir(config.as_ref());
    let options = cli_args.batch_options(config.as_ref());
    info!("Processing UFO sources in {}", dir.display());

    let summary = batch::process_directory(&dir, &options, &Aglfn)?;
    finish(&summary)
}

/// Log the totals and turn collected failures into an error.
fn finish(summary: &BatchSummary) -> Result<()> {
    let renamed: usize = summary.processed.iter().map(|o| o.renamed).sum();
    info!(
        "Done: {} fonts processed, {} production names set, {} failed",
        summary.processed.len(),
        renamed,
        summary.failed.len()
    );

    if summary.is_success() {
        return Ok(());
    }

    for failure in &summary.failed {
        warn!("Failed: {}: {:#}", failure.source.display(), failure.error);
    }
    let failed: Vec<String> = summary
        .failed
        .iter()
        .map(|f| f.source.display().to_string())
        .collect();
    bail!("{} font(s) failed: {}", failed.len(), failed.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::batch::{FontFailure, FontOutcome};
    use std::path::PathBuf;

    #[test]
    fn finish_reports_failures() {
        let mut summary = BatchSummary::default();
        summary.processed.push(FontOutcome {
            source: PathBuf::from("sources/A.ufo"),
            report_path: PathBuf::from("sources/A.prod_names.txt"),
            renamed: 2,
            already_correct: 1,
            no_codepoint: 0,
            saved: true,
        });
        assert!(finish(&summary).is_ok());

        summary.failed.push(FontFailure {
            source: PathBuf::from("sources/B.ufo"),
            error: anyhow!("glyph 'f_l' has multiple codepoints"),
        });
        let err = finish(&summary).unwrap_err();
        assert!(err.to_string().contains("sources/B.ufo"), "{err}");
    }
}
