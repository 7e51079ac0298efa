//! Command line interface for prodnames
//!
//! Handles parsing command line arguments and provides
//! validation for user inputs.

use crate::core::batch::{BatchOptions, BatchPolicy};
use crate::core::config_file::ConfigFile;
use crate::naming::DEFAULT_REPORT_SUFFIX;
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

/// Directory searched for UFO sources when nothing else is configured.
pub const DEFAULT_SOURCES_DIR: &str = "sources";

/// prodnames CLI arguments
///
/// Examples:
///   prodnames                        # Process every UFO in ./sources
///   prodnames --dir masters          # Process every UFO in ./masters
///   prodnames --dry-run --print      # Show what would change, touch nothing
///   prodnames --keep-going           # Don't stop at the first failing font
#[derive(Parser, Debug, Clone, Default)]
#[clap(
    name = "prodnames",
    version,
    about = "Set AGL production glyph names in UFO sources",
    long_about = "Assigns Adobe Glyph List production names to every glyph with a Unicode value, records them in each UFO's public.postscriptNames lib key, and writes a report next to each source."
)]
pub struct CliArgs {
    /// Directory containing the UFO sources to process
    ///
    /// Only UFOs directly inside this directory are processed.
    #[clap(
        long = "dir",
        short = 'd',
        help = "Directory of UFO sources (default: sources)",
        long_help = "Directory containing the UFO sources to process. Only packages directly inside it are considered. Falls back to sources_dir in settings.json, then to ./sources."
    )]
    pub dir: Option<PathBuf>,

    /// Keep going when a font fails
    ///
    /// By default the run stops at the first font that cannot be processed,
    /// for example one with a multi-codepoint glyph.
    #[clap(
        long = "keep-going",
        help = "Continue with the next font when one fails",
        long_help = "Continue with the next font when one fails. The run still exits with an error status if any font failed."
    )]
    pub keep_going: bool,

    /// Write reports without modifying any font
    #[clap(long = "dry-run", help = "Write reports but do not modify fonts")]
    pub dry_run: bool,

    /// Print each report to stdout as well
    #[clap(long = "print", help = "Also print each report to stdout")]
    pub print: bool,

    /// Report file suffix
    #[clap(
        long = "suffix",
        value_name = "SUFFIX",
        help = "Report file suffix (default: prod_names.txt)",
        long_help = "Suffix that replaces the .ufo extension to form the report file name, so MyFont.ufo gets MyFont.prod_names.txt by default."
    )]
    pub suffix: Option<String>,

    /// Show debug output
    #[clap(long = "verbose", short = 'v', help = "Show debug output")]
    pub verbose: bool,

    /// Also write logs to ~/.config/prodnames/logs/
    #[clap(long = "log-file", help = "Also write logs to the user log directory")]
    pub log_file: bool,

    /// Initialize user configuration directory with default settings
    #[clap(
        long = "new-config",
        help = "Initialize user config directory with default settings",
        long_help = "Initialize the ~/.config/prodnames directory with a settings.json file holding the default settings, then exit."
    )]
    pub new_config: bool,
}

impl CliArgs {
    /// Validate the CLI arguments after parsing
    ///
    /// This ensures that the sources directory exists before any font is
    /// touched, providing clear error messages for common mistakes.
    pub fn validate(&self, config: Option<&ConfigFile>) -> Result<(), String> {
        let dir = self.sources_dir(config);
        if !dir.exists() {
            return Err(format!(
                "Sources directory does not exist: {}\nUse --dir to point at the directory holding your UFOs.",
                dir.display()
            ));
        }
        if !dir.is_dir() {
            return Err(format!(
                "Not a directory: {}\nUse --dir to point at the directory holding your UFOs.",
                dir.display()
            ));
        }

        if let Some(suffix) = &self.suffix {
            if suffix.is_empty() || suffix.contains(std::path::MAIN_SEPARATOR) {
                return Err(format!("Invalid report suffix: '{suffix}'"));
            }
        }

        Ok(())
    }

    /// Get the sources directory from CLI args, config file, or default
    ///
    /// Priority order:
    /// 1. CLI argument (--dir)
    /// 2. Config file setting (~/.config/prodnames/settings.json)
    /// 3. Built-in default (./sources)
    pub fn sources_dir(&self, config: Option<&ConfigFile>) -> PathBuf {
        if let Some(dir) = &self.dir {
            debug!("Using sources directory from CLI: {:?}", dir);
            return dir.clone();
        }

        if let Some(dir) = config.and_then(|c| c.sources_dir.as_ref()) {
            debug!("Using sources directory from config file: {:?}", dir);
            return dir.clone();
        }

        PathBuf::from(DEFAULT_SOURCES_DIR)
    }

    /// Build the batch options, with the same priority as [`Self::sources_dir`].
    pub fn batch_options(&self, config: Option<&ConfigFile>) -> BatchOptions {
        let keep_going = self.keep_going || config.and_then(|c| c.keep_going).unwrap_or(false);
        let report_suffix = self
            .suffix
            .clone()
            .or_else(|| config.and_then(|c| c.report_suffix.clone()))
            .unwrap_or_else(|| DEFAULT_REPORT_SUFFIX.to_string());

        BatchOptions {
            policy: if keep_going {
                BatchPolicy::Continue
            } else {
                BatchPolicy::Abort
            },
            dry_run: self.dry_run,
            print_reports: self.print,
            report_suffix,
        }
    }

    /// Whether logs should also go to the log file.
    pub fn log_to_file(&self, config: Option<&ConfigFile>) -> bool {
        self.log_file || config.and_then(|c| c.log_to_file).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags() {
        let args = CliArgs::try_parse_from([
            "prodnames",
            "-d",
            "masters",
            "--keep-going",
            "--dry-run",
            "--suffix",
            "names.txt",
        ])
        .unwrap();
        assert_eq!(args.dir, Some(PathBuf::from("masters")));
        assert!(args.keep_going);
        assert!(args.dry_run);
        assert!(!args.print);
        assert_eq!(args.suffix.as_deref(), Some("names.txt"));
    }

    #[test]
    fn defaults_without_config() {
        let args = CliArgs::try_parse_from(["prodnames"]).unwrap();
        assert_eq!(args.sources_dir(None), PathBuf::from("sources"));
        let options = args.batch_options(None);
        assert_eq!(options, BatchOptions::default());
        assert_eq!(options.policy, BatchPolicy::Abort);
        assert!(!args.log_to_file(None));
    }

    #[test]
    fn config_fills_in_missing_flags() {
        let config = ConfigFile {
            sources_dir: Some(PathBuf::from("ufo")),
            keep_going: Some(true),
            report_suffix: Some("names.txt".into()),
            log_to_file: Some(true),
        };
        let args = CliArgs::default();
        assert_eq!(args.sources_dir(Some(&config)), PathBuf::from("ufo"));
        let options = args.batch_options(Some(&config));
        assert_eq!(options.policy, BatchPolicy::Continue);
        assert_eq!(options.report_suffix, "names.txt");
        assert!(args.log_to_file(Some(&config)));
    }

    #[test]
    fn cli_wins_over_config() {
        let config = ConfigFile {
            sources_dir: Some(PathBuf::from("ufo")),
            report_suffix: Some("names.txt".into()),
            ..ConfigFile::default()
        };
        let args = CliArgs {
            dir: Some(PathBuf::from("masters")),
            suffix: Some("prod.txt".into()),
            ..CliArgs::default()
        };
        assert_eq!(args.sources_dir(Some(&config)), PathBuf::from("masters"));
        assert_eq!(args.batch_options(Some(&config)).report_suffix, "prod.txt");
    }

    #[test]
    fn validate_checks_directory() {
        let dir = tempfile::tempdir().unwrap();
        let ok = CliArgs {
            dir: Some(dir.path().to_path_buf()),
            ..CliArgs::default()
        };
        assert!(ok.validate(None).is_ok());

        let missing = CliArgs {
            dir: Some(dir.path().join("missing")),
            ..CliArgs::default()
        };
        assert!(missing.validate(None).unwrap_err().contains("does not exist"));

        let file = dir.path().join("file.txt");
        std::fs::write(&file, "").unwrap();
        let not_dir = CliArgs {
            dir: Some(file),
            ..CliArgs::default()
        };
        assert!(not_dir.validate(None).unwrap_err().contains("Not a directory"));

        let bad_suffix = CliArgs {
            dir: Some(dir.path().to_path_buf()),
            suffix: Some(String::new()),
            ..CliArgs::default()
        };
        assert!(bad_suffix.validate(None).is_err());
    }
}
