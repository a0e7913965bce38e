//! `mdpost process` command implementation.

use std::path::PathBuf;

use clap::Args;
use mdpost_config::{CliSettings, Config};
use mdpost_pipeline::Processor;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the process command.
#[derive(Args)]
pub(crate) struct ProcessArgs {
    /// Path to configuration file (default: auto-discover mdpost.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory containing the generated SDK docs (overrides config).
    #[arg(short, long)]
    input_dir: Option<PathBuf>,

    /// Root of the site tree (overrides config).
    #[arg(short, long)]
    site_root: Option<PathBuf>,

    /// Enable verbose output (per-pass progress logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ProcessArgs {
    /// Execute the process command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or any pipeline pass fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        // Build CLI settings from args
        let cli_settings = CliSettings {
            input_dir: self.input_dir,
            site_root: self.site_root,
        };

        // Load config
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let paths = config.paths_resolved;
        output.info(&format!("Input directory: {}", paths.input_dir.display()));
        output.info(&format!("Site root: {}", paths.site_root.display()));

        let processor = Processor::new(paths.input_dir, paths.site_root);
        let summary = processor.run()?;

        output.success(&format!(
            "Processed {} reference pages ({} renamed)",
            summary.pages, summary.renamed
        ));
        Ok(())
    }
}
