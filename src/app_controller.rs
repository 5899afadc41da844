use anyhow::{anyhow, Result};
use log::{debug, error, info, warn};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::app_config::Config;
use crate::catalog::Catalog;
use crate::errors::CatalogError;
use crate::file_utils::FileManager;
use crate::language_utils;
use crate::po_entry::TranslationEntry;

// @module: Application controller for catalog generation

/// Extension of entry files picked up by `run_folder`
pub const ENTRY_FILE_EXTENSION: &str = "json";

/// Object form of an entry file: `{ "entries": [...] }`
#[derive(Deserialize)]
struct WrappedEntries {
    entries: Vec<TranslationEntry>,
}

/// Outcome counts of a folder run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FolderSummary {
    pub written: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Main application controller: entry files in, catalog files out
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Files `run_folder` never treats as entry files
    skipped_files: Vec<PathBuf>,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            skipped_files: Vec::new(),
        })
    }

    /// Exclude a file from folder runs, e.g. the config file sitting in the
    /// walked tree
    pub fn with_skipped_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.skipped_files.push(Self::comparable_path(path.as_ref()));
        self
    }

    fn comparable_path(path: &Path) -> PathBuf {
        std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
    }

    fn is_skipped(&self, path: &Path) -> bool {
        !self.skipped_files.is_empty() && self.skipped_files.contains(&Self::comparable_path(path))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parse entry JSON: either an array of entries or `{ "entries": [...] }`
    pub fn parse_entries(content: &str, source: &Path) -> Result<Vec<TranslationEntry>, CatalogError> {
        // Pick the shape up front so serde reports line and column
        let parsed = if content.trim_start().starts_with('[') {
            serde_json::from_str::<Vec<TranslationEntry>>(content)
        } else {
            serde_json::from_str::<WrappedEntries>(content).map(|wrapped| wrapped.entries)
        };

        parsed.map_err(|e| CatalogError::invalid_input(source, e.to_string()))
    }

    /// Read and parse an entry file
    pub fn load_entries<P: AsRef<Path>>(&self, path: P) -> Result<Vec<TranslationEntry>> {
        let path = path.as_ref();
        let content = FileManager::read_to_string(path)?;
        let entries = Self::parse_entries(&content, path)?;

        debug!("Loaded {} entries from {:?}", entries.len(), path);
        Ok(entries)
    }

    /// Build a catalog with the configured header
    pub fn build_catalog(&self, entries: Vec<TranslationEntry>) -> Catalog {
        let catalog = Catalog::from_entries(entries);

        if !self.config.header.enabled || catalog.header().is_some() {
            return catalog;
        }

        if let Some(language) = &self.config.header.language {
            match language_utils::get_language_name(language) {
                Ok(name) => debug!("Catalog language: {} ({})", language, name),
                Err(e) => warn!("Language code issue: {}", e),
            }
        }

        catalog.with_header(&self.config.header.to_header(), self.config.catalog_kind)
    }

    /// Output path for an entry file
    pub fn output_path(&self, input_file: &Path, output_dir: &Path) -> PathBuf {
        FileManager::generate_output_path(input_file, output_dir, self.config.catalog_kind.extension())
    }

    /// Convert one entry file into a catalog file.
    ///
    /// Returns the written path, or `None` when the output already exists and
    /// `force_overwrite` is off.
    pub fn run(&self, input_file: PathBuf, output_dir: PathBuf, force_overwrite: bool) -> Result<Option<PathBuf>> {
        let start_time = Instant::now();

        if !FileManager::file_exists(&input_file) {
            return Err(anyhow!("Input file does not exist: {:?}", input_file));
        }

        let output_path = self.output_path(&input_file, &output_dir);
        if output_path.exists() && !force_overwrite {
            warn!("Skipping {:?}, output already exists (use -f to force overwrite)", output_path);
            return Ok(None);
        }

        let entries = self.load_entries(&input_file)?;
        let catalog = self.build_catalog(entries);

        FileManager::ensure_dir(&output_dir)?;
        catalog.write_to_file(&output_path, self.config.catalog_kind, self.config.line_ending)?;

        info!(
            "Wrote {} entries to {:?} in {:.2?}",
            catalog.len(),
            output_path,
            start_time.elapsed()
        );

        Ok(Some(output_path))
    }

    /// Convert every entry file below a directory, writing next to each input.
    ///
    /// Failures are logged and counted; the run continues with the next file.
    pub fn run_folder(&self, input_dir: PathBuf, force_overwrite: bool) -> Result<FolderSummary> {
        if !FileManager::dir_exists(&input_dir) {
            return Err(anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        info!("Processing entry files in {:?}", input_dir);

        let mut summary = FolderSummary::default();
        for input_file in FileManager::find_files(&input_dir, ENTRY_FILE_EXTENSION)? {
            if self.is_skipped(&input_file) {
                debug!("Skipping {:?}, not an entry file", input_file);
                continue;
            }

            let output_dir = input_file.parent().unwrap_or(Path::new(".")).to_path_buf();

            match self.run(input_file.clone(), output_dir, force_overwrite) {
                Ok(Some(_)) => summary.written += 1,
                Ok(None) => summary.skipped += 1,
                Err(e) => {
                    error!("Failed to process {:?}: {:#}", input_file, e);
                    summary.failed += 1;
                }
            }
        }

        info!(
            "Finished: {} written, {} skipped, {} failed",
            summary.written, summary.skipped, summary.failed
        );

        Ok(summary)
    }
}
