pub mod builder;
pub mod category;
pub mod config;
pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod model;
pub mod writer;

use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub use builder::{LoonExporter, LoonExporterBuilder, Source};
pub use category::Category;
pub use config::Settings;
pub use error::LoonError;
pub use extractor::extract_entries;
pub use fetcher::Fetcher;
pub use model::Entry;
pub use writer::{render_entries, write_entries};

/// Outcome of a successful export
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// Number of entries written
    pub count: usize,
    pub output_path: PathBuf,
    /// Non-empty categories with their entry counts
    pub categories: Vec<(Category, usize)>,
}

impl ExportSummary {
    pub fn file_name(&self) -> String {
        self.output_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.output_path.display().to_string())
    }
}

/// Fetch a README over HTTP with no timeout
pub fn fetch_readme(url: &str) -> Result<String, LoonError> {
    Fetcher::new(None)?.fetch(url)
}

/// Read a README from disk
pub fn read_readme(path: &Path) -> Result<String, LoonError> {
    fs::read_to_string(path).map_err(|source| LoonError::ReadError {
        path: path.to_path_buf(),
        source,
    })
}

/// Run an export using loaded [`Settings`]
pub fn export_rules(settings: &Settings) -> Result<ExportSummary, LoonError> {
    let source = match &settings.source_file {
        Some(path) => Source::File(path.clone()),
        None => Source::Url(settings.source_url.clone()),
    };
    run_export(&source, &settings.resolved_output_path(), settings.timeout())
}

pub(crate) fn run_export(
    source: &Source,
    output: &Path,
    timeout: Option<Duration>,
) -> Result<ExportSummary, LoonError> {
    let readme = match source {
        Source::Url(url) => Fetcher::new(timeout)?.fetch(url)?,
        Source::File(path) => read_readme(path)?,
    };

    let entries = extract_entries(&readme);
    if entries.is_empty() {
        info!("No Loon rows found in README; writing an empty list");
    }

    write_entries(output, &entries)?;

    let categories = category::tally(&entries);
    for (category, count) in &categories {
        debug!("{}: {}", category.label(), count);
    }

    Ok(ExportSummary {
        count: entries.len(),
        output_path: output.to_path_buf(),
        categories,
    })
}
