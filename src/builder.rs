use std::path::PathBuf;
use std::time::Duration;

use crate::config::{default_output_path, DEFAULT_SOURCE_URL};
use crate::{run_export, ExportSummary, LoonError};

/// Where the README comes from
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    /// Fetch the README over HTTP
    Url(String),
    /// Read a README from the local filesystem
    File(PathBuf),
}

impl Default for Source {
    fn default() -> Self {
        Source::Url(DEFAULT_SOURCE_URL.to_string())
    }
}

/// Entry point for configuring an export
pub struct LoonExporter;

impl LoonExporter {
    pub fn builder() -> LoonExporterBuilder {
        LoonExporterBuilder::default()
    }
}

/// Builder for configuring and running an export
#[derive(Debug, Default)]
pub struct LoonExporterBuilder {
    source: Source,
    output: Option<PathBuf>,
    timeout: Option<Duration>,
}

impl LoonExporterBuilder {
    /// Fetch the README from `url`
    ///
    /// # Example
    /// ```
    /// use loon_rules::LoonExporter;
    ///
    /// let builder = LoonExporter::builder()
    ///     .url("https://example.com/README.md");
    /// ```
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.source = Source::Url(url.into());
        self
    }

    /// Read the README from a local checkout instead of fetching it
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Source::File(path.into());
        self
    }

    /// Set the destination file
    ///
    /// Defaults to `public/loon-rules.json` next to the executable.
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    /// Set a timeout for the HTTP request. Without one the request may
    /// block indefinitely.
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Fetch, extract and write, in that order
    ///
    /// # Errors
    /// - `LoonError::FetchError` if the README cannot be retrieved; the output
    ///   file is left untouched
    /// - `LoonError::DecodeError` if the fetched README is not valid UTF-8;
    ///   the output file is left untouched
    /// - `LoonError::ReadError` if a local README cannot be read
    /// - `LoonError::WriteError` if the output file cannot be written
    ///
    /// # Example
    /// ```no_run
    /// # use loon_rules::LoonExporter;
    /// # fn main() -> Result<(), loon_rules::LoonError> {
    /// let summary = LoonExporter::builder()
    ///     .output("public/loon-rules.json")
    ///     .run()?;
    /// println!("{} entries", summary.count);
    /// # Ok(())
    /// # }
    /// ```
    pub fn run(self) -> Result<ExportSummary, LoonError> {
        let output = self.output.unwrap_or_else(default_output_path);
        run_export(&self.source, &output, self.timeout)
    }
}
