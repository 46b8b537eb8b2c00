use crate::error::LoonError;
use crate::model::Entry;
use log::debug;
use std::fs;
use std::path::Path;

/// Render entries as a 2-space indented JSON array with a trailing newline.
///
/// `serde_json` leaves non-ASCII characters unescaped, so names such as
/// `Café` are written verbatim.
pub fn render_entries(entries: &[Entry]) -> Result<String, LoonError> {
    let mut json = serde_json::to_string_pretty(entries)?;
    json.push('\n');
    Ok(json)
}

/// Create or truncate `path` and write the rendered entries to it.
///
/// The parent directory must already exist.
pub fn write_entries(path: &Path, entries: &[Entry]) -> Result<(), LoonError> {
    let json = render_entries(entries)?;
    fs::write(path, json.as_bytes()).map_err(|source| LoonError::WriteError {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Wrote {} bytes to {}", json.len(), path.display());
    Ok(())
}
