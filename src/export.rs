use crate::error::ScrapeError;
use crate::venues::model::Event;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

const JSON_SUFFIX: &str = ".json";

/// Writes `events` as a JSON array, appending `.json` to `path` when missing.
///
/// An existing file is overwritten in place, so a failure halfway leaves a truncated file behind.
#[instrument(skip(events), fields(path = %path.display()))]
pub fn export_events(events: &[Event], path: &Path) -> Result<PathBuf, ScrapeError> {
    let path = with_json_suffix(path);
    let export_failure = |source| ScrapeError::Export {
        path: path.clone(),
        source,
    };

    let json = serde_json::to_vec(events)?;

    fs::write(&path, json).map_err(export_failure)?;

    info!("Exported {} events to {}", events.len(), path.display());

    Ok(path)
}

fn with_json_suffix(path: &Path) -> PathBuf {
    if path.to_string_lossy().ends_with(JSON_SUFFIX) {
        return path.to_path_buf();
    }

    let mut path = path.as_os_str().to_os_string();
    path.push(JSON_SUFFIX);

    PathBuf::from(path)
}
