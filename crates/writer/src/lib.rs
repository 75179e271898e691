//! Report output
//!
//! The report is written to a temporary file next to the destination and
//! renamed over it only once everything has been written, so a failed run
//! never leaves a truncated report behind. The finished file gets the mode
//! of the report it replaces, or the usual umask-filtered mode when it is
//! new.

use playlist_report_core::{Error, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::Builder;
use tracing::debug;

/// Atomically write `contents` to `path`, replacing any existing file
pub fn write_report<P: AsRef<Path>>(path: P, contents: &str) -> Result<()> {
    let path = path.as_ref();
    let sink_error = |source: std::io::Error| Error::SinkUnavailable {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let existing = fs::metadata(path)
        .ok()
        .filter(|meta| meta.is_file())
        .map(|meta| meta.permissions());

    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // The kernel applies the umask to this at creation
        builder.permissions(fs::Permissions::from_mode(0o666));
    }

    let mut file = builder.tempfile_in(dir).map_err(sink_error)?;
    if let Some(permissions) = existing {
        file.as_file().set_permissions(permissions).map_err(sink_error)?;
    }
    file.write_all(contents.as_bytes()).map_err(sink_error)?;
    file.as_file().sync_all().map_err(sink_error)?;
    file.persist(path).map_err(|e| sink_error(e.error))?;

    debug!(path = %path.display(), bytes = contents.len(), "report written");
    Ok(())
}
