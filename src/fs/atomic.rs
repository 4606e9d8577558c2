//! Atomic file writes.
//!
//! Generated artifacts are written to a temporary file in the target's
//! directory, synced, then renamed over the target. A run interrupted
//! mid-write leaves either the old file or the new one, never a truncated mix.
//!
//! On crash a stray `.{filename}.tmp` may remain next to the target.

use crate::error::{Result, SmithError};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write bytes to a file, replacing it if present.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            SmithError::WriteError(parent.display().to_string(), e.to_string())
        })?;
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, content).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        SmithError::WriteError(path.display().to_string(), e.to_string())
    })?;

    // rename() replaces an existing destination on every supported platform.
    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        SmithError::WriteError(path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

/// Atomically write a string to a file.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

/// `.{filename}.tmp` in the same directory as the target.
fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| SmithError::UserError(format!("invalid file path '{}'", target.display())))?;

    let temp_name = format!(".{}.tmp", filename);
    Ok(match target.parent() {
        Some(parent) => parent.join(temp_name),
        None => PathBuf::from(temp_name),
    })
}

fn write_and_sync(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content)?;
    file.sync_all()
}
