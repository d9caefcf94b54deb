//! Writing rendered files to disk

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::error::{GenerationError, Result};

/// Write `content` to `root/relative`, creating missing parent directories
///
/// Existing files are truncated. Nothing is rolled back if a later write
/// fails.
///
/// # Errors
///
/// Returns [`GenerationError::Io`] if `relative` is absolute or climbs out of
/// `root`, or if a directory or the file cannot be written.
pub fn write(root: &Path, relative: impl AsRef<Path>, content: &str) -> Result<PathBuf> {
    let relative = relative.as_ref();
    let path = root.join(relative);

    if !is_contained(relative) {
        return Err(GenerationError::io(
            path,
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "output path must be relative and stay inside the project",
            ),
        ));
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| GenerationError::io(parent, e))?;
    }

    fs::write(&path, content).map_err(|e| GenerationError::io(&path, e))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");

    Ok(path)
}

fn is_contained(relative: &Path) -> bool {
    let mut components = relative.components().peekable();
    components.peek().is_some()
        && components.all(|component| matches!(component, Component::Normal(_) | Component::CurDir))
}
