// src/file.rs

use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
};

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}

/// Resolve an output hint to a concrete file path: a directory (or
/// trailing-slash hint) gets the default filename joined on; parents
/// are created either way.
pub fn resolve_out_path(
    hint: Option<&Path>,
    default_path: &Path,
    default_filename: &str,
) -> Result<PathBuf, Box<dyn Error>> {
    let hint = hint.unwrap_or(default_path);
    let resolved = if hint.is_dir() || looks_like_dir_hint(hint) {
        ensure_directory(hint)?;
        hint.join(default_filename)
    } else {
        if let Some(parent) = hint.parent() {
            if !parent.as_os_str().is_empty() {
                ensure_directory(parent)?;
            }
        }
        hint.to_path_buf()
    };
    Ok(resolved)
}

pub fn write_text(path: &Path, contents: &str) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, contents)?;
    Ok(())
}

pub fn write_binary(path: &Path, contents: &[u8]) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, contents)?;
    Ok(())
}
