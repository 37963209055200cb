// src/file.rs

use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
};

use crate::config::consts::HTML_EXT;

fn is_html(p: &Path) -> bool {
    p.extension()
        .is_some_and(|e| e.to_string_lossy().eq_ignore_ascii_case(HTML_EXT))
}

/// `*.html` directly under `root` (or the whole tree when `recursive`), sorted.
pub fn html_files(root: &Path, recursive: bool) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    if !root.is_dir() {
        return Err(format!("Not a directory: {}", root.display()).into());
    }
    let mut out = Vec::new();
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.is_dir() {
                if recursive { pending.push(path); }
            } else if is_html(&path) {
                out.push(path);
            }
        }
    }
    out.sort();
    Ok(out)
}

/// Explicit paths win; otherwise scan `root`.
pub fn resolve_inputs(root: &Path, explicit: &[PathBuf], recursive: bool) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    if explicit.is_empty() {
        html_files(root, recursive)
    } else {
        Ok(explicit.to_vec())
    }
}

pub fn read_document(path: &Path) -> Result<String, Box<dyn Error>> {
    fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e).into())
}
