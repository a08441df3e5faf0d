//! File walker: enumerate `.txt`/`.text` files under a root (C2).

use std::path::{Path, PathBuf};

/// If `root` is a file, return it (regardless of extension — a single
/// explicit file is always ingested). If `root` is a directory, recurse
/// into it and return every `.txt`/`.text` file found, in directory-order
/// (not sorted — the ingest driver's output does not depend on visit
/// order since results are keyed by location).
pub fn collect_text_files(root: &Path) -> Result<Vec<PathBuf>, String> {
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }
    if !root.is_dir() {
        return Err(format!("{} is neither a file nor a directory", root.display()));
    }

    let mut out = Vec::new();
    walk(root, &mut out)?;
    Ok(out)
}

fn walk(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), String> {
    let entries = std::fs::read_dir(dir)
        .map_err(|e| format!("failed to read directory {}: {}", dir.display(), e))?;

    for entry in entries {
        let entry = entry.map_err(|e| format!("failed to read entry in {}: {}", dir.display(), e))?;
        let path = entry.path();
        if path.is_dir() {
            walk(&path, out)?;
        } else if is_text_file(&path) {
            out.push(path);
        }
    }
    Ok(())
}

fn is_text_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("txt") | Some("text")
    )
}
