//! Input source collection.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Collect the contents of every `.rs` file under `input` (recursively for
/// a directory), skipping `target/` and hidden directories. Paths are read
/// in sorted order so the universe is indexed the same way on every run.
pub fn collect(input: &Path) -> Result<Vec<String>> {
    let mut paths = Vec::new();
    if input.is_dir() {
        collect_paths(input, &mut paths)?;
    } else {
        paths.push(input.to_path_buf());
    }
    paths.sort();

    paths
        .iter()
        .map(|path| {
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
        })
        .collect()
}

fn collect_paths(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("failed to read directory {}", dir.display()))?;
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if path.is_dir() {
            if name == "target" || name.starts_with('.') {
                continue;
            }
            collect_paths(&path, files)?;
        } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
            files.push(path);
        }
    }
    Ok(())
}
