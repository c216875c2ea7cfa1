use super::{source_path, ICO_EXTENSION};
use crate::Result;
use log::debug;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Finds every file below `base_directory` whose name ends in `.<extension>`.
///
/// The match is case-sensitive and symbolic links to directories are not followed.
/// Entries are visited in file name order within each directory.
pub fn find_images(base_directory: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let suffix = format!(".{extension}");
    let mut images = Vec::new();

    for entry in WalkDir::new(base_directory).sort_by_file_name() {
        let entry = entry?;
        if entry.file_name().to_string_lossy().ends_with(&suffix) && entry.path().is_file() {
            images.push(entry.into_path());
        }
    }

    debug!(
        "Found {} *{suffix} file(s) below {}",
        images.len(),
        base_directory.display()
    );
    Ok(images)
}

/// Paths of the `source_extension` files that already have an ICO next to them,
/// based on the ICOs found below `base_directory`.
pub fn converted_sources(base_directory: &Path, source_extension: &str) -> Result<HashSet<PathBuf>> {
    Ok(find_images(base_directory, ICO_EXTENSION)?
        .iter()
        .map(|ico| source_path(ico, source_extension))
        .collect())
}
