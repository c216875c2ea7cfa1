use log::{debug, warn};
use std::fs;
use std::path::PathBuf;

/// Tracks the intermediate PNGs produced while converting one SVG.
///
/// Dropping the tracker without calling [`IntermediateFiles::commit`] means the conversion failed.
/// In that case the files are removed if `remove_on_failure` is set and left on disk otherwise.
/// Committed files are always left on disk.
#[derive(Debug)]
pub(crate) struct IntermediateFiles {
    paths: Vec<PathBuf>,
    remove_on_failure: bool,
    committed: bool,
}

impl IntermediateFiles {
    pub(crate) fn new(remove_on_failure: bool) -> Self {
        IntermediateFiles {
            paths: Vec::new(),
            remove_on_failure,
            committed: false,
        }
    }

    pub(crate) fn push(&mut self, path: PathBuf) {
        self.paths.push(path);
    }

    pub(crate) fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub(crate) fn commit(mut self) {
        self.committed = true;
    }
}

impl Drop for IntermediateFiles {
    fn drop(&mut self) {
        if self.committed || !self.remove_on_failure {
            return;
        }
        for path in &self.paths {
            match fs::remove_file(path) {
                Ok(()) => debug!("Removed intermediate file {}", path.display()),
                Err(error) => warn!(
                    "Failed to remove intermediate file {}: {error}",
                    path.display()
                ),
            }
        }
    }
}
