//! Converts PNGs into ICOs by resampling each PNG to every size.

use crate::fs::{converted_sources, find_images, has_dot_before_extension, ico_path};
use crate::{Result, SizeSet};
use log::{debug, info};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

pub const PNG_EXTENSION: &str = "png";

#[derive(Debug, Default, Clone, Copy)]
pub struct PngOptions {
    /// Convert PNGs even if an ICO with the same name exists.
    pub force_reconversion: bool,
    /// Treat PNGs with a `.` in their name like any other PNG.
    /// By default they are assumed to be intermediates of an SVG conversion and skipped.
    pub enable_name_with_dot_as_png: bool,
}

/// Without `force_reconversion`, a PNG is skipped when an ICO for it already exists,
/// or when its name has a dot before the extension and `enable_name_with_dot_as_png` is unset.
pub fn should_skip_png(path: &Path, converted: &HashSet<PathBuf>, options: PngOptions) -> bool {
    if options.force_reconversion {
        return false;
    }
    converted.contains(path)
        || (!options.enable_name_with_dot_as_png && has_dot_before_extension(path))
}

/// Writes an ICO next to `path` with one frame per size, resampled from the PNG.
/// An existing ICO is overwritten.
pub fn convert_png_to_ico(path: &Path, sizes: &SizeSet) -> Result<PathBuf> {
    let target = ico_path(path);
    ico_frames::build_ico_file(&target, [path], &sizes.pixels())?;
    Ok(target)
}

/// Converts every PNG below `directory`, one after the other.
///
/// Each converted PNG is reported on stdout as soon as its ICO is written.
/// The first error aborts the run.
pub fn run_png_to_ico(
    directory: &Path,
    sizes: &SizeSet,
    options: PngOptions,
) -> Result<Vec<PathBuf>> {
    let converted = if options.force_reconversion {
        HashSet::new()
    } else {
        converted_sources(directory, PNG_EXTENSION)?
    };

    let mut written = Vec::new();
    for path in find_images(directory, PNG_EXTENSION)? {
        if should_skip_png(&path, &converted, options) {
            debug!("Skipping {}", path.display());
            continue;
        }
        written.push(convert_png_to_ico(&path, sizes)?);
        println!("{} converted.", path.display());
    }

    info!("Converted {} PNG file(s)", written.len());
    Ok(written)
}
