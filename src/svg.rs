//! Converts SVGs into ICOs by rasterizing each size and composing the results.

use crate::fs::{converted_sources, find_images, ico_path};
use crate::{Rasterizer, Result, SizeSet};
use self::intermediate_files::IntermediateFiles;
use log::{debug, info};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

mod intermediate_files;

pub const SVG_EXTENSION: &str = "svg";

#[derive(Debug, Default, Clone, Copy)]
pub struct SvgOptions {
    /// Convert SVGs even if an ICO with the same name exists.
    pub force_reconversion: bool,
    /// Remove the intermediate PNGs of an SVG whose conversion failed.
    /// They are left on disk otherwise, as they are after a successful conversion.
    pub remove_intermediates_on_failure: bool,
}

pub fn should_skip_svg(path: &Path, converted: &HashSet<PathBuf>, options: SvgOptions) -> bool {
    !options.force_reconversion && converted.contains(path)
}

/// Rasterizes `path` once per size, in order, then writes all renders as the frames of one ICO.
///
/// Returns the path of the written ICO. The intermediate PNGs stay next to the SVG.
pub fn convert_svg_to_ico<R>(
    path: &Path,
    sizes: &SizeSet,
    rasterizer: &R,
    options: SvgOptions,
) -> Result<PathBuf>
where
    R: Rasterizer + ?Sized,
{
    let mut intermediates = IntermediateFiles::new(options.remove_intermediates_on_failure);
    for size in sizes {
        let png = rasterizer.rasterize(path, size)?;
        debug!("Rasterized {} at {size}px", path.display());
        intermediates.push(png);
    }

    let target = ico_path(path);
    ico_frames::build_ico_file_from_frames(
        &target,
        intermediates.paths().iter().zip(sizes.pixels()),
    )?;
    intermediates.commit();
    Ok(target)
}

/// Converts every SVG below `directory`, one after the other.
///
/// Each converted SVG is reported on stdout as soon as its ICO is written.
/// The first error aborts the run.
pub fn run_svg_to_ico<R>(
    directory: &Path,
    sizes: &SizeSet,
    rasterizer: &R,
    options: SvgOptions,
) -> Result<Vec<PathBuf>>
where
    R: Rasterizer + ?Sized,
{
    let converted = if options.force_reconversion {
        HashSet::new()
    } else {
        converted_sources(directory, SVG_EXTENSION)?
    };

    let mut written = Vec::new();
    for path in find_images(directory, SVG_EXTENSION)? {
        if should_skip_svg(&path, &converted, options) {
            debug!("Skipping {}, it has already been converted", path.display());
            continue;
        }
        written.push(convert_svg_to_ico(&path, sizes, rasterizer, options)?);
        println!("{} converted.", path.display());
    }

    info!("Converted {} SVG file(s)", written.len());
    Ok(written)
}
