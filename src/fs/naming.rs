use crate::IconSize;
use std::path::{Path, PathBuf};

pub const ICO_EXTENSION: &str = "ico";

/// The ICO written for `source`: the same path with its extension replaced by `ico`.
pub fn ico_path(source: &Path) -> PathBuf {
    replace_extension(source, ICO_EXTENSION)
}

/// The source an existing ICO would have been made from.
pub fn source_path(ico: &Path, source_extension: &str) -> PathBuf {
    replace_extension(ico, source_extension)
}

/// The PNG the rasterizer exports for `svg` at `size`, e.g. `shape.svg` becomes `shape.16.png`.
pub fn intermediate_png_path(svg: &Path, size: &IconSize) -> PathBuf {
    replace_extension(svg, &format!("{}.png", size.label()))
}

/// Like [`Path::with_extension`], except that a file named only by its extension
/// (such as `.png`) has that extension replaced too.
fn replace_extension(path: &Path, extension: &str) -> PathBuf {
    let is_bare_extension = path.extension().is_none()
        && path
            .file_name()
            .is_some_and(|name| name.to_string_lossy().starts_with('.'));
    if is_bare_extension {
        path.with_file_name(format!(".{extension}"))
    } else {
        path.with_extension(extension)
    }
}

/// Whether the file name contains a `.` anywhere but in its last four characters.
///
/// Rasterized intermediates such as `icon.256.png` match this,
/// so do PNGs that simply have a dot in their name.
pub fn has_dot_before_extension(path: &Path) -> bool {
    let Some(file_name) = path.file_name() else {
        return false;
    };
    let file_name = file_name.to_string_lossy();
    let end = file_name
        .char_indices()
        .rev()
        .nth(3)
        .map_or(0, |(index, _)| index);
    file_name[..end].contains('.')
}
