use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::codecs::png::PngEncoder;
use image::imageops::{resize, FilterType};
use image::{DynamicImage, ExtendedColorType, ImageEncoder, ImageReader};
use log::debug;
use std::borrow::Cow;
use std::fs::OpenOptions;
use std::io::{self, BufWriter, Cursor, Write};
use std::path::Path;
use thiserror::Error;

/// The largest width and height an ICO directory entry can describe.
pub const MAX_ICO_SIZE: u32 = 256;

/// Builds an ICO file from individual source images.
/// For each size, the closest source image that is at least as big is scaled to the
/// appropriate size. If no source is big enough, the biggest one is scaled up.
/// The source images are assumed to be squares.
///
/// The target file is only created once every frame has been encoded,
/// an existing file at `file_path` is overwritten.
///
/// ## Example
/// In this example, the 16px, 24px, and 32px versions of this icon will
/// be resized versions of `icon-32x32.png` while the 48px and 256px
/// versions will be resized from `icon.png`.
///
/// ```no_run
/// use ico_frames::build_ico_file;
///
/// build_ico_file(
///     "icon.ico",
///     ["icon-32x32.png", "icon.png"],
///     &[16u32, 24, 32, 48, 256],
/// )?;
/// # Ok::<(), ico_frames::Error>(())
/// ```
pub fn build_ico_file<'a>(
    file_path: impl AsRef<Path>,
    icon_sources: impl IntoIterator<Item = impl AsRef<Path>>,
    sizes: impl Into<IconSizes<'a>>,
) -> Result<()> {
    let sizes = sizes.into();
    sizes.validate()?;

    let icons = decode_icons(icon_sources)?;
    let frames: Vec<_> = sizes
        .0
        .iter()
        .map(|&size| create_ico_frame(&icons, size))
        .collect::<Result<_>>()?;

    write_ico_file(file_path.as_ref(), &frames)
}

/// Builds an ICO file with exactly one frame per `(source, size)` pair, in order.
///
/// Each source is expected to already be rendered at its size (e.g. by an external rasterizer).
/// Sources whose dimensions differ from the declared size are resampled to it.
pub fn build_ico_file_from_frames(
    file_path: impl AsRef<Path>,
    frames: impl IntoIterator<Item = (impl AsRef<Path>, u32)>,
) -> Result<()> {
    let frames: Vec<_> = frames
        .into_iter()
        .map(|(source, size)| {
            check_size(size)?;
            let icon = decode_icon(source.as_ref())?;
            create_ico_frame(std::slice::from_ref(&icon), size)
        })
        .collect::<Result<_>>()?;

    if frames.is_empty() {
        return Err(Error::EmptySources);
    }

    write_ico_file(file_path.as_ref(), &frames)
}

fn write_ico_file(file_path: &Path, frames: &[IcoFrame<'_>]) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(file_path)?;
    let mut writer = BufWriter::new(file);
    IcoEncoder::new(&mut writer).encode_images(frames)?;
    writer.flush()?;
    debug!("Wrote {} frame(s) to {}", frames.len(), file_path.display());
    Ok(())
}

fn decode_icons(
    icon_sources: impl IntoIterator<Item = impl AsRef<Path>>,
) -> Result<Vec<DynamicImage>> {
    let icons: Vec<_> = icon_sources
        .into_iter()
        .map(|path| decode_icon(path.as_ref()))
        .collect::<Result<_>>()?;
    if icons.is_empty() {
        Err(Error::EmptySources)
    } else {
        Ok(icons)
    }
}

fn decode_icon(path: &Path) -> Result<DynamicImage> {
    Ok(ImageReader::open(path)?.with_guessed_format()?.decode()?)
}

fn find_next_bigger_icon(icons: &[DynamicImage], size: u32) -> Result<&DynamicImage> {
    icons
        .iter()
        .filter(|icon| icon.width() >= size)
        .min_by_key(|icon| icon.width())
        .or_else(|| icons.iter().max_by_key(|icon| icon.width()))
        .ok_or(Error::EmptySources)
}

fn create_ico_frame(icons: &[DynamicImage], size: u32) -> Result<IcoFrame<'static>> {
    let next_bigger_icon = find_next_bigger_icon(icons, size)?;
    let resized = if next_bigger_icon.width() == size && next_bigger_icon.height() == size {
        next_bigger_icon.to_rgba8()
    } else {
        resize(next_bigger_icon, size, size, FilterType::Lanczos3)
    };
    encode_ico_frame(resized.as_raw(), size)
}

fn encode_ico_frame(buf: &[u8], size: u32) -> Result<IcoFrame<'static>> {
    let color_type = ExtendedColorType::Rgba8;
    let mut encoded = Vec::new();
    PngEncoder::new(Cursor::new(&mut encoded)).write_image(buf, size, size, color_type)?;
    Ok(IcoFrame::with_encoded(encoded, size, size, color_type)?)
}

fn check_size(size: u32) -> Result<()> {
    if (1..=MAX_ICO_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(Error::UnsupportedSize(size))
    }
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Image(#[from] image::ImageError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("ICO frames must be between 1 and {MAX_ICO_SIZE}px, got {0}px")]
    UnsupportedSize(u32),
    #[error("No source images to build the icon from")]
    EmptySources,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The square frame sizes of an icon, in the order they are written.
pub struct IconSizes<'a>(Cow<'a, [u32]>);

impl IconSizes<'_> {
    fn validate(&self) -> Result<()> {
        if self.0.is_empty() {
            return Err(Error::EmptySources);
        }
        self.0.iter().copied().try_for_each(check_size)
    }
}

impl<'a, I> From<I> for IconSizes<'a>
where
    I: IntoIterator<Item = &'a u32>,
{
    fn from(value: I) -> Self {
        IconSizes(value.into_iter().copied().collect::<Vec<_>>().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use std::fs::File;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn writes_one_frame_per_size() {
        let dir = TempDir::new().unwrap();
        let source = write_png(&dir, "icon.png", 64);
        let target = dir.path().join("icon.ico");

        build_ico_file(&target, [&source], &[16u32, 32, 48]).unwrap();

        assert_eq!(frame_sizes(&target), vec![(16, 16), (32, 32), (48, 48)]);
    }

    #[test]
    fn scales_up_when_no_source_is_big_enough() {
        let dir = TempDir::new().unwrap();
        let source = write_png(&dir, "small.png", 8);
        let target = dir.path().join("small.ico");

        build_ico_file(&target, [&source], &[256u32]).unwrap();

        assert_eq!(frame_sizes(&target), vec![(256, 256)]);
    }

    #[test]
    fn prefers_the_smallest_source_that_is_big_enough() {
        let icons = vec![
            DynamicImage::new_rgba8(32, 32),
            DynamicImage::new_rgba8(256, 256),
            DynamicImage::new_rgba8(48, 48),
        ];
        assert_eq!(find_next_bigger_icon(&icons, 24).unwrap().width(), 32);
        assert_eq!(find_next_bigger_icon(&icons, 40).unwrap().width(), 48);
        assert_eq!(find_next_bigger_icon(&icons, 512).unwrap().width(), 256);
    }

    #[test]
    fn frames_keep_the_given_order() {
        let dir = TempDir::new().unwrap();
        let small = write_png(&dir, "shape.16.png", 16);
        let big = write_png(&dir, "shape.32.png", 32);
        let target = dir.path().join("shape.ico");

        build_ico_file_from_frames(&target, [(&small, 16), (&big, 32)]).unwrap();

        assert_eq!(frame_sizes(&target), vec![(16, 16), (32, 32)]);
    }

    #[test]
    fn resamples_frames_that_do_not_match_their_declared_size() {
        let dir = TempDir::new().unwrap();
        let source = write_png(&dir, "shape.24.png", 30);
        let target = dir.path().join("shape.ico");

        build_ico_file_from_frames(&target, [(&source, 24)]).unwrap();

        assert_eq!(frame_sizes(&target), vec![(24, 24)]);
    }

    #[test]
    fn rejects_sizes_outside_of_the_ico_range() {
        let dir = TempDir::new().unwrap();
        let source = write_png(&dir, "icon.png", 16);
        let target = dir.path().join("icon.ico");

        for size in [0u32, 257] {
            let error = build_ico_file(&target, [&source], &[16, size]).unwrap_err();
            assert!(matches!(error, Error::UnsupportedSize(s) if s == size));
        }
        assert!(!target.exists());
    }

    #[test]
    fn corrupt_source_does_not_create_the_target() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("broken.png");
        std::fs::write(&source, b"definitely not a png").unwrap();
        let target = dir.path().join("broken.ico");

        let error = build_ico_file(&target, [&source], &[16u32]).unwrap_err();

        assert!(matches!(error, Error::Image(_)));
        assert!(!target.exists());
    }

    #[cfg(unix)]
    #[test]
    fn failed_write_is_reported() {
        let dir = TempDir::new().unwrap();
        let source = write_png(&dir, "icon.png", 16);

        let error = build_ico_file("/dev/full", [&source], &[16u32]).unwrap_err();

        assert!(matches!(error, Error::Io(_)));
    }

    fn write_png(dir: &TempDir, name: &str, size: u32) -> PathBuf {
        let path = dir.path().join(name);
        RgbaImage::from_pixel(size, size, Rgba([0, 120, 215, 255]))
            .save(&path)
            .unwrap();
        path
    }

    fn frame_sizes(path: &Path) -> Vec<(u32, u32)> {
        let icon_dir = ico::IconDir::read(File::open(path).unwrap()).unwrap();
        icon_dir
            .entries()
            .iter()
            .map(|entry| (entry.width(), entry.height()))
            .collect()
    }
}
