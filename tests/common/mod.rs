#![allow(dead_code)]

use icomaker::fs::intermediate_png_path;
use icomaker::{IcoMakerError, IconSize, Rasterizer};
use image::{Rgba, RgbaImage};
use std::cell::RefCell;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn write_png(dir: &TempDir, relative_path: &str, size: u32) -> PathBuf {
    let path = dir.path().join(relative_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    RgbaImage::from_pixel(size, size, Rgba([0, 120, 215, 255]))
        .save(&path)
        .unwrap();
    path
}

pub fn write_file(dir: &TempDir, relative_path: &str, contents: &[u8]) -> PathBuf {
    let path = dir.path().join(relative_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, contents).unwrap();
    path
}

pub fn frame_sizes(path: &Path) -> Vec<(u32, u32)> {
    let icon_dir = ico::IconDir::read(File::open(path).unwrap()).unwrap();
    icon_dir
        .entries()
        .iter()
        .map(|entry| (entry.width(), entry.height()))
        .collect()
}

/// Writes a solid PNG of the requested size instead of running Inkscape.
#[derive(Default)]
pub struct FakeRasterizer {
    calls: RefCell<Vec<(PathBuf, String)>>,
    fail_at: Option<&'static str>,
}

impl FakeRasterizer {
    pub fn failing_at(label: &'static str) -> Self {
        FakeRasterizer {
            fail_at: Some(label),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<(PathBuf, String)> {
        self.calls.borrow().clone()
    }
}

impl Rasterizer for FakeRasterizer {
    fn rasterize(&self, svg: &Path, size: &IconSize) -> icomaker::Result<PathBuf> {
        self.calls
            .borrow_mut()
            .push((svg.to_owned(), size.label().to_owned()));
        let output = intermediate_png_path(svg, size);
        if self.fail_at == Some(size.label()) {
            return Err(IcoMakerError::MissingRasterizerOutput(output));
        }
        RgbaImage::from_pixel(size.pixels(), size.pixels(), Rgba([255, 255, 255, 255]))
            .save(&output)
            .unwrap();
        Ok(output)
    }
}
