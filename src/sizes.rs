use crate::{IcoMakerError, Result};
use std::fmt;
use std::str::FromStr;

/// Frame sizes used when none are given on the command line.
pub const DEFAULT_SIZES: [u32; 8] = [16, 24, 32, 48, 64, 96, 128, 256];

/// One square icon dimension.
///
/// The label is kept exactly as it was given, since it ends up in the
/// rasterizer's arguments and in the names of intermediate files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSize {
    label: String,
    pixels: u32,
}

impl IconSize {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn pixels(&self) -> u32 {
        self.pixels
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.pixels, self.pixels)
    }
}

impl From<u32> for IconSize {
    fn from(pixels: u32) -> Self {
        IconSize {
            label: pixels.to_string(),
            pixels,
        }
    }
}

impl FromStr for IconSize {
    type Err = IcoMakerError;

    fn from_str(token: &str) -> Result<Self> {
        let pixels = token
            .parse()
            .map_err(|source| IcoMakerError::InvalidSize {
                token: token.to_owned(),
                source,
            })?;
        Ok(IconSize {
            label: token.to_owned(),
            pixels,
        })
    }
}

impl fmt::Display for IconSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// The ordered, non-empty list of sizes one icon is built from.
///
/// Both the textual and the numeric form are derived from the same list,
/// so they always describe the same sizes in the same order.
/// Duplicates are kept and no range is enforced here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeSet(Vec<IconSize>);

impl SizeSet {
    /// Resolves the value of `--sizes`: an empty string selects [`DEFAULT_SIZES`],
    /// anything else is split on commas and every token must be an unsigned integer.
    pub fn resolve(sizes: &str) -> Result<Self> {
        if sizes.is_empty() {
            Ok(SizeSet::default())
        } else {
            sizes
                .split(',')
                .map(IconSize::from_str)
                .collect::<Result<_>>()
                .map(SizeSet)
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &IconSize> {
        self.0.iter()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.iter().map(IconSize::label).collect()
    }

    pub fn pixels(&self) -> Vec<u32> {
        self.iter().map(IconSize::pixels).collect()
    }

    pub fn dimensions(&self) -> Vec<(u32, u32)> {
        self.iter().map(IconSize::dimensions).collect()
    }
}

impl Default for SizeSet {
    fn default() -> Self {
        SizeSet(DEFAULT_SIZES.into_iter().map(IconSize::from).collect())
    }
}

impl FromStr for SizeSet {
    type Err = IcoMakerError;

    fn from_str(sizes: &str) -> Result<Self> {
        SizeSet::resolve(sizes)
    }
}

impl<'a> IntoIterator for &'a SizeSet {
    type Item = &'a IconSize;
    type IntoIter = std::slice::Iter<'a, IconSize>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
