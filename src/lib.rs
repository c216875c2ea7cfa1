#![warn(clippy::str_to_string)]
#![warn(clippy::unwrap_used)]

//! Converts PNG and SVG images into multi-resolution ICO files.
//!
//! PNGs are resampled to every size directly, SVGs are first rendered once per size
//! by an external [`Rasterizer`] (Inkscape by default).

pub mod cli;
mod error;
pub use self::error::*;
pub mod fs;
mod png;
pub use self::png::*;
mod rasterizer;
pub use self::rasterizer::*;
mod sizes;
pub use self::sizes::*;
mod svg;
pub use self::svg::*;
