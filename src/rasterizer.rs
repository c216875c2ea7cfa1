use crate::fs::intermediate_png_path;
use crate::{IcoMakerError, IconSize, Result};
use log::debug;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Renders an SVG into a square PNG.
pub trait Rasterizer {
    /// Exports `svg` at `size` and returns the path of the written PNG.
    fn rasterize(&self, svg: &Path, size: &IconSize) -> Result<PathBuf>;
}

pub const DEFAULT_RASTERIZER_PROGRAM: &str = "inkscape";

/// Rasterizes by running Inkscape's command line interface.
///
/// The executable is looked up on `PATH` unless `program` is a path.
/// Every export blocks until the process exits and the process inherits stdout and stderr.
#[derive(Debug, Clone)]
pub struct Inkscape {
    program: OsString,
}

impl Inkscape {
    pub fn new(program: impl Into<OsString>) -> Self {
        Inkscape {
            program: program.into(),
        }
    }

    fn program_name(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }

    fn export_command(&self, svg: &Path, size: &IconSize, output: &Path) -> Command {
        let mut export_filename = OsString::from("--export-filename=");
        export_filename.push(output);

        let mut command = Command::new(&self.program);
        command
            .arg("--export-area-page")
            .arg(export_filename)
            .arg("--export-type=png")
            .args(["-w", size.label()])
            .args(["-h", size.label()])
            .arg(svg);
        command
    }
}

impl Default for Inkscape {
    fn default() -> Self {
        Inkscape::new(DEFAULT_RASTERIZER_PROGRAM)
    }
}

impl Rasterizer for Inkscape {
    fn rasterize(&self, svg: &Path, size: &IconSize) -> Result<PathBuf> {
        let output = intermediate_png_path(svg, size);
        let mut command = self.export_command(svg, size, &output);
        debug!("Running {command:?}");

        let status = command
            .status()
            .map_err(|source| IcoMakerError::RasterizerSpawn {
                program: self.program_name(),
                source,
            })?;

        if !status.success() {
            return Err(IcoMakerError::RasterizerFailed {
                program: self.program_name(),
                status,
                output,
            });
        }
        if !output.is_file() {
            return Err(IcoMakerError::MissingRasterizerOutput(output));
        }
        Ok(output)
    }
}
