use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IcoMakerError {
    #[error("Invalid icon size '{token}'")]
    InvalidSize {
        token: String,
        #[source]
        source: ParseIntError,
    },
    #[error(transparent)]
    Walk(#[from] walkdir::Error),
    #[error(transparent)]
    Ico(#[from] ico_frames::Error),
    #[error("Failed to run the rasterizer '{program}'")]
    RasterizerSpawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("Rasterizer '{program}' failed with {status} while exporting {}", .output.display())]
    RasterizerFailed {
        program: String,
        status: ExitStatus,
        output: PathBuf,
    },
    #[error("Rasterizer exited successfully but did not write {}", .0.display())]
    MissingRasterizerOutput(PathBuf),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T, E = IcoMakerError> = std::result::Result<T, E>;
