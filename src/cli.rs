//! Command line options shared by both converters.

use crate::{Result, SizeSet};
use clap::Args;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Args, Debug)]
pub struct ConversionArgs {
    /// The directory to search images in, including its subdirectories.
    #[arg(short, long, default_value = ".")]
    pub directory: PathBuf,

    /// The icon sizes as a comma separated list of widths, e.g. `16,32,256`.
    /// Icons are square, so the width is also used as the height.
    /// Defaults to 16,24,32,48,64,96,128,256.
    #[arg(short, long, default_value = "")]
    pub sizes: String,

    /// Convert images even if an ICO with the same name already exists.
    #[arg(short, long)]
    pub force_reconversion: bool,
}

impl ConversionArgs {
    pub fn size_set(&self) -> Result<SizeSet> {
        SizeSet::resolve(&self.sizes)
    }
}

/// Logs to stderr, filtered by `RUST_LOG` (warnings only if unset).
/// Stdout is reserved for the list of converted files.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
