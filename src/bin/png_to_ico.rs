use clap::Parser;
use icomaker::cli::{init_logging, ConversionArgs};
use icomaker::{run_png_to_ico, PngOptions};
use std::error::Error;

/// Converts every PNG below a directory into an ICO next to it.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    conversion: ConversionArgs,

    /// Convert PNGs with a `.` in their name too. These are skipped by default
    /// because svg-to-ico leaves PNGs such as `icon.256.png` behind.
    /// Only use this in folders without such intermediates.
    #[arg(short = 'p', long)]
    enable_name_with_dot_as_png: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Cli::parse();
    init_logging();

    let sizes = args.conversion.size_set()?;
    let options = PngOptions {
        force_reconversion: args.conversion.force_reconversion,
        enable_name_with_dot_as_png: args.enable_name_with_dot_as_png,
    };
    run_png_to_ico(&args.conversion.directory, &sizes, options)?;
    Ok(())
}
