use clap::Parser;
use icomaker::cli::{init_logging, ConversionArgs};
use icomaker::{run_svg_to_ico, Inkscape, SvgOptions, DEFAULT_RASTERIZER_PROGRAM};
use std::error::Error;
use std::ffi::OsString;

/// Converts every SVG below a directory into an ICO next to it.
/// Each size is rendered with Inkscape first, the rendered PNGs are kept.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    conversion: ConversionArgs,

    /// The Inkscape executable, looked up on PATH unless it is a path.
    #[arg(long, default_value = DEFAULT_RASTERIZER_PROGRAM)]
    rasterizer: OsString,

    /// Remove the rendered PNGs of an SVG whose conversion failed.
    #[arg(long)]
    remove_intermediates_on_failure: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Cli::parse();
    init_logging();

    let sizes = args.conversion.size_set()?;
    let options = SvgOptions {
        force_reconversion: args.conversion.force_reconversion,
        remove_intermediates_on_failure: args.remove_intermediates_on_failure,
    };
    let rasterizer = Inkscape::new(args.rasterizer);
    run_svg_to_ico(&args.conversion.directory, &sizes, &rasterizer, options)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_inkscape_and_keeps_intermediates() {
        let cli = Cli::try_parse_from(["svg-to-ico"]).unwrap();
        assert_eq!(cli.rasterizer, "inkscape");
        assert!(!cli.remove_intermediates_on_failure);
    }

    #[test]
    fn accepts_rasterizer_options() {
        let cli = Cli::try_parse_from([
            "svg-to-ico",
            "--rasterizer",
            "/opt/inkscape/bin/inkscape",
            "--remove-intermediates-on-failure",
            "-s",
            "16,32",
            "-f",
        ])
        .unwrap();
        assert_eq!(cli.rasterizer, "/opt/inkscape/bin/inkscape");
        assert!(cli.remove_intermediates_on_failure);
        assert!(cli.conversion.force_reconversion);
        assert_eq!(cli.conversion.size_set().unwrap().labels(), vec!["16", "32"]);
    }

    #[test]
    fn rejects_the_png_only_dot_flag() {
        assert!(Cli::try_parse_from(["svg-to-ico", "-p"]).is_err());
        assert!(Cli::try_parse_from(["svg-to-ico", "--enable-name-with-dot-as-png"]).is_err());
    }
}
