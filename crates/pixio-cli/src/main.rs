use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{Parser, Subcommand};
use log::{debug, error, info, LevelFilter, SetLoggerError};
use pixio::Palette;
use simplelog::{Config, SimpleLogger};

mod convert;
mod swatch;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CmdArgs {
    #[command(subcommand)]
    command: Command,

    #[arg(
        short = 'd',
        long = "debug",
        help = "debug mode, 1 for debug and 2 for trace output",
        default_value_t = 0,
        global = true
    )]
    debug: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Re-encode images, writing each result next to its source
    Convert {
        #[arg(short, long, help = "output format: png, jpeg, bmp, gif, webp or tiff")]
        format: String,

        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Print the detected format, size and color type of images
    Info {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Render colors as a strip of square blocks, one per palette entry
    Swatch {
        #[arg(short, long, default_value = "png")]
        format: String,

        #[arg(short, long)]
        out: PathBuf,

        #[arg(
            short,
            long,
            help = "edge length of each block in pixels",
            default_value_t = 16,
            value_parser = clap::value_parser!(u32).range(1..)
        )]
        size: u32,

        #[arg(required = true, help = "hex codes (#rrggbb) or channel lists (r,g,b[,a])")]
        colors: Vec<String>,
    },
}

fn logger_init(debug: u8) -> Result<(), SetLoggerError> {
    let log_level = match debug {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    SimpleLogger::init(log_level, Config::default())
}

fn main() -> ExitCode {
    let args = CmdArgs::parse();

    if let Err(err) = logger_init(args.debug) {
        eprintln!("failed to set up logging: {err}");
        return ExitCode::FAILURE;
    }

    let ok = match args.command {
        Command::Convert { format, paths } => convert::convert(&format, &paths),
        Command::Info { paths } => paths.iter().fold(true, |ok, src| print_info(src) && ok),
        Command::Swatch {
            format,
            out,
            size,
            colors,
        } => write_swatch(&format, &out, size, &colors),
    };

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn print_info(src: &Path) -> bool {
    match pixio::open_image_with_format(src) {
        Ok((image, format)) => {
            println!(
                "{}: {format:?} {}x{} {:?}",
                src.display(),
                image.width(),
                image.height(),
                image.color()
            );
            true
        }
        Err(err) => {
            error!("{}: {err}", src.display());
            false
        }
    }
}

fn write_swatch(token: &str, out: &Path, size: u32, colors: &[String]) -> bool {
    let palette = match Palette::parse(colors.iter().map(String::as_str)) {
        Ok(palette) => palette,
        Err(err) => {
            error!("invalid color: {err}");
            return false;
        }
    };
    debug!("rendering {} colors", palette.len());

    let Some(image) = swatch::render(&palette, size) else {
        error!(
            "a swatch of {} colors with {size} pixel blocks is too large",
            palette.len()
        );
        return false;
    };
    match pixio::save_image(&image, out, token) {
        Ok(()) => {
            info!("wrote {}", out.display());
            true
        }
        Err(err) => {
            error!("{}: {err}", out.display());
            false
        }
    }
}
