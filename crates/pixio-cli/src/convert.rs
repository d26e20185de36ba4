use std::path::{Path, PathBuf};

use log::{error, info, warn};
use pixio::OutputFormat;

/// Convert every path to the format named by `token`, writing next to the source
///
/// The token is checked before any file is touched. Returns false if the token is
/// rejected or any path failed.
pub fn convert(token: &str, paths: &[PathBuf]) -> bool {
    let format = match token.parse::<OutputFormat>().and_then(|format| {
        format.encoder()?;
        Ok(format)
    }) {
        Ok(format) => format,
        Err(err) => {
            error!("{err}");
            return false;
        }
    };

    let mut ok = true;
    for src in paths {
        let dest = src.with_extension(format.extension());
        if dest == *src {
            warn!(
                "Skipping {}, as it would be overwritten by its own conversion!",
                src.display()
            );
            continue;
        }

        match transcode(src, &dest, format) {
            Ok(()) => info!("{} -> {}", src.display(), dest.display()),
            Err(err) => {
                error!("{}: {err}", src.display());
                ok = false;
            }
        }
    }
    ok
}

fn transcode(src: &Path, dest: &Path, format: OutputFormat) -> pixio::Result<()> {
    let image = pixio::open_image(src)?;
    pixio::save_image_as(&image, dest, format)
}
