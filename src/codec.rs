//! Input decode and output encode around the compositing core.
//!
//! Inputs are PNG or JPEG, selected by file extension before any decode is
//! attempted. Outputs are always PNG, written next to the input file as
//! `<stem>_<border>.png`.

use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use image::{ImageFormat, RgbaImage};

use crate::error::{BordureError, BordureResult};

/// Map a path's extension to a supported input format.
pub fn detect_format(path: &Path) -> BordureResult<ImageFormat> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    if ext.eq_ignore_ascii_case("png") {
        Ok(ImageFormat::Png)
    } else if ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg") {
        Ok(ImageFormat::Jpeg)
    } else {
        Err(BordureError::UnsupportedFormat {
            path: path.to_path_buf(),
        })
    }
}

/// Decode one input photo to RGBA8.
pub fn read_image(path: &Path) -> BordureResult<RgbaImage> {
    let format = detect_format(path)?;
    let file = File::open(path).map_err(|e| BordureError::Decode {
        path: path.to_path_buf(),
        source: image::ImageError::IoError(e),
    })?;
    let img = image::load(BufReader::new(file), format).map_err(|source| BordureError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(img.to_rgba8())
}

/// Destination for a composited icon: sibling of the input, stem suffixed
/// with the border name, always `.png`.
pub fn dest_path(input: &Path, border_name: &str) -> PathBuf {
    let mut name = input.file_stem().unwrap_or_default().to_os_string();
    name.push(format!("_{border_name}.png"));
    input.with_file_name(name)
}

/// PNG-encode a composited icon next to its input photo.
pub fn write_icon(input: &Path, border_name: &str, icon: &RgbaImage) -> BordureResult<PathBuf> {
    let dest = dest_path(input, border_name);
    icon.save_with_format(&dest, ImageFormat::Png)
        .map_err(|source| BordureError::Write {
            path: dest.clone(),
            source,
        })?;
    Ok(dest)
}
