use image::{RgbaImage, imageops};

/// Resample `source` to exactly `width` x `height` with Catmull-Rom
/// (bicubic) interpolation.
///
/// The photo is stretched or squashed to fill the target; aspect ratio is
/// deliberately not preserved. Matching dimensions skip the resample.
pub fn scale_to_fill(source: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    if source.dimensions() == (width, height) {
        return source.clone();
    }
    imageops::resize(source, width, height, imageops::FilterType::CatmullRom)
}
