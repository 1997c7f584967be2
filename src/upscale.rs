//! Integer upscaling of the cropped outputs.
//!
//! The id grid is block-replicated (see [`crate::grid::Grid::upscale`]); the
//! image uses nearest-neighbor resampling so province boundaries stay
//! hard-edged. Both paths replicate source pixels identically, keeping the
//! grid and the image pixel-aligned at every upscaled coordinate.

use image::imageops::{self, FilterType};
use image::RgbImage;

/// Upscale the cropped bitmap by an integer factor with nearest-neighbor
/// resampling. No interpolation or anti-aliasing: blended colors would no
/// longer match any palette entry.
pub fn upscale_image(image: &RgbImage, factor: usize) -> RgbImage {
    if factor <= 1 {
        return image.clone();
    }
    imageops::resize(
        image,
        image.width() * factor as u32,
        image.height() * factor as u32,
        FilterType::Nearest,
    )
}
