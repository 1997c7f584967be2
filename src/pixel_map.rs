//! Pixel classification: bitmap colors to province ids.

use image::RgbImage;
use rayon::prelude::*;

use crate::classifier::{Classifier, ProvinceId};
use crate::grid::Grid;

/// Classify every pixel of the bitmap into a province id grid of the same
/// dimensions. Unknown colors map to 0 (background) rather than failing.
///
/// Rows are independent, so they are classified in parallel; the result is
/// identical to a sequential row-major sweep.
pub fn map_pixels(classifier: &Classifier, image: &RgbImage) -> Grid<ProvinceId> {
    let width = image.width() as usize;
    let height = image.height() as usize;

    let data: Vec<ProvinceId> = (0..height)
        .into_par_iter()
        .flat_map_iter(|y| {
            (0..width).map(move |x| {
                let pixel = image.get_pixel(x as u32, y as u32);
                classifier.lookup(pixel.0)
            })
        })
        .collect();

    Grid::from_vec(width, height, data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_every_pixel_classified() {
        let classifier = Classifier::from_records([(1, [255, 0, 0]), (2, [0, 0, 255])]);
        let mut image = RgbImage::new(2, 2);
        image.put_pixel(0, 0, Rgb([255, 0, 0]));
        image.put_pixel(1, 0, Rgb([0, 0, 255]));
        image.put_pixel(0, 1, Rgb([0, 0, 255]));
        image.put_pixel(1, 1, Rgb([255, 0, 0]));

        let grid = map_pixels(&classifier, &image);
        assert_eq!(*grid.get(0, 0), 1);
        assert_eq!(*grid.get(1, 0), 2);
        assert_eq!(*grid.get(0, 1), 2);
        assert_eq!(*grid.get(1, 1), 1);
    }

    #[test]
    fn test_unknown_color_becomes_background() {
        let classifier = Classifier::from_records([(1, [255, 0, 0])]);
        let image = RgbImage::from_pixel(3, 2, Rgb([12, 34, 56]));
        let grid = map_pixels(&classifier, &image);
        assert!(grid.iter().all(|(_, _, &pid)| pid == 0));
    }
}
