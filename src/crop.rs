use image::RgbImage;

use crate::grid::Grid;

/// A rectangle in grid coordinates; max edges are exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundingBox {
    pub x_min: usize,
    pub y_min: usize,
    pub x_max: usize,
    pub y_max: usize,
}

impl BoundingBox {
    pub fn width(&self) -> usize {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> usize {
        self.y_max - self.y_min
    }
}

/// Compute the bounding box of all true cells in the mask, expanded by one
/// cell on each side and clamped to the grid. The margin keeps the relevant
/// region from being clipped exactly at its edge.
///
/// Returns None when no cell is true — the caller must treat that as a
/// configuration error, not an empty crop.
pub fn mask_bounds(mask: &Grid<bool>) -> Option<BoundingBox> {
    let mut min_x = usize::MAX;
    let mut min_y = usize::MAX;
    let mut max_x = 0usize;
    let mut max_y = 0usize;
    let mut any = false;

    for (x, y, &set) in mask.iter() {
        if set {
            any = true;
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
    }

    if !any {
        return None;
    }

    Some(BoundingBox {
        x_min: min_x.saturating_sub(1),
        y_min: min_y.saturating_sub(1),
        x_max: (max_x + 2).min(mask.width),
        y_max: (max_y + 2).min(mask.height),
    })
}

/// Crop the source bitmap to the bounding box. The result always matches
/// the dimensions of the grid cropped with the same box.
pub fn crop_image(image: &RgbImage, bounds: &BoundingBox) -> RgbImage {
    image::imageops::crop_imm(
        image,
        bounds.x_min as u32,
        bounds.y_min as u32,
        bounds.width() as u32,
        bounds.height() as u32,
    )
    .to_image()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask_from(width: usize, height: usize, cells: &[(usize, usize)]) -> Grid<bool> {
        let mut mask = Grid::new_with(width, height, false);
        for &(x, y) in cells {
            mask.set(x, y, true);
        }
        mask
    }

    #[test]
    fn test_bounds_add_one_cell_margin() {
        let mask = mask_from(10, 10, &[(4, 5), (5, 5)]);
        let bounds = mask_bounds(&mask).unwrap();
        assert_eq!(
            bounds,
            BoundingBox {
                x_min: 3,
                y_min: 4,
                x_max: 7,
                y_max: 7,
            }
        );
    }

    #[test]
    fn test_bounds_clamp_at_grid_edges() {
        let mask = mask_from(4, 4, &[(0, 0), (3, 3)]);
        let bounds = mask_bounds(&mask).unwrap();
        assert_eq!(
            bounds,
            BoundingBox {
                x_min: 0,
                y_min: 0,
                x_max: 4,
                y_max: 4,
            }
        );
    }

    #[test]
    fn test_empty_mask_has_no_bounds() {
        let mask = Grid::new_with(5, 5, false);
        assert!(mask_bounds(&mask).is_none());
    }

    #[test]
    fn test_cropped_image_matches_grid_dimensions() {
        let grid: Grid<u32> = Grid::new(8, 6);
        let image = RgbImage::new(8, 6);
        let bounds = BoundingBox {
            x_min: 2,
            y_min: 1,
            x_max: 7,
            y_max: 5,
        };
        let cropped_grid = grid.crop(&bounds);
        let cropped_image = crop_image(&image, &bounds);
        assert_eq!(cropped_image.width() as usize, cropped_grid.width);
        assert_eq!(cropped_image.height() as usize, cropped_grid.height);
    }
}
