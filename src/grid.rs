use crate::crop::BoundingBox;

/// A 2D grid with row-major storage and a top-left origin.
///
/// Unlike an equirectangular tilemap, province bitmaps are flat: nothing
/// wraps, and out-of-bounds neighbors simply do not exist.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    pub width: usize,
    pub height: usize,
    data: Vec<T>,
}

impl<T: Clone + Default> Grid<T> {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![T::default(); width * height],
        }
    }
}

impl<T: Clone> Grid<T> {
    pub fn new_with(width: usize, height: usize, value: T) -> Self {
        Self {
            width,
            height,
            data: vec![value; width * height],
        }
    }

    /// Build a grid from row-major data. Panics if the length does not
    /// match width * height.
    pub fn from_vec(width: usize, height: usize, data: Vec<T>) -> Self {
        assert_eq!(data.len(), width * height, "grid data length mismatch");
        Self { width, height, data }
    }

    fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y * self.width + x
    }

    pub fn get(&self, x: usize, y: usize) -> &T {
        &self.data[self.index(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, value: T) {
        let idx = self.index(x, y);
        self.data[idx] = value;
    }

    /// Iterate over all cells with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        self.data.iter().enumerate().map(move |(idx, val)| {
            let x = idx % self.width;
            let y = idx / self.width;
            (x, y, val)
        })
    }

    /// Borrow one row as a slice.
    pub fn row(&self, y: usize) -> &[T] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }

    /// Extract the sub-grid covered by `bounds`.
    pub fn crop(&self, bounds: &BoundingBox) -> Self {
        let mut data = Vec::with_capacity(bounds.width() * bounds.height());
        for y in bounds.y_min..bounds.y_max {
            let start = y * self.width + bounds.x_min;
            data.extend_from_slice(&self.data[start..start + bounds.width()]);
        }
        Self {
            width: bounds.width(),
            height: bounds.height(),
            data,
        }
    }
}

impl<T: Copy> Grid<T> {
    /// Upscale by an integer factor using pure block replication: source
    /// cell (x, y) fills the factor×factor block at (x*factor, y*factor).
    /// No interpolation — cell values are discrete identifiers.
    pub fn upscale(&self, factor: usize) -> Self {
        if factor <= 1 {
            return self.clone();
        }

        let new_width = self.width * factor;
        let new_height = self.height * factor;
        let mut data = Vec::with_capacity(new_width * new_height);

        for new_y in 0..new_height {
            let src_row = self.row(new_y / factor);
            for new_x in 0..new_width {
                data.push(src_row[new_x / factor]);
            }
        }

        Self {
            width: new_width,
            height: new_height,
            data,
        }
    }
}

/// Offsets of the 8-connected neighborhood (N, NE, E, SE, S, SW, W, NW).
pub const DIR_OFFSETS: [(i32, i32); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crop_extracts_subgrid() {
        let grid = Grid::from_vec(3, 3, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
        let bounds = BoundingBox {
            x_min: 1,
            y_min: 0,
            x_max: 3,
            y_max: 2,
        };
        let cropped = grid.crop(&bounds);
        assert_eq!(cropped.width, 2);
        assert_eq!(cropped.height, 2);
        assert_eq!(*cropped.get(0, 0), 2);
        assert_eq!(*cropped.get(1, 0), 3);
        assert_eq!(*cropped.get(0, 1), 5);
        assert_eq!(*cropped.get(1, 1), 6);
    }

    #[test]
    fn test_upscale_single_cell() {
        let grid = Grid::from_vec(1, 1, vec![7u32]);
        let scaled = grid.upscale(2);
        assert_eq!(scaled.width, 2);
        assert_eq!(scaled.height, 2);
        for (_, _, &v) in scaled.iter() {
            assert_eq!(v, 7);
        }
    }

    #[test]
    fn test_upscale_is_block_constant() {
        let grid = Grid::from_vec(2, 2, vec![1u32, 2, 3, 4]);
        let factor = 3;
        let scaled = grid.upscale(factor);
        assert_eq!(scaled.width, 6);
        assert_eq!(scaled.height, 6);
        for (x, y, &v) in scaled.iter() {
            assert_eq!(v, *grid.get(x / factor, y / factor));
        }
    }

    #[test]
    fn test_upscale_factor_one_is_identity() {
        let grid = Grid::from_vec(2, 1, vec![4u32, 9]);
        assert_eq!(grid.upscale(1), grid);
    }
}
