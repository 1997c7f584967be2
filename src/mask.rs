//! Relevance mask construction and morphological dilation.
//!
//! The mask marks every cell whose province id is in scope, then grows
//! outward by a fixed number of dilation passes. The growth guarantees a
//! margin of surrounding provinces in the final crop so the relevant region
//! keeps its geographic context instead of being clipped at its own border.

use std::collections::HashSet;

use crate::classifier::ProvinceId;
use crate::grid::{Grid, DIR_OFFSETS};

/// Mark every cell whose id belongs to the relevance set.
pub fn relevance_mask(grid: &Grid<ProvinceId>, relevant: &HashSet<ProvinceId>) -> Grid<bool> {
    let mut mask = Grid::new_with(grid.width, grid.height, false);
    for (x, y, pid) in grid.iter() {
        if relevant.contains(pid) {
            mask.set(x, y, true);
        }
    }
    mask
}

/// Dilate the mask with an 8-connected structuring element, `iterations`
/// times. A cell becomes true when it or any of its 8 neighbors was true in
/// the previous pass. Out-of-bounds neighbors count as false; the grid does
/// not wrap.
pub fn dilate(mask: &Grid<bool>, iterations: usize) -> Grid<bool> {
    let mut current = mask.clone();
    for _ in 0..iterations {
        let mut next = current.clone();
        for (x, y, &set) in current.iter() {
            if set {
                continue;
            }
            let touched = DIR_OFFSETS.iter().any(|&(dx, dy)| {
                let nx = x as i64 + dx as i64;
                let ny = y as i64 + dy as i64;
                nx >= 0
                    && ny >= 0
                    && (nx as usize) < current.width
                    && (ny as usize) < current.height
                    && *current.get(nx as usize, ny as usize)
            });
            if touched {
                next.set(x, y, true);
            }
        }
        current = next;
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_true(mask: &Grid<bool>) -> usize {
        mask.iter().filter(|(_, _, &set)| set).count()
    }

    #[test]
    fn test_mask_marks_relevant_ids() {
        let grid = Grid::from_vec(2, 2, vec![0u32, 5, 7, 5]);
        let mask = relevance_mask(&grid, &HashSet::from([5]));
        assert!(!*mask.get(0, 0));
        assert!(*mask.get(1, 0));
        assert!(!*mask.get(0, 1));
        assert!(*mask.get(1, 1));
    }

    #[test]
    fn test_single_dilation_covers_eight_neighbors() {
        // Central 2x2 block of id 5; one pass reaches every adjacent cell,
        // which in a 4x4 grid is the whole grid.
        let grid = Grid::from_vec(
            4,
            4,
            vec![0u32, 0, 0, 0, 0, 5, 5, 0, 0, 5, 5, 0, 0, 0, 0, 0],
        );
        let mask = relevance_mask(&grid, &HashSet::from([5]));
        let dilated = dilate(&mask, 1);
        assert_eq!(count_true(&dilated), 16);

        let bounds = crate::crop::mask_bounds(&dilated).unwrap();
        assert_eq!(
            bounds,
            crate::crop::BoundingBox {
                x_min: 0,
                y_min: 0,
                x_max: 4,
                y_max: 4,
            }
        );
    }

    #[test]
    fn test_dilation_is_monotonic() {
        let mut mask = Grid::new_with(20, 20, false);
        mask.set(10, 10, true);
        mask.set(3, 15, true);

        let mut previous = mask.clone();
        for _ in 0..5 {
            let next = dilate(&previous, 1);
            for (x, y, &was) in previous.iter() {
                if was {
                    assert!(*next.get(x, y), "dilation lost cell ({x}, {y})");
                }
            }
            previous = next;
        }
    }

    #[test]
    fn test_dilation_does_not_wrap() {
        let mut mask = Grid::new_with(5, 5, false);
        mask.set(0, 2, true);
        let dilated = dilate(&mask, 1);
        // The right column is far from the seed; wrapping would reach it.
        for y in 0..5 {
            assert!(!*dilated.get(4, y));
        }
    }

    #[test]
    fn test_zero_iterations_is_identity() {
        let mut mask = Grid::new_with(3, 3, false);
        mask.set(1, 1, true);
        assert_eq!(dilate(&mask, 0), mask);
    }
}
