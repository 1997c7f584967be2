//! Tile partitioning and output.
//!
//! The upscaled map is sliced into fixed-size square tiles named by their
//! upscaled-grid origin, `<x>_<y>.png`. Tiles whose id sub-grid is entirely
//! background are not written at all: the client treats a missing tile file
//! as "nothing to render there", so the skip is required behavior.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use image::RgbImage;

use crate::classifier::ProvinceId;
use crate::crop::BoundingBox;
use crate::grid::Grid;

/// Create the tiles directory if needed and remove any tile files left over
/// from a previous run. Runs are full rebuilds; stale tiles would otherwise
/// survive as phantom content.
pub fn prepare_tiles_dir(tiles_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(tiles_dir)?;
    for entry in fs::read_dir(tiles_dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) == Some("png") {
            fs::remove_file(&path)?;
        }
    }
    Ok(())
}

/// One emitted tile: origin in upscaled-grid coordinates plus its bounds.
struct Tile {
    x: usize,
    y: usize,
    bounds: BoundingBox,
}

/// Iterate tile origins at every multiple of `tile_size`, clamping boundary
/// tiles to the grid edge, and keep only tiles with at least one non-zero
/// id cell.
fn occupied_tiles(pid_map: &Grid<ProvinceId>, tile_size: usize) -> Vec<Tile> {
    let mut tiles = Vec::new();
    for y in (0..pid_map.height).step_by(tile_size) {
        for x in (0..pid_map.width).step_by(tile_size) {
            let bounds = BoundingBox {
                x_min: x,
                y_min: y,
                x_max: (x + tile_size).min(pid_map.width),
                y_max: (y + tile_size).min(pid_map.height),
            };
            let occupied = (bounds.y_min..bounds.y_max).any(|ty| {
                pid_map.row(ty)[bounds.x_min..bounds.x_max]
                    .iter()
                    .any(|&pid| pid != 0)
            });
            if occupied {
                tiles.push(Tile { x, y, bounds });
            }
        }
    }
    tiles
}

/// Slice the upscaled image into tiles and write every occupied one as a
/// PNG under `tiles_dir`. Returns the number of tiles written.
pub fn write_tiles(
    pid_map: &Grid<ProvinceId>,
    image: &RgbImage,
    tiles_dir: &Path,
    tile_size: usize,
) -> Result<usize, image::ImageError> {
    let tiles = occupied_tiles(pid_map, tile_size);
    for tile in &tiles {
        let crop = image::imageops::crop_imm(
            image,
            tile.bounds.x_min as u32,
            tile.bounds.y_min as u32,
            tile.bounds.width() as u32,
            tile.bounds.height() as u32,
        )
        .to_image();
        crop.save(tile_path(tiles_dir, tile.x, tile.y))?;
    }
    Ok(tiles.len())
}

fn tile_path(tiles_dir: &Path, x: usize, y: usize) -> PathBuf {
    tiles_dir.join(format!("{}_{}.png", x, y))
}
