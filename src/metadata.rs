//! Metadata output for the map client.
//!
//! `provinces.json` carries the full upscaled id grid plus the crop origin
//! in original (pre-scale) bitmap coordinates, so the client can translate
//! any upscaled coordinate back via `(x / scale + x_min, y / scale + y_min)`.
//! Field names are part of the client contract.

use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;

use crate::classifier::ProvinceId;
use crate::crop::BoundingBox;
use crate::grid::Grid;

#[derive(Serialize)]
struct ProvinceMetadata {
    /// Upscaled identifier grid, row-major nested arrays.
    pid_map: Vec<Vec<ProvinceId>>,
    /// Crop origin `[x_min, y_min]` in original bitmap coordinates.
    bounds: [usize; 2],
}

/// Delete any previous metadata file; the record is regenerated from
/// scratch each run.
pub fn remove_stale_metadata(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}

/// Serialize the upscaled id grid and crop origin to `path` as JSON.
pub fn write_metadata(
    path: &Path,
    pid_map: &Grid<ProvinceId>,
    crop_origin: &BoundingBox,
) -> io::Result<()> {
    let record = ProvinceMetadata {
        pid_map: (0..pid_map.height).map(|y| pid_map.row(y).to_vec()).collect(),
        bounds: [crop_origin.x_min, crop_origin.y_min],
    };

    let json = serde_json::to_string(&record)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Serialization failed: {}", e)))?;
    fs::write(path, json)
}
