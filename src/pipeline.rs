//! End-to-end map generation pipeline.
//!
//! Wires the stages together in dependency order: classify pixels, mask and
//! dilate the relevant region, crop, upscale, then emit tiles and metadata.
//! Inputs are loaded and validated before any output file is touched, so an
//! aborted run never leaves the output directory half-cleared.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::classifier::Classifier;
use crate::crop::{crop_image, mask_bounds};
use crate::mask::{dilate, relevance_mask};
use crate::metadata::{remove_stale_metadata, write_metadata};
use crate::pixel_map::map_pixels;
use crate::relevance::load_state_provinces;
use crate::tiles::{prepare_tiles_dir, write_tiles};
use crate::upscale::upscale_image;

/// Tunable pipeline parameters. The defaults match the map client's
/// expectations; changing them requires a matching client change.
#[derive(Clone, Copy, Debug)]
pub struct PipelineConfig {
    /// Edge length of emitted square tiles, in upscaled pixels.
    pub tile_size: usize,
    /// Integer upscale factor applied after cropping.
    pub scale_factor: usize,
    /// Number of 8-connected dilation passes around the relevant region.
    pub dilation_iterations: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            tile_size: 1024,
            scale_factor: 2,
            dilation_iterations: 30,
        }
    }
}

/// Input and output locations for one run.
#[derive(Clone, Debug)]
pub struct RunPaths {
    /// Province bitmap (3-channel color).
    pub provinces_bmp: PathBuf,
    /// `;`-delimited color definition table.
    pub definitions: PathBuf,
    /// Directory of state files naming the in-scope provinces.
    pub states_dir: PathBuf,
    /// Output directory; receives `provinces.json` and `tiles/`.
    pub out_dir: PathBuf,
}

impl RunPaths {
    pub fn metadata_path(&self) -> PathBuf {
        self.out_dir.join("provinces.json")
    }

    pub fn tiles_dir(&self) -> PathBuf {
        self.out_dir.join("tiles")
    }
}

/// Everything that can abort a run. Input problems, data problems and write
/// failures are distinct so operators can tell a missing file from an
/// empty states directory from a palette/bitmap mismatch.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to load province bitmap {}: {source}", .path.display())]
    ImageRead {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("failed to read definition table {}: {source}", .path.display())]
    DefinitionRead { path: PathBuf, source: io::Error },

    #[error("failed to scan states directory {}: {source}", .path.display())]
    StatesRead { path: PathBuf, source: io::Error },

    #[error("no provinces listed in any state file under {}", .path.display())]
    EmptyRelevance { path: PathBuf },

    #[error("no relevant province pixels in the bitmap; bounding box is undefined")]
    EmptyRegion,

    #[error("failed to write {}: {source}", .path.display())]
    OutputWrite { path: PathBuf, source: io::Error },

    #[error("failed to write tiles under {}: {source}", .path.display())]
    TileWrite {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// What a completed run produced; returned for reporting.
#[derive(Clone, Copy, Debug)]
pub struct RunSummary {
    /// Crop origin in original bitmap coordinates.
    pub crop_origin: (usize, usize),
    /// Dimensions of the upscaled output.
    pub scaled_width: usize,
    pub scaled_height: usize,
    /// Number of tile files emitted.
    pub tiles_written: usize,
}

/// Run the full pipeline: load inputs, classify, mask, crop, upscale, and
/// write tiles plus metadata. Every run is a full rebuild from clean state;
/// there is no incremental mode.
pub fn run(paths: &RunPaths, config: &PipelineConfig) -> Result<RunSummary, PipelineError> {
    println!("Loading image...");
    let image = image::open(&paths.provinces_bmp)
        .map_err(|source| PipelineError::ImageRead {
            path: paths.provinces_bmp.clone(),
            source,
        })?
        .to_rgb8();
    println!("Image size: {}x{}", image.width(), image.height());

    println!("Loading definitions and states...");
    let classifier =
        Classifier::load(&paths.definitions).map_err(|source| PipelineError::DefinitionRead {
            path: paths.definitions.clone(),
            source,
        })?;
    let relevant =
        load_state_provinces(&paths.states_dir).map_err(|source| PipelineError::StatesRead {
            path: paths.states_dir.clone(),
            source,
        })?;
    println!(
        "Loaded {} color definitions, {} relevant provinces",
        classifier.len(),
        relevant.len()
    );
    if relevant.is_empty() {
        return Err(PipelineError::EmptyRelevance {
            path: paths.states_dir.clone(),
        });
    }

    println!("Mapping pixels to province ids...");
    let pid_map = map_pixels(&classifier, &image);

    println!("Expanding relevance mask ({} passes)...", config.dilation_iterations);
    let mask = relevance_mask(&pid_map, &relevant);
    let expanded = dilate(&mask, config.dilation_iterations);

    println!("Cropping to province area...");
    let bounds = mask_bounds(&expanded).ok_or(PipelineError::EmptyRegion)?;
    let cropped_map = pid_map.crop(&bounds);
    let cropped_image = crop_image(&image, &bounds);
    println!(
        "Crop: origin ({}, {}), size {}x{}",
        bounds.x_min,
        bounds.y_min,
        bounds.width(),
        bounds.height()
    );

    println!("Scaling output x{}...", config.scale_factor);
    let scaled_map = cropped_map.upscale(config.scale_factor);
    let scaled_image = upscale_image(&cropped_image, config.scale_factor);

    let metadata_path = paths.metadata_path();
    let tiles_dir = paths.tiles_dir();
    remove_stale_metadata(&metadata_path).map_err(|source| PipelineError::OutputWrite {
        path: metadata_path.clone(),
        source,
    })?;
    prepare_tiles_dir(&tiles_dir).map_err(|source| PipelineError::OutputWrite {
        path: tiles_dir.clone(),
        source,
    })?;

    println!("Saving provinces.json...");
    write_metadata(&metadata_path, &scaled_map, &bounds).map_err(|source| {
        PipelineError::OutputWrite {
            path: metadata_path.clone(),
            source,
        }
    })?;

    println!("Generating tiles...");
    let tiles_written = write_tiles(&scaled_map, &scaled_image, &tiles_dir, config.tile_size)
        .map_err(|source| PipelineError::TileWrite {
            path: tiles_dir.clone(),
            source,
        })?;
    println!("Wrote {} tiles", tiles_written);

    Ok(RunSummary {
        crop_origin: (bounds.x_min, bounds.y_min),
        scaled_width: scaled_map.width,
        scaled_height: scaled_map.height,
        tiles_written,
    })
}
