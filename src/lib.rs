//! Province map tiling library
//!
//! Converts a paletted province bitmap plus its color-definition table and
//! state files into cropped, upscaled PNG map tiles and a per-pixel
//! province-id metadata record.

pub mod classifier;
pub mod crop;
pub mod grid;
pub mod mask;
pub mod metadata;
pub mod pipeline;
pub mod pixel_map;
pub mod relevance;
pub mod tiles;
pub mod upscale;
