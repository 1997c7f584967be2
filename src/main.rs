use std::path::PathBuf;
use std::process;

use clap::Parser;

use province_tiler::pipeline::{self, PipelineConfig, RunPaths};

#[derive(Parser, Debug)]
#[command(name = "province_tiler")]
#[command(about = "Generate cropped, upscaled map tiles from a province bitmap")]
struct Args {
    /// Path to the province bitmap (3-channel color)
    #[arg(short = 'p', long)]
    provinces: PathBuf,

    /// Path to the semicolon-delimited color definition table
    #[arg(short = 'd', long)]
    definitions: PathBuf,

    /// Directory of state files listing the in-scope provinces
    #[arg(short = 's', long)]
    states: PathBuf,

    /// Output directory for provinces.json and the tiles/ subdirectory
    #[arg(short = 'o', long)]
    out: PathBuf,

    /// Edge length of emitted square tiles, in upscaled pixels
    #[arg(long, default_value = "1024")]
    tile_size: usize,

    /// Integer upscale factor applied after cropping
    #[arg(long, default_value = "2")]
    scale: usize,

    /// Number of dilation passes around the relevant region
    #[arg(long, default_value = "30")]
    dilation: usize,
}

fn main() {
    let args = Args::parse();

    let paths = RunPaths {
        provinces_bmp: args.provinces,
        definitions: args.definitions,
        states_dir: args.states,
        out_dir: args.out,
    };
    let config = PipelineConfig {
        tile_size: args.tile_size.max(1),
        scale_factor: args.scale.max(1),
        dilation_iterations: args.dilation,
    };

    match pipeline::run(&paths, &config) {
        Ok(summary) => {
            println!(
                "Map generation complete: {} tiles, {}x{} pixels, crop origin ({}, {})",
                summary.tiles_written,
                summary.scaled_width,
                summary.scaled_height,
                summary.crop_origin.0,
                summary.crop_origin.1
            );
        }
        Err(e) => {
            eprintln!("Map generation failed: {}", e);
            process::exit(1);
        }
    }
}
