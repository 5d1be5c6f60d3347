use anyhow::{bail, Result};
use clap::Args;
use geobounds_core::Bounds;
use yansi::Paint;

/// Print the geographic bounds of a Web Mercator tile
#[derive(Args, Debug)]
pub struct TileArgs {
    /// Tile zoom level
    pub zoom: u32,

    /// Tile column
    pub x: u32,

    /// Tile row
    pub y: u32,

    /// Also print the center point
    #[arg(long)]
    pub center: bool,
}

/// Run the `tile` command
pub fn run_tile(args: TileArgs) -> Result<()> {
    if args.zoom > 31 {
        bail!("zoom level {} is out of range", args.zoom);
    }
    let max_index = (1u32 << args.zoom) - 1;
    if args.x > max_index || args.y > max_index {
        bail!("tile {}/{}/{} does not exist", args.zoom, args.x, args.y);
    }

    let bounds = Bounds::from_tile(args.zoom, args.x, args.y);
    println!("{} {}", "bounds".bold(), bounds);
    if args.center {
        println!("{} {}", "center".bold(), bounds.center());
    }

    Ok(())
}
