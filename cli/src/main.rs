use clap::{Parser, Subcommand};
use commands::{
    cover::{run_cover, CoverArgs},
    intersect::{run_intersect, IntersectArgs},
    tile::{run_tile, TileArgs},
    union::{run_union, UnionArgs},
};

mod commands;

#[derive(Parser, Debug)]
#[command(author, version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Tile(TileArgs),
    Cover(CoverArgs),
    Union(UnionArgs),
    Intersect(IntersectArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Tile(args) => run_tile(args),
        Commands::Cover(args) => run_cover(args),
        Commands::Union(args) => run_union(args),
        Commands::Intersect(args) => run_intersect(args),
    }
}
