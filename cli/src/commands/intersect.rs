use anyhow::Result;
use clap::Args;
use yansi::Paint;

use super::parse::parse_bounds;

/// Compute the area covered by both of two bounds
#[derive(Args, Debug)]
pub struct IntersectArgs {
    /// First bounds as `north,east,south,west`
    pub first: String,

    /// Second bounds as `north,east,south,west`
    pub second: String,
}

/// Run the `intersect` command
pub fn run_intersect(args: IntersectArgs) -> Result<()> {
    let first = parse_bounds(&args.first)?;
    let second = parse_bounds(&args.second)?;
    match first.intersect(&second) {
        Some(bounds) => println!("{} {}", "bounds".bold(), bounds),
        None => println!("{}", "no intersection".yellow()),
    }
    Ok(())
}
