use anyhow::Result;
use clap::Args;
use yansi::Paint;

use super::parse::parse_bounds;

/// Merge two bounds into the bounds covering both
#[derive(Args, Debug)]
pub struct UnionArgs {
    /// First bounds as `north,east,south,west`
    pub first: String,

    /// Second bounds as `north,east,south,west`
    pub second: String,
}

/// Run the `union` command
pub fn run_union(args: UnionArgs) -> Result<()> {
    let first = parse_bounds(&args.first)?;
    let second = parse_bounds(&args.second)?;
    println!("{} {}", "bounds".bold(), first.union(&second));
    Ok(())
}
