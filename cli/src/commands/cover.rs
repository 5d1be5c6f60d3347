use std::io::{self, Read};

use anyhow::{bail, Result};
use clap::Args;
use geobounds_core::{bounds::BoundsBuilder, GeoPoint};
use itertools::Itertools;
use yansi::Paint;

use super::parse::parse_point;

/// Compute the bounds covering a set of points
#[derive(Args, Debug)]
pub struct CoverArgs {
    /// Points as `lat,lon` pairs; read from stdin when empty
    pub points: Vec<String>,
}

/// Run the `cover` command
pub fn run_cover(args: CoverArgs) -> Result<()> {
    let points = if args.points.is_empty() {
        read_stdin_points()?
    } else {
        args.points
            .iter()
            .map(|point| parse_point(point))
            .collect::<Result<Vec<_>, _>>()?
    };

    let bounds = BoundsBuilder::new().includes(points).build()?;
    println!("{} {}", "bounds".bold(), bounds);
    println!(
        "{} {} x {} degrees",
        "span".bold(),
        bounds.latitude_span(),
        bounds.longitude_span()
    );

    Ok(())
}

/// Read whitespace separated latitude and longitude values from stdin
fn read_stdin_points() -> Result<Vec<GeoPoint>> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    let values = input
        .split_whitespace()
        .map(str::parse::<f64>)
        .collect::<Result<Vec<_>, _>>()?;
    if values.len() % 2 != 0 {
        bail!("expected an even number of values, got {}", values.len());
    }

    Ok(values
        .into_iter()
        .tuples()
        .map(|(latitude, longitude)| GeoPoint::new(latitude, longitude))
        .collect())
}
