use geobounds_core::{bounds::InvalidBoundsError, Bounds, GeoPoint};
use thiserror::Error;

/// Errors from parsing coordinate arguments
#[derive(Error, Debug)]
pub enum CoordinateError {
    #[error("expected `{expected}' but got `{input}'")]
    Malformed {
        expected: &'static str,
        input: String,
    },

    #[error("`{token}' is not a number")]
    NotANumber { token: String },

    #[error(transparent)]
    Invalid(#[from] InvalidBoundsError),
}

fn parse_value(token: &str) -> Result<f64, CoordinateError> {
    token.trim().parse().map_err(|_| CoordinateError::NotANumber {
        token: token.trim().to_string(),
    })
}

/// Parses a point given as `lat,lon`
pub fn parse_point(input: &str) -> Result<GeoPoint, CoordinateError> {
    let parts: Vec<&str> = input.split(',').collect();
    let &[latitude, longitude] = parts.as_slice() else {
        return Err(CoordinateError::Malformed {
            expected: "lat,lon",
            input: input.to_string(),
        });
    };
    Ok(GeoPoint::new(
        parse_value(latitude)?,
        parse_value(longitude)?,
    ))
}

/// Parses bounds given as `north,east,south,west`
pub fn parse_bounds(input: &str) -> Result<Bounds, CoordinateError> {
    let parts: Vec<&str> = input.split(',').collect();
    let &[north, east, south, west] = parts.as_slice() else {
        return Err(CoordinateError::Malformed {
            expected: "north,east,south,west",
            input: input.to_string(),
        });
    };
    Ok(Bounds::from_corners(
        parse_value(north)?,
        parse_value(east)?,
        parse_value(south)?,
        parse_value(west)?,
    )?)
}

#[cfg(test)]
mod tests {
    use geobounds_core::{Bounds, GeoPoint};

    use super::{parse_bounds, parse_point};

    #[test]
    fn parses_points_and_bounds() {
        assert_eq!(
            parse_point("52.5, 13.4").unwrap(),
            GeoPoint::new(52.5, 13.4)
        );
        assert_eq!(
            parse_bounds("10,-170,-10,170").unwrap(),
            Bounds::from_corners(10.0, -170.0, -10.0, 170.0).unwrap()
        );
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(parse_point("52.5").is_err());
        assert!(parse_point("a,b").is_err());
        assert!(parse_bounds("10,20,30").is_err());
        assert!(parse_bounds("100,0,0,0").is_err());
    }
}
