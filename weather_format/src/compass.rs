use tracing::debug;

/// Sixteen point compass rose, clockwise from north. The west half uses the
/// Spanish abbreviations (O for oeste).
pub const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSO", "SO", "OSO", "O", "ONO", "NO",
    "NNO",
];

/// Shown when a heading is missing or not a number.
pub const UNKNOWN_DIRECTION: &str = "—";

const SECTOR_DEGREES: f64 = 360.0 / COMPASS_POINTS.len() as f64;

/// Compass label for a heading in degrees, or [`UNKNOWN_DIRECTION`].
///
/// Any finite heading is accepted, including negative ones and ones past a
/// full turn: `deg_to_compass(d + 360.0 * k)` equals `deg_to_compass(d)`.
pub fn deg_to_compass<D: Into<Option<f64>>>(degrees: D) -> &'static str {
    let Some(degrees) = degrees.into() else {
        debug!("No heading given, direction is unknown");
        return UNKNOWN_DIRECTION;
    };
    match compass_index(degrees) {
        Some(index) => COMPASS_POINTS[index],
        None => {
            debug!(degrees, "Heading is not a finite number, direction is unknown");
            UNKNOWN_DIRECTION
        }
    }
}

/// Index into [`COMPASS_POINTS`] for a heading. `None` for NaN and infinities.
pub fn compass_index(degrees: f64) -> Option<usize> {
    if !degrees.is_finite() {
        return None;
    }
    let sector = round_half_up(degrees / SECTOR_DEGREES);
    // rem_euclid keeps negative sectors inside the table
    Some(sector.rem_euclid(COMPASS_POINTS.len() as f64) as usize)
}

/// Reads a heading typed by a user. Anything that is not a number is `None`.
pub fn parse_heading(text: &str) -> Option<f64> {
    text.trim().parse().ok()
}

/// Rounds to the nearest integer, ties toward positive infinity.
fn round_half_up(value: f64) -> f64 {
    let rounded = value.round();
    if rounded - value == -0.5 {
        rounded + 1.0
    } else {
        rounded
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;

    #[test]
    fn test_cardinal_and_intercardinal_points() {
        assert_eq!(deg_to_compass(0.0), "N");
        assert_eq!(deg_to_compass(22.5), "NNE");
        assert_eq!(deg_to_compass(90.0), "E");
        assert_eq!(deg_to_compass(180.0), "S");
        assert_eq!(deg_to_compass(225.0), "SO");
        assert_eq!(deg_to_compass(270.0), "O");
        assert_eq!(deg_to_compass(315.0), "NO");
        assert_eq!(deg_to_compass(337.5), "NNO");
    }

    #[test]
    fn test_every_sector_centre() {
        for (i, label) in COMPASS_POINTS.iter().enumerate() {
            assert_eq!(deg_to_compass(i as f64 * 22.5), *label);
        }
    }

    #[test]
    fn test_wraps_around() {
        assert_eq!(deg_to_compass(360.0), "N");
        assert_eq!(deg_to_compass(350.0), "N");
        assert_eq!(deg_to_compass(360.0 * 3.0 + 11.0), deg_to_compass(11.0));
    }

    #[test]
    fn test_full_turns_do_not_change_direction() {
        for d in 0..360 {
            let d = f64::from(d);
            for k in -3..=3 {
                assert_eq!(
                    deg_to_compass(d + 360.0 * f64::from(k)),
                    deg_to_compass(d),
                    "heading {} with {} turns",
                    d,
                    k
                );
            }
        }
    }

    #[test]
    fn test_negative_headings() {
        assert_eq!(deg_to_compass(-11.25), "N");
        assert_eq!(deg_to_compass(-22.5), "NNO");
        assert_eq!(deg_to_compass(-90.0), "O");
        assert_eq!(compass_index(-11.25 - 360.0 * 10.0), Some(0));
    }

    #[test]
    fn test_ties_round_up() {
        assert_eq!(deg_to_compass(11.25), "NNE");
        assert_eq!(deg_to_compass(-33.75), "NNO");
        assert_eq!(deg_to_compass(348.75), "N");
    }

    #[test]
    fn test_huge_headings_stay_in_table() {
        assert!(compass_index(1e300).is_some_and(|i| i < COMPASS_POINTS.len()));
        assert!(compass_index(-1e300).is_some_and(|i| i < COMPASS_POINTS.len()));
    }

    #[test]
    #[traced_test]
    fn test_unknown_direction() {
        assert_eq!(deg_to_compass(None), UNKNOWN_DIRECTION);
        assert_eq!(deg_to_compass(f64::NAN), "—");
        assert_eq!(deg_to_compass(Some(f64::NAN)), "—");
        assert_eq!(deg_to_compass(f64::INFINITY), "—");
        assert!(logs_contain("direction is unknown"));
    }

    #[test]
    fn test_parse_heading() {
        assert_eq!(parse_heading("225"), Some(225.0));
        assert_eq!(parse_heading(" -11.25 "), Some(-11.25));
        assert_eq!(parse_heading("SW"), None);
        assert_eq!(parse_heading(""), None);
        assert_eq!(deg_to_compass(parse_heading("not a heading")), UNKNOWN_DIRECTION);
    }
}
