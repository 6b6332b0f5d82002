use std::io::Write;

use jiff::{Timestamp, Zoned, civil::Date};
use tracing::{debug, info};
use weather_format::{Clock, deg_to_compass, format_date, format_instant, parse_heading, today};

use crate::error::{ApplicationError, ApplicationResult};

/// `YYYY-MM-DD` for `instant`, or for the clock's current date.
///
/// Accepts a zoned timestamp (`2024-03-07T10:00[Europe/Madrid]`), a timestamp
/// with an offset, which is moved into the clock's time zone, or a plain date.
pub(crate) fn date_command<C: Clock>(instant: Option<&str>, clock: &C) -> ApplicationResult<String> {
    let Some(text) = instant else {
        return Ok(today(clock));
    };
    let text = text.trim();
    if let Ok(zoned) = text.parse::<Zoned>() {
        debug!(%zoned, "Formatting zoned timestamp");
        Ok(format_instant(&zoned))
    } else if let Ok(timestamp) = text.parse::<Timestamp>() {
        let zoned = timestamp.to_zoned(clock.now().time_zone().clone());
        debug!(%zoned, "Formatting timestamp in local time zone");
        Ok(format_instant(&zoned))
    } else if let Ok(date) = text.parse::<Date>() {
        Ok(format_date(date))
    } else {
        Err(ApplicationError::InvalidInstant(text.to_string()))
    }
}

/// Writes one compass label per heading.
pub(crate) fn compass_command<W: Write>(headings: &[String], out: &mut W) -> ApplicationResult<()> {
    for heading in headings {
        let degrees = parse_heading(heading);
        if degrees.is_none() {
            info!(%heading, "Heading is not a number");
        }
        writeln!(out, "{}", deg_to_compass(degrees))?;
    }
    Ok(())
}
