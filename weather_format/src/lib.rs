//! Display formatting used by the Weather Predictions forecast page: calendar
//! dates as `YYYY-MM-DD` and wind headings as sixteen point compass labels.

pub mod clock;
pub mod compass;
pub mod date;

pub use clock::{Clock, FixedClock, SystemClock, ZonedClock};
pub use compass::{COMPASS_POINTS, UNKNOWN_DIRECTION, deg_to_compass, parse_heading};
pub use date::{format_date, format_instant, to_local_yyyymmdd, today};
