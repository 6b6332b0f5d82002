use jiff::{Timestamp, Zoned, tz::TimeZone};

/// Source of the current instant used when a formatter is not handed one.
pub trait Clock: Send + Sync {
    fn now(&self) -> Zoned;
}

/// The process clock, read in the system time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Zoned {
        Zoned::now()
    }
}

/// The process clock, read in a chosen time zone instead of the system one.
#[derive(Debug, Clone)]
pub struct ZonedClock {
    time_zone: TimeZone,
}

impl ZonedClock {
    pub fn new(time_zone: TimeZone) -> Self {
        Self { time_zone }
    }

    /// Looks the zone up in the time zone database, e.g. `Europe/Madrid`.
    pub fn from_name(name: &str) -> Result<Self, jiff::Error> {
        TimeZone::get(name).map(Self::new)
    }

    pub fn time_zone(&self) -> &TimeZone {
        &self.time_zone
    }
}

impl Clock for ZonedClock {
    fn now(&self) -> Zoned {
        Timestamp::now().to_zoned(self.time_zone.clone())
    }
}

/// Always answers with the same instant.
#[derive(Debug, Clone)]
pub struct FixedClock {
    instant: Zoned,
}

impl FixedClock {
    pub fn new(instant: Zoned) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Zoned {
        self.instant.clone()
    }
}
