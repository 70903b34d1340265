use std::fmt;

// Calendar constants.
pub const MINUTES_PER_HOUR: u32 = 60;
pub const HOURS_PER_DAY: u32 = 24;
pub const DAYS_PER_YEAR: u32 = 360;

pub const MINUTES_PER_DAY: u32 = MINUTES_PER_HOUR * HOURS_PER_DAY; // 1,440
pub const MINUTES_PER_YEAR: u32 = MINUTES_PER_DAY * DAYS_PER_YEAR; // 518,400

/// Simulation time as total elapsed minutes since day 0.
///
/// The economy only cares about whole days: `absolute_day()` is the day index
/// handed to day ticks and rest-cost quotes. Natural `u32` ordering equals
/// chronological ordering.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SimTime(u32);

impl SimTime {
    /// Create from a raw minute count.
    pub fn from_minutes(minutes: u32) -> Self {
        Self(minutes)
    }

    /// Last day whose midnight fits in the minute counter.
    pub const MAX_DAY: u32 = u32::MAX / MINUTES_PER_DAY;

    /// Midnight at the start of an absolute day. Days past `MAX_DAY` saturate
    /// to it.
    pub fn from_day(absolute_day: u32) -> Self {
        Self(absolute_day.min(Self::MAX_DAY) * MINUTES_PER_DAY)
    }

    /// Year, day-of-year (1–360), hour (0–23), minute (0–59).
    pub fn new(year: u32, day: u32, hour: u32, minute: u32) -> Self {
        debug_assert!(
            (1..=DAYS_PER_YEAR).contains(&day),
            "day out of range: {day}"
        );
        debug_assert!(hour < HOURS_PER_DAY, "hour out of range: {hour}");
        debug_assert!(minute < MINUTES_PER_HOUR, "minute out of range: {minute}");
        Self(
            year * MINUTES_PER_YEAR
                + (day - 1) * MINUTES_PER_DAY
                + hour * MINUTES_PER_HOUR
                + minute,
        )
    }

    pub fn as_minutes(self) -> u32 {
        self.0
    }

    /// Whole days elapsed since day 0.
    pub fn absolute_day(self) -> u32 {
        self.0 / MINUTES_PER_DAY
    }

    pub fn year(self) -> u32 {
        self.0 / MINUTES_PER_YEAR
    }

    /// Day of year (1–360).
    pub fn day(self) -> u32 {
        (self.0 % MINUTES_PER_YEAR) / MINUTES_PER_DAY + 1
    }

    /// Hour of day (0–23).
    pub fn hour(self) -> u32 {
        (self.0 % MINUTES_PER_DAY) / MINUTES_PER_HOUR
    }

    /// Minute of hour (0–59).
    pub fn minute(self) -> u32 {
        self.0 % MINUTES_PER_HOUR
    }

    /// True at the first minute of a day.
    pub fn is_day_start(self) -> bool {
        self.0.is_multiple_of(MINUTES_PER_DAY)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Y{}.D{} {:02}:{:02}",
            self.year(),
            self.day(),
            self.hour(),
            self.minute()
        )
    }
}
