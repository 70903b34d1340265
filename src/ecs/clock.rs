use bevy_ecs::resource::Resource;
use bevy_ecs::system::ResMut;

use super::time::SimTime;

/// Simulation clock resource tracking the current time and tick count.
///
/// Advances by one minute per tick. `advance_clock` runs at the end of each
/// tick (in `SimPhase::Last`), so systems see the current time before it
/// moves on.
#[derive(Resource, Debug)]
pub struct SimClock {
    pub time: SimTime,
    pub tick_count: u64,
}

impl SimClock {
    /// Start at midnight of `start_day`.
    pub fn new(start_day: u32) -> Self {
        Self {
            time: SimTime::from_day(start_day),
            tick_count: 0,
        }
    }

    /// The absolute day index used for ticks and rest-cost quotes.
    pub fn today(&self) -> u32 {
        self.time.absolute_day()
    }

    /// Advance the clock by one minute. Stops at the end of the minute range.
    pub fn advance(&mut self) {
        self.time = SimTime::from_minutes(self.time.as_minutes().saturating_add(1));
        self.tick_count += 1;
    }
}

/// Bevy system that advances the simulation clock by one minute.
pub fn advance_clock(mut clock: ResMut<SimClock>) {
    clock.advance();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::time::MINUTES_PER_DAY;

    #[test]
    fn new_clock_starts_at_midnight() {
        let clock = SimClock::new(12);
        assert_eq!(clock.today(), 12);
        assert_eq!(clock.time.hour(), 0);
        assert_eq!(clock.time.minute(), 0);
        assert_eq!(clock.tick_count, 0);
    }

    #[test]
    fn advance_increments_minute() {
        let mut clock = SimClock::new(0);
        clock.advance();
        assert_eq!(clock.time.minute(), 1);
        assert_eq!(clock.tick_count, 1);
        assert_eq!(clock.today(), 0);
    }

    #[test]
    fn clock_at_end_of_range_keeps_running() {
        let mut clock = SimClock::new(u32::MAX);
        assert_eq!(clock.today(), SimTime::MAX_DAY);
        clock.time = SimTime::from_minutes(u32::MAX);
        clock.advance();
        assert_eq!(clock.time.as_minutes(), u32::MAX);
        assert_eq!(clock.tick_count, 1);
    }

    #[test]
    fn advance_rolls_over_day() {
        let mut clock = SimClock::new(4);
        for _ in 0..MINUTES_PER_DAY {
            clock.advance();
        }
        assert_eq!(clock.today(), 5);
        assert!(clock.time.is_day_start());
    }
}
