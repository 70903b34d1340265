use bevy_ecs::system::Res;

use super::clock::SimClock;
use super::time::SimTime;

// Internal check function for testability.

fn daily_check(time: SimTime) -> bool {
    time.is_day_start()
}

// Bevy run condition (for use with `.run_if()`).

pub fn daily(clock: Res<SimClock>) -> bool {
    daily_check(clock.time)
}
