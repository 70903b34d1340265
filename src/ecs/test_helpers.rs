use bevy_app::App;

use crate::ecs::clock::SimClock;
use crate::ecs::schedule::SimTick;
use crate::ecs::time::MINUTES_PER_DAY;

/// Run `n` minute-ticks.
pub fn tick_minutes(app: &mut App, n: u32) {
    for _ in 0..n {
        app.world_mut().run_schedule(SimTick);
    }
}

/// Run `n` full days worth of minute-ticks.
pub fn tick_days(app: &mut App, n: u32) {
    tick_minutes(app, n * MINUTES_PER_DAY);
}

/// Current absolute day from the clock resource.
pub fn current_day(app: &App) -> u32 {
    app.world().resource::<SimClock>().today()
}
