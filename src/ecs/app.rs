use bevy_app::App;
use bevy_ecs::message::MessageRegistry;
use bevy_ecs::schedule::{ExecutorKind, IntoScheduleConfigs};

use super::clock::SimClock;
use super::commands::EconomyCommand;
use super::events::EconomyNotice;
use super::resources::{
    EconomyConfig, EconomyJournal, EconomyRng, EcsIdGenerator, GovernmentInfluence, SettlementMap,
    SimRng, distribute_rng,
};
use super::schedule::{SimPhase, configure_sim_schedule};
use super::systems::economy::EconomyPlugin;
use super::time::SimTime;

/// Build a headless economy app starting at midnight of `start_day`.
///
/// Manual tick control:
/// ```no_run
/// # use village_economy::ecs::{build_economy_app, SimTick};
/// let mut app = build_economy_app(0);
/// for _ in 0..1_440 {  // one day of minute-level ticks
///     app.world_mut().run_schedule(SimTick);
/// }
/// ```
pub fn build_economy_app(start_day: u32) -> App {
    build_economy_app_seeded(start_day, 42)
}

pub fn build_economy_app_seeded(start_day: u32, seed: u64) -> App {
    build_economy_app_from_config(EconomyConfig {
        seed,
        start_day,
        ..EconomyConfig::default()
    })
}

/// Build from a full configuration, single-threaded.
pub fn build_economy_app_from_config(config: EconomyConfig) -> App {
    build_economy_app_with_executor(config, ExecutorKind::SingleThreaded)
}

/// Build with a specific executor kind. Drift is reproducible under either
/// executor, since only the applicator draws from `EconomyRng`.
pub fn build_economy_app_with_executor(mut config: EconomyConfig, executor: ExecutorKind) -> App {
    if config.start_day > SimTime::MAX_DAY {
        tracing::warn!(
            start_day = config.start_day,
            max_day = SimTime::MAX_DAY,
            "start day out of clock range, clamping"
        );
        config.start_day = SimTime::MAX_DAY;
    }

    let mut app = App::empty();

    app.insert_resource(SimClock::new(config.start_day));
    app.insert_resource(SimRng::seeded(config.seed));
    app.insert_resource(EconomyJournal::new());
    app.insert_resource(EcsIdGenerator::default());
    app.insert_resource(SettlementMap::new());
    app.init_resource::<EconomyRng>();
    app.init_resource::<GovernmentInfluence>();
    app.insert_resource(config);

    MessageRegistry::register_message::<EconomyCommand>(app.world_mut());
    MessageRegistry::register_message::<EconomyNotice>(app.world_mut());

    let mut schedule = configure_sim_schedule(executor);
    schedule.add_systems(bevy_ecs::message::message_update_system.in_set(SimPhase::PreUpdate));
    schedule.add_systems(
        distribute_rng
            .in_set(SimPhase::PreUpdate)
            .after(bevy_ecs::message::message_update_system),
    );
    app.add_schedule(schedule);
    app.add_plugins(EconomyPlugin);
    app
}
