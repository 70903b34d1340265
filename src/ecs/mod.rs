//! Bevy ECS integration: villages as entities, economy inputs as messages,
//! and a minute-resolution clock that drives the daily tick.

pub mod app;
pub mod clock;
pub mod commands;
pub mod components;
pub mod conditions;
pub mod events;
pub mod queries;
pub mod resources;
pub mod schedule;
pub mod spawn;
pub mod systems;
pub mod test_helpers;
pub mod time;

pub use app::{
    build_economy_app, build_economy_app_from_config, build_economy_app_seeded,
    build_economy_app_with_executor,
};
pub use clock::SimClock;
pub use commands::EconomyCommand;
pub use components::{TownHallDecree, Village, VillageEconomy};
pub use conditions::daily;
pub use events::EconomyNotice;
pub use queries::{
    economy_summary, merchant_price, rest_cost, rest_cost_on, village_snapshots, village_tiers,
};
pub use resources::{
    EconomyConfig, EconomyJournal, EconomyRng, EcsIdGenerator, GovernmentInfluence, JournalEntry,
    SettlementMap, SimRng,
};
pub use schedule::{SimPhase, SimTick, configure_sim_schedule};
pub use spawn::spawn_village;
pub use systems::EconomyPlugin;
pub use time::SimTime;
