pub mod config;
pub mod government;
pub mod journal;
pub mod settlement_map;
pub mod sim_resources;

pub use config::EconomyConfig;
pub use government::GovernmentInfluence;
pub use journal::{EconomyJournal, JournalEntry};
pub use settlement_map::SettlementMap;
pub use sim_resources::{EconomyRng, EcsIdGenerator, SimRng, distribute_rng};
