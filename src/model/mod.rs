#[macro_use]
mod macros;

pub mod context;
pub mod decree;
pub mod event;
pub mod government;
pub mod settlement;
pub mod state;
pub mod tier;

pub use context::{Area, Enemy, PurchaseContext};
pub use decree::{DecreeNudge, MetricDeltas, TownHallEffect};
pub use event::EconomyEvent;
pub use government::{
    GovernmentEffect, GovernmentEffectProvider, NoGovernment, StaticGovernment,
};
pub use settlement::SettlementId;
pub use state::EconomyState;
pub use tier::{ECONOMY_TIERS, Tier, TierId};
