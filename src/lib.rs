//! Village economy: per-settlement prosperity, security and trade, the tier
//! they imply, and the prices a village charges.
//!
//! [`economy`] holds the pure rules, [`service::EconomyService`] wraps them for
//! a single settlement, and [`ecs`] runs them inside a bevy world.

pub mod economy;
pub mod ecs;
pub mod error;
pub mod flush;
pub mod id;
pub mod model;
pub mod service;

pub use economy::EffectiveSummary;
pub use error::{ProviderError, UnknownVariantError};
pub use id::IdGenerator;
pub use model::{
    Area, ECONOMY_TIERS, EconomyEvent, EconomyState, Enemy, GovernmentEffect,
    GovernmentEffectProvider, NoGovernment, PurchaseContext, SettlementId, StaticGovernment, Tier,
    TierId, TownHallEffect,
};
pub use service::EconomyService;
