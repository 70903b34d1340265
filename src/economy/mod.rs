//! Pure economy logic: derivation, transitions, decree reading and pricing.
//!
//! Nothing here owns state; callers pass the settlement's raw state in and
//! store whatever comes back.

pub mod decree;
pub mod derive;
pub mod mutate;
pub mod numeric;
pub mod pricing;

pub use decree::{DecreeStatus, active_decree, observe_decree};
pub use derive::{EffectiveSummary, derive_summary, lookup_government};
pub use mutate::{Transition, handle_after_battle, handle_after_purchase, handle_day_tick};
pub use pricing::{get_merchant_price, get_rest_cost, merchant_price, rest_cost};
