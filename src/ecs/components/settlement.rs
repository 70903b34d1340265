use bevy_ecs::component::Component;

use crate::model::{EconomyState, TownHallEffect};

/// Raw economy state of a village. Replaced wholesale on every transition.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct VillageEconomy(pub EconomyState);

/// Town hall decree currently in force for a village.
///
/// Removed by the economy the first time it is observed past expiry.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct TownHallDecree(pub TownHallEffect);
