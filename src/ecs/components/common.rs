use bevy_ecs::component::Component;

use crate::ecs::time::SimTime;
use crate::model::SettlementId;

/// Identity component present on every village entity.
#[derive(Component, Debug, Clone)]
pub struct Village {
    pub id: SettlementId,
    pub name: String,
    pub founded: Option<SimTime>,
}
