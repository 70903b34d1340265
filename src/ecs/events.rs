use bevy_ecs::entity::Entity;
use bevy_ecs::message::Message;

use crate::model::{EconomyEvent, SettlementId};

/// Written by the command applicator once per applied economy transition.
///
/// Hosts read these the way they would subscribe to `village:economy*`
/// events; `event.name()` gives the stable event name.
#[derive(Message, Clone, Debug, PartialEq)]
pub struct EconomyNotice {
    pub settlement: Entity,
    pub settlement_id: SettlementId,
    pub event: EconomyEvent,
}
