pub mod applicator;

use bevy_ecs::message::Message;

use crate::model::{Area, Enemy, PurchaseContext, SettlementId};

pub use applicator::apply_economy_commands;

/// An economy input, written by the host or by the daily clock system.
///
/// The applicator in `SimPhase::Update` drains these in write order, runs the
/// matching transition, records a journal entry and writes an
/// [`EconomyNotice`](crate::ecs::events::EconomyNotice) for every transition
/// that changed something.
#[derive(Message, Clone, Debug, PartialEq)]
pub enum EconomyCommand {
    /// A new day began. Applies to every village.
    DayChanged { absolute_day: u32 },
    /// Combat won in or near a village.
    BattleWon {
        settlement: SettlementId,
        enemy: Enemy,
        area: Area,
    },
    /// Gold spent at a merchant.
    Purchase {
        settlement: SettlementId,
        gold_spent: f64,
        context: PurchaseContext,
    },
}

impl EconomyCommand {
    pub fn day_changed(absolute_day: u32) -> Self {
        Self::DayChanged { absolute_day }
    }

    pub fn battle_won(settlement: SettlementId, enemy: Enemy, area: impl Into<Area>) -> Self {
        Self::BattleWon {
            settlement,
            enemy,
            area: area.into(),
        }
    }

    pub fn purchase(settlement: SettlementId, gold_spent: f64, context: PurchaseContext) -> Self {
        Self::Purchase {
            settlement,
            gold_spent,
            context,
        }
    }
}
