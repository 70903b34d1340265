use serde::{Deserialize, Serialize};

use super::context::{Area, Enemy, PurchaseContext};
use super::decree::DecreeNudge;
use super::tier::TierId;

/// Domain event emitted once per applied (non no-op) economy transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EconomyEvent {
    DayTicked {
        day: u32,
        prosperity: i32,
        tier_id: TierId,
        decree_nudge: Option<DecreeNudge>,
    },
    AfterBattle {
        enemy: Enemy,
        area: Area,
        security_delta: i32,
        prosperity_delta: f64,
        new_tier_id: TierId,
    },
    AfterPurchase {
        gold_spent: f64,
        context: PurchaseContext,
        trade_delta: f64,
        prosperity_delta: f64,
        new_tier_id: TierId,
    },
}

impl EconomyEvent {
    /// Stable name used by the journal and host event buses.
    pub fn name(&self) -> &'static str {
        match self {
            EconomyEvent::DayTicked { .. } => "village:economyTick",
            EconomyEvent::AfterBattle { .. } => "village:economyAfterBattle",
            EconomyEvent::AfterPurchase { .. } => "village:economyAfterPurchase",
        }
    }

    /// One-line human readable summary.
    pub fn describe(&self) -> String {
        match self {
            EconomyEvent::DayTicked {
                day,
                prosperity,
                tier_id,
                decree_nudge,
            } => match decree_nudge {
                Some(nudge) => format!(
                    "Day {day}: prosperity {prosperity} ({tier_id}), decree {} applied",
                    nudge.decree_id
                ),
                None => format!("Day {day}: prosperity {prosperity} ({tier_id})"),
            },
            EconomyEvent::AfterBattle {
                enemy,
                area,
                security_delta,
                new_tier_id,
                ..
            } => {
                let foe = if enemy.name.is_empty() {
                    "a monster"
                } else {
                    enemy.name.as_str()
                };
                format!("Slaying {foe} in the {area} raised security by {security_delta} ({new_tier_id})")
            }
            EconomyEvent::AfterPurchase {
                gold_spent,
                context,
                new_tier_id,
                ..
            } => format!("Spent {gold_spent} gold at a {context} merchant ({new_tier_id})"),
        }
    }
}
