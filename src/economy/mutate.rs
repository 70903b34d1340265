//! The three economy state transitions.
//!
//! Each is a pure `(state, payload) -> Transition`. A no-op returns the input
//! state unchanged and no event.

use rand::Rng;

use super::decree::active_decree;
use super::numeric::{clamp_metric, finite_or_zero, round_delta};
use crate::model::{
    Area, DecreeNudge, EconomyEvent, EconomyState, Enemy, MetricDeltas, PurchaseContext,
    TownHallEffect,
};

// ---------------------------------------------------------------------------
// Constants: Day tick
// ---------------------------------------------------------------------------

/// Centre of the uniform draw; below 0.5 biases drift upward.
const DRIFT_BIAS: f64 = 0.45;
const DRIFT_SCALE: f64 = 6.0;

// ---------------------------------------------------------------------------
// Constants: Battle
// ---------------------------------------------------------------------------

const BOSS_SECURITY_BONUS: i32 = 8;
const ENEMY_SECURITY_BONUS: i32 = 2;
const BATTLE_PROSPERITY_FACTOR: f64 = 0.6;

// ---------------------------------------------------------------------------
// Constants: Purchase
// ---------------------------------------------------------------------------

const GOLD_PER_TRADE_POINT: f64 = 20.0;
const GOLD_PER_PROSPERITY_POINT: f64 = 25.0;
const MAX_PURCHASE_TRADE_DELTA: f64 = 5.0;
const MAX_PURCHASE_PROSPERITY_DELTA: f64 = 4.0;

/// Result of applying one transition.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: EconomyState,
    /// `None` when the transition was a no-op.
    pub event: Option<EconomyEvent>,
}

impl Transition {
    fn unchanged(state: &EconomyState) -> Self {
        Self {
            state: state.clone(),
            event: None,
        }
    }

    pub fn is_noop(&self) -> bool {
        self.event.is_none()
    }
}

/// Apply the once-per-day drift and any active decree deltas.
///
/// A second call for the same `absolute_day` is a no-op.
pub fn handle_day_tick<R: Rng + ?Sized>(
    state: &EconomyState,
    absolute_day: u32,
    decree: Option<&TownHallEffect>,
    rng: &mut R,
) -> Transition {
    if state.last_day_updated == Some(absolute_day) {
        tracing::debug!(day = absolute_day, "economy already ticked today");
        return Transition::unchanged(state);
    }

    let drift = (rng.random::<f64>() - DRIFT_BIAS) * DRIFT_SCALE;
    let drifted = clamp_metric(state.prosperity as f64 + drift);

    let active = active_decree(decree, absolute_day);
    let deltas = active
        .map(|d| MetricDeltas {
            prosperity: round_delta(d.econ_prosperity_delta),
            trade: round_delta(d.econ_trade_delta),
            security: round_delta(d.econ_security_delta),
        })
        .unwrap_or_default();
    let decree_nudge = active
        .filter(|_| !deltas.is_zero())
        .map(|d| DecreeNudge {
            day: absolute_day,
            decree_id: d.decree_id.clone(),
            deltas,
        });

    let mut next = state.clone();
    next.prosperity = clamp_metric(drifted as f64 + deltas.prosperity as f64);
    next.trade = clamp_metric(state.trade as f64 + deltas.trade as f64);
    next.security = clamp_metric(state.security as f64 + deltas.security as f64);
    next.last_day_updated = Some(absolute_day);
    if decree_nudge.is_some() {
        next.last_decree_nudge = decree_nudge.clone();
    }
    next.recompute_tier();

    tracing::trace!(
        day = absolute_day,
        drift,
        prosperity = next.prosperity,
        tier = %next.tier_id,
        "economy day tick"
    );

    let event = EconomyEvent::DayTicked {
        day: absolute_day,
        prosperity: next.prosperity,
        tier_id: next.tier_id,
        decree_nudge,
    };
    Transition {
        state: next,
        event: Some(event),
    }
}

/// Killing monsters on the trade routes makes them safer.
pub fn handle_after_battle(state: &EconomyState, enemy: &Enemy, area: &Area) -> Transition {
    if !area.is_dangerous_route() {
        return Transition::unchanged(state);
    }

    let bonus = if enemy.is_boss {
        BOSS_SECURITY_BONUS
    } else {
        ENEMY_SECURITY_BONUS
    };
    let prosperity_delta = bonus as f64 * BATTLE_PROSPERITY_FACTOR;

    let mut next = state.clone();
    next.security = clamp_metric((state.security + bonus) as f64);
    next.prosperity = clamp_metric(state.prosperity as f64 + prosperity_delta);
    next.recompute_tier();

    tracing::trace!(%area, boss = enemy.is_boss, security = next.security, "economy after battle");

    let event = EconomyEvent::AfterBattle {
        enemy: enemy.clone(),
        area: area.clone(),
        security_delta: bonus,
        prosperity_delta,
        new_tier_id: next.tier_id,
    };
    Transition {
        state: next,
        event: Some(event),
    }
}

/// Spending coin with village merchants feeds local trade and prosperity.
///
/// Wandering merchants take the coin away, so they leave the economy alone.
pub fn handle_after_purchase(
    state: &EconomyState,
    gold_spent: f64,
    context: PurchaseContext,
) -> Transition {
    let gold_spent = finite_or_zero(gold_spent);
    if gold_spent <= 0.0 || context != PurchaseContext::Village {
        return Transition::unchanged(state);
    }

    let trade_delta = (gold_spent / GOLD_PER_TRADE_POINT).min(MAX_PURCHASE_TRADE_DELTA);
    let prosperity_delta =
        (gold_spent / GOLD_PER_PROSPERITY_POINT).min(MAX_PURCHASE_PROSPERITY_DELTA);

    let mut next = state.clone();
    next.trade = clamp_metric(state.trade as f64 + trade_delta);
    next.prosperity = clamp_metric(state.prosperity as f64 + prosperity_delta);
    next.recompute_tier();

    tracing::trace!(gold_spent, trade = next.trade, prosperity = next.prosperity, "economy after purchase");

    let event = EconomyEvent::AfterPurchase {
        gold_spent,
        context,
        trade_delta,
        prosperity_delta,
        new_tier_id: next.tier_id,
    };
    Transition {
        state: next,
        event: Some(event),
    }
}
