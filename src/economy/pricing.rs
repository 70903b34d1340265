use super::decree::{DecreeStatus, observe_decree};
use super::derive::{EffectiveSummary, derive_summary};
use super::numeric::{finite_or_zero, round_half_up};
use crate::model::{EconomyState, GovernmentEffect, PurchaseContext, TownHallEffect};

/// Flat markup wandering merchants add on top of the tier multiplier.
pub const WANDERING_MARKUP: f64 = 0.1;
/// No item is ever cheaper than this.
pub const MIN_MERCHANT_PRICE: u32 = 1;

/// Shop price for an item given the effective tier and merchant kind.
pub fn merchant_price(base_price: f64, summary: &EffectiveSummary, context: PurchaseContext) -> u32 {
    let base_price = finite_or_zero(base_price).max(0.0);
    let mut multiplier = summary.tier.merchant_price_multiplier;
    if context == PurchaseContext::Wandering {
        multiplier += WANDERING_MARKUP;
    }
    to_price(base_price * multiplier).max(MIN_MERCHANT_PRICE)
}

/// Tavern rest cost for the effective tier, adjusted by an active decree.
///
/// Drops the decree from `decree` if it is past expiry.
pub fn rest_cost(summary: &EffectiveSummary, decree: &mut Option<TownHallEffect>, today: u32) -> u32 {
    let base = summary.tier.rest_cost_base;
    match observe_decree(decree, today) {
        DecreeStatus::Active(d) => match d.rest_cost_multiplier {
            Some(multiplier) if multiplier.is_finite() => to_price(base as f64 * multiplier),
            _ => base,
        },
        DecreeStatus::Absent | DecreeStatus::Expired(_) => base,
    }
}

/// [`merchant_price`] straight from raw state.
pub fn get_merchant_price(
    base_price: f64,
    state: &EconomyState,
    government: Option<&GovernmentEffect>,
    context: PurchaseContext,
) -> u32 {
    merchant_price(base_price, &derive_summary(state, government), context)
}

/// [`rest_cost`] straight from raw state.
pub fn get_rest_cost(
    state: &EconomyState,
    government: Option<&GovernmentEffect>,
    decree: &mut Option<TownHallEffect>,
    today: u32,
) -> u32 {
    rest_cost(&derive_summary(state, government), decree, today)
}

fn to_price(value: f64) -> u32 {
    let rounded = round_half_up(finite_or_zero(value));
    if rounded <= 0.0 {
        0
    } else if rounded >= u32::MAX as f64 {
        u32::MAX
    } else {
        rounded as u32
    }
}
