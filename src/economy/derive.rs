use serde::Serialize;

use super::numeric::{clamp_metric, round_half_up};
use crate::model::{
    EconomyState, GovernmentEffect, GovernmentEffectProvider, SettlementId, Tier, TierId,
};

/// Share of the prosperity modifier that reaches trade.
pub const TRADE_DAMPING: f64 = 0.7;

/// Government-adjusted, read-time view of a settlement's economy.
///
/// This is what every other system sees. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EffectiveSummary {
    pub prosperity: i32,
    pub security: i32,
    pub trade: i32,
    pub tier_id: TierId,
    pub tier: &'static Tier,
    pub last_day_updated: Option<u32>,
    pub gov_influence: Option<GovernmentEffect>,
}

/// Derive effective metrics and tier from raw state plus optional government influence.
pub fn derive_summary(
    state: &EconomyState,
    government: Option<&GovernmentEffect>,
) -> EffectiveSummary {
    let (prosperity, security, trade) = match government {
        Some(gov) => {
            let gov = gov.sanitized();
            let p_mod = gov.prosperity_modifier;
            let s_mod = gov.safety_modifier;
            let (p, s, t) = (
                state.prosperity as f64,
                state.security as f64,
                state.trade as f64,
            );
            (
                clamp_metric(p + round_half_up(p * p_mod)),
                clamp_metric(s + round_half_up(s * s_mod)),
                clamp_metric(t + round_half_up(t * p_mod * TRADE_DAMPING)),
            )
        }
        None => (state.prosperity, state.security, state.trade),
    };

    let tier_id = TierId::classify(prosperity);
    EffectiveSummary {
        prosperity,
        security,
        trade,
        tier_id,
        tier: tier_id.tier(),
        last_day_updated: state.last_day_updated,
        gov_influence: government.map(|g| g.sanitized()),
    }
}

/// Ask the provider for a settlement's government effect.
///
/// Any provider failure is treated as "no data".
pub fn lookup_government(
    provider: &dyn GovernmentEffectProvider,
    settlement: SettlementId,
) -> Option<GovernmentEffect> {
    match provider.village_effect(settlement) {
        Ok(effect) => effect.map(GovernmentEffect::sanitized),
        Err(err) => {
            tracing::debug!(%settlement, error = %err, "government lookup failed, using raw economy");
            None
        }
    }
}
