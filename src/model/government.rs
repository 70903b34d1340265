use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::settlement::SettlementId;
use crate::error::ProviderError;

/// Largest magnitude a government modifier may have.
pub const MAX_GOVERNMENT_MODIFIER: f64 = 0.3;

/// Government influence on one settlement.
///
/// "No data" is modelled as `Option::None` at the call sites, so a present
/// effect with zero modifiers is distinct from an absent one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GovernmentEffect {
    pub prosperity_modifier: f64,
    pub safety_modifier: f64,
}

impl GovernmentEffect {
    /// Modifiers are forced into [-0.3, 0.3]; non-finite values become 0.
    pub fn new(prosperity_modifier: f64, safety_modifier: f64) -> Self {
        Self {
            prosperity_modifier: bound_modifier(prosperity_modifier),
            safety_modifier: bound_modifier(safety_modifier),
        }
    }

    /// Re-apply the bounds, for effects built by struct literal or deserialized.
    pub fn sanitized(self) -> Self {
        Self::new(self.prosperity_modifier, self.safety_modifier)
    }
}

fn bound_modifier(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(-MAX_GOVERNMENT_MODIFIER, MAX_GOVERNMENT_MODIFIER)
    } else {
        0.0
    }
}

/// Source of per-settlement government influence.
///
/// Implementations may fail; the economy treats any failure as "no data".
pub trait GovernmentEffectProvider {
    fn village_effect(
        &self,
        settlement: SettlementId,
    ) -> Result<Option<GovernmentEffect>, ProviderError>;
}

/// Provider for a world with no government module wired in.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGovernment;

impl GovernmentEffectProvider for NoGovernment {
    fn village_effect(
        &self,
        _settlement: SettlementId,
    ) -> Result<Option<GovernmentEffect>, ProviderError> {
        Ok(None)
    }
}

/// Fixed table of effects keyed by settlement.
#[derive(Debug, Clone, Default)]
pub struct StaticGovernment {
    effects: BTreeMap<SettlementId, GovernmentEffect>,
}

impl StaticGovernment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_effect(mut self, settlement: SettlementId, effect: GovernmentEffect) -> Self {
        self.set(settlement, effect);
        self
    }

    pub fn set(&mut self, settlement: SettlementId, effect: GovernmentEffect) {
        self.effects.insert(settlement, effect.sanitized());
    }

    pub fn clear(&mut self, settlement: SettlementId) {
        self.effects.remove(&settlement);
    }
}

impl GovernmentEffectProvider for StaticGovernment {
    fn village_effect(
        &self,
        settlement: SettlementId,
    ) -> Result<Option<GovernmentEffect>, ProviderError> {
        Ok(self.effects.get(&settlement).copied())
    }
}
