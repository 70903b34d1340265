use serde::{Deserialize, Serialize};

use super::decree::DecreeNudge;
use super::tier::TierId;

pub const METRIC_MIN: i32 = 0;
pub const METRIC_MAX: i32 = 100;

pub const DEFAULT_PROSPERITY: i32 = 50;
pub const DEFAULT_SECURITY: i32 = 40;
pub const DEFAULT_TRADE: i32 = 50;

/// Raw, persisted economy metrics for one settlement.
///
/// Values are the un-adjusted ones; government influence is applied only at
/// read time. `tier_id` classifies the raw prosperity and is advisory: pricing
/// always re-derives the effective tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EconomyState {
    pub tier_id: TierId,
    pub prosperity: i32,
    pub security: i32,
    pub trade: i32,
    /// Absolute day the daily drift was last applied. `None` before the first tick.
    #[serde(default)]
    pub last_day_updated: Option<u32>,
    #[serde(default)]
    pub last_decree_nudge: Option<DecreeNudge>,
}

impl EconomyState {
    /// Build a state from raw metrics, clamping each and classifying the tier.
    pub fn with_metrics(prosperity: i32, security: i32, trade: i32) -> Self {
        let prosperity = prosperity.clamp(METRIC_MIN, METRIC_MAX);
        Self {
            tier_id: TierId::classify(prosperity),
            prosperity,
            security: security.clamp(METRIC_MIN, METRIC_MAX),
            trade: trade.clamp(METRIC_MIN, METRIC_MAX),
            last_day_updated: None,
            last_decree_nudge: None,
        }
    }

    /// Re-derive the cached tier from raw prosperity.
    pub fn recompute_tier(&mut self) {
        self.tier_id = TierId::classify(self.prosperity);
    }

    pub fn metrics_in_range(&self) -> bool {
        [self.prosperity, self.security, self.trade]
            .iter()
            .all(|v| (METRIC_MIN..=METRIC_MAX).contains(v))
    }
}

impl Default for EconomyState {
    fn default() -> Self {
        Self {
            tier_id: TierId::Stable,
            prosperity: DEFAULT_PROSPERITY,
            security: DEFAULT_SECURITY,
            trade: DEFAULT_TRADE,
            last_day_updated: None,
            last_decree_nudge: None,
        }
    }
}
