use serde::{Deserialize, Serialize};

/// A time-boxed town hall decree affecting rest prices and daily metric drift.
///
/// Written by the government subsystem. The economy only reads it, and drops
/// it the first time it sees it past `expires_on_day`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TownHallEffect {
    pub decree_id: String,
    /// Last absolute day on which the decree applies (inclusive).
    pub expires_on_day: u32,
    #[serde(default)]
    pub rest_cost_multiplier: Option<f64>,
    #[serde(default)]
    pub econ_prosperity_delta: Option<f64>,
    #[serde(default)]
    pub econ_trade_delta: Option<f64>,
    #[serde(default)]
    pub econ_security_delta: Option<f64>,
}

impl TownHallEffect {
    pub fn new(decree_id: impl Into<String>, expires_on_day: u32) -> Self {
        Self {
            decree_id: decree_id.into(),
            expires_on_day,
            rest_cost_multiplier: None,
            econ_prosperity_delta: None,
            econ_trade_delta: None,
            econ_security_delta: None,
        }
    }

    pub fn with_rest_cost_multiplier(mut self, multiplier: f64) -> Self {
        self.rest_cost_multiplier = Some(multiplier);
        self
    }

    pub fn with_deltas(mut self, prosperity: f64, trade: f64, security: f64) -> Self {
        self.econ_prosperity_delta = Some(prosperity);
        self.econ_trade_delta = Some(trade);
        self.econ_security_delta = Some(security);
        self
    }

    pub fn is_active(&self, today: u32) -> bool {
        today <= self.expires_on_day
    }

    pub fn is_expired(&self, today: u32) -> bool {
        today > self.expires_on_day
    }
}

/// Integer metric deltas applied by a decree on one day tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricDeltas {
    pub prosperity: i32,
    pub trade: i32,
    pub security: i32,
}

impl MetricDeltas {
    pub fn is_zero(&self) -> bool {
        self.prosperity == 0 && self.trade == 0 && self.security == 0
    }
}

/// Audit record of the last decree nudge applied by a day tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecreeNudge {
    pub day: u32,
    pub decree_id: String,
    pub deltas: MetricDeltas,
}
