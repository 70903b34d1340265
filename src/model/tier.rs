use serde::{Deserialize, Serialize};

/// Prosperity strictly below this is `Struggling`.
pub const STRUGGLING_BELOW: i32 = 35;
/// Prosperity strictly above this is `Thriving`.
pub const THRIVING_ABOVE: i32 = 70;

/// Discrete economic classification of a settlement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum TierId {
    Struggling,
    #[default]
    Stable,
    Thriving,
}

string_enum!(TierId, "economy tier", {
    Struggling => "struggling",
    Stable => "stable",
    Thriving => "thriving",
});

impl TierId {
    /// Classify a prosperity value. Used for both raw and effective prosperity.
    pub fn classify(prosperity: i32) -> Self {
        if prosperity < STRUGGLING_BELOW {
            TierId::Struggling
        } else if prosperity > THRIVING_ABOVE {
            TierId::Thriving
        } else {
            TierId::Stable
        }
    }

    pub fn tier(self) -> &'static Tier {
        match self {
            TierId::Struggling => &ECONOMY_TIERS[0],
            TierId::Stable => &ECONOMY_TIERS[1],
            TierId::Thriving => &ECONOMY_TIERS[2],
        }
    }
}

/// Pricing parameters attached to a tier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tier {
    pub id: TierId,
    pub name: &'static str,
    pub merchant_price_multiplier: f64,
    pub rest_cost_base: u32,
    /// Display only.
    pub price_descriptor: &'static str,
    pub description: &'static str,
}

/// Ordered from poorest to richest.
pub static ECONOMY_TIERS: [Tier; 3] = [
    Tier {
        id: TierId::Struggling,
        name: "Struggling",
        merchant_price_multiplier: 1.2,
        rest_cost_base: 18,
        price_descriptor: "a bit steep",
        description: "Coin is tight and goods are scarce.",
    },
    Tier {
        id: TierId::Stable,
        name: "Stable",
        merchant_price_multiplier: 1.0,
        rest_cost_base: 15,
        price_descriptor: "about normal",
        description: "Trade flows steadily and people get by.",
    },
    Tier {
        id: TierId::Thriving,
        name: "Thriving",
        merchant_price_multiplier: 0.9,
        rest_cost_base: 12,
        price_descriptor: "surprisingly fair",
        description: "Caravans are constant and the market hums.",
    },
];
