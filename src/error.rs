use thiserror::Error;

use crate::model::SettlementId;

/// Failure reported by a [`GovernmentEffectProvider`](crate::model::GovernmentEffectProvider).
///
/// Never surfaced past the economy: lookups degrade to "no data".
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProviderError {
    #[error("government module unavailable")]
    Unavailable,
    #[error("government rejected lookup for settlement {settlement}: {reason}")]
    Rejected {
        settlement: SettlementId,
        reason: String,
    },
}

/// A string did not name any variant of a closed enum.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind}: {value:?}")]
pub struct UnknownVariantError {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownVariantError {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}
