use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a settlement, allocated from the shared [`IdGenerator`](crate::IdGenerator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettlementId(pub u64);

impl fmt::Display for SettlementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for SettlementId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}
