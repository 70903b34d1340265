use bevy_ecs::resource::Resource;
use serde::{Deserialize, Serialize};

use crate::model::{EconomyEvent, SettlementId};

/// One emitted economy event, as written to the journal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: u64,
    pub day: u32,
    pub settlement_id: SettlementId,
    pub kind: String,
    pub description: String,
    pub data: serde_json::Value,
}

/// Accumulates emitted economy events between flushes.
#[derive(Resource, Debug, Clone, Default)]
pub struct EconomyJournal {
    pub entries: Vec<JournalEntry>,
}

impl EconomyJournal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, id: u64, day: u32, settlement_id: SettlementId, event: &EconomyEvent) {
        self.entries.push(JournalEntry {
            id,
            day,
            settlement_id,
            kind: event.name().to_string(),
            description: event.describe(),
            data: serde_json::to_value(event).unwrap_or(serde_json::Value::Null),
        });
    }

    /// Entries for one settlement, oldest first.
    pub fn for_settlement(&self, settlement_id: SettlementId) -> impl Iterator<Item = &JournalEntry> {
        self.entries
            .iter()
            .filter(move |e| e.settlement_id == settlement_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
