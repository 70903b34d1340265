use std::collections::BTreeMap;

use bevy_ecs::entity::Entity;
use bevy_ecs::resource::Resource;

use crate::model::SettlementId;

/// Bidirectional mapping between settlement IDs and Bevy entities.
#[derive(Resource, Debug, Clone, Default)]
pub struct SettlementMap {
    to_bevy: BTreeMap<SettlementId, Entity>,
    to_settlement: BTreeMap<Entity, SettlementId>,
}

impl SettlementMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a mapping. Panics if the settlement ID is already registered.
    pub fn insert(&mut self, id: SettlementId, entity: Entity) {
        let prev = self.to_bevy.insert(id, entity);
        assert!(prev.is_none(), "duplicate settlement id {id} in SettlementMap");
        self.to_settlement.insert(entity, id);
    }

    /// Look up a Bevy entity by settlement ID.
    pub fn get_bevy(&self, id: SettlementId) -> Option<Entity> {
        self.to_bevy.get(&id).copied()
    }

    /// Look up a settlement ID by Bevy entity.
    pub fn get_settlement(&self, entity: Entity) -> Option<SettlementId> {
        self.to_settlement.get(&entity).copied()
    }

    pub fn len(&self) -> usize {
        self.to_bevy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.to_bevy.is_empty()
    }
}
