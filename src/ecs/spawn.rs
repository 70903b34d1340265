use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;

use crate::ecs::clock::SimClock;
use crate::ecs::components::{Village, VillageEconomy};
use crate::ecs::resources::{EcsIdGenerator, SettlementMap};
use crate::model::{EconomyState, SettlementId};

fn allocate_id(world: &mut World) -> SettlementId {
    let mut id_gen = world.get_resource_or_init::<EcsIdGenerator>();
    SettlementId(id_gen.0.next_id())
}

fn register(world: &mut World, id: SettlementId, entity: Entity) {
    world.get_resource_or_init::<SettlementMap>().insert(id, entity);
}

/// Spawn a village with a fresh settlement id.
///
/// `None` starts the village at the default baseline.
pub fn spawn_village(
    world: &mut World,
    name: impl Into<String>,
    state: Option<EconomyState>,
) -> (Entity, SettlementId) {
    let id = allocate_id(world);
    let founded = world.get_resource::<SimClock>().map(|clock| clock.time);
    let entity = world
        .spawn((
            Village {
                id,
                name: name.into(),
                founded,
            },
            VillageEconomy(state.unwrap_or_default()),
        ))
        .id();
    register(world, id, entity);
    tracing::trace!(settlement = %id, ?entity, "village spawned");
    (entity, id)
}
