use bevy_ecs::entity::Entity;
use bevy_ecs::message::Messages;
use bevy_ecs::resource::Resource;
use bevy_ecs::world::World;

use crate::economy::{self, DecreeStatus, Transition};
use crate::ecs::clock::SimClock;
use crate::ecs::components::{TownHallDecree, Village, VillageEconomy};
use crate::ecs::events::EconomyNotice;
use crate::ecs::resources::{EconomyJournal, EconomyRng, EcsIdGenerator, SettlementMap};
use crate::model::{EconomyEvent, EconomyState, SettlementId};

use super::EconomyCommand;

/// Resources the applicator needs, lifted out of the world for the duration
/// of one drain.
struct ApplyCtx {
    journal: EconomyJournal,
    id_gen: EcsIdGenerator,
    settlement_map: SettlementMap,
    rng: EconomyRng,
    today: u32,
    notices: Vec<EconomyNotice>,
}

impl ApplyCtx {
    fn take(world: &mut World) -> Self {
        Self {
            journal: take_resource(world),
            id_gen: take_resource(world),
            settlement_map: take_resource(world),
            rng: take_resource(world),
            today: world.get_resource::<SimClock>().map_or(0, SimClock::today),
            notices: Vec::new(),
        }
    }

    fn restore(self, world: &mut World) -> Vec<EconomyNotice> {
        world.insert_resource(self.journal);
        world.insert_resource(self.id_gen);
        world.insert_resource(self.settlement_map);
        world.insert_resource(self.rng);
        self.notices
    }

    /// Store the new state and publish the event. No-op transitions leave the
    /// component untouched.
    fn commit(
        &mut self,
        world: &mut World,
        entity: Entity,
        settlement_id: SettlementId,
        day: u32,
        transition: Transition,
    ) {
        let Some(event) = transition.event else {
            return;
        };
        let Ok(mut village) = world.get_entity_mut(entity) else {
            tracing::warn!(%settlement_id, ?entity, "village despawned before commit");
            return;
        };
        village.insert(VillageEconomy(transition.state));

        tracing::trace!(%settlement_id, event = event.name(), "{}", event.describe());
        let id = self.id_gen.0.next_id();
        self.journal.record(id, day, settlement_id, &event);
        self.notices.push(EconomyNotice {
            settlement: entity,
            settlement_id,
            event,
        });
    }
}

fn take_resource<R: Resource + Default>(world: &mut World) -> R {
    world
        .get_resource_mut::<R>()
        .map(|mut res| std::mem::take(&mut *res))
        .unwrap_or_default()
}

fn current_state(world: &World, entity: Entity) -> EconomyState {
    world
        .get::<VillageEconomy>(entity)
        .map(|economy| economy.0.clone())
        .unwrap_or_default()
}

/// Exclusive system that drains every pending `EconomyCommand`, applies the
/// transitions and writes `EconomyNotice` messages.
///
/// Runs in `SimPhase::Update`.
pub fn apply_economy_commands(world: &mut World) {
    let commands: Vec<EconomyCommand> = {
        let Some(mut messages) = world.get_resource_mut::<Messages<EconomyCommand>>() else {
            return;
        };
        messages.drain().collect()
    };

    if commands.is_empty() {
        return;
    }

    let mut ctx = ApplyCtx::take(world);

    for cmd in &commands {
        match cmd {
            EconomyCommand::DayChanged { absolute_day } => {
                apply_day_changed(&mut ctx, world, *absolute_day);
            }
            EconomyCommand::BattleWon {
                settlement,
                enemy,
                area,
            } => {
                let Some(entity) = resolve(&ctx, world, *settlement) else {
                    continue;
                };
                let state = current_state(world, entity);
                let transition = economy::handle_after_battle(&state, enemy, area);
                let day = ctx.today;
                ctx.commit(world, entity, *settlement, day, transition);
            }
            EconomyCommand::Purchase {
                settlement,
                gold_spent,
                context,
            } => {
                let Some(entity) = resolve(&ctx, world, *settlement) else {
                    continue;
                };
                let state = current_state(world, entity);
                let transition = economy::handle_after_purchase(&state, *gold_spent, *context);
                let day = ctx.today;
                ctx.commit(world, entity, *settlement, day, transition);
            }
        }
    }

    let notices = ctx.restore(world);
    if let Some(mut messages) = world.get_resource_mut::<Messages<EconomyNotice>>() {
        messages.write_batch(notices);
    }
}

fn resolve(ctx: &ApplyCtx, world: &World, settlement: SettlementId) -> Option<Entity> {
    let entity = ctx
        .settlement_map
        .get_bevy(settlement)
        .filter(|entity| world.get_entity(*entity).is_ok());
    if entity.is_none() {
        tracing::warn!(%settlement, "economy command for unknown settlement");
    }
    entity
}

/// Tick every village, lowest settlement id first.
fn apply_day_changed(ctx: &mut ApplyCtx, world: &mut World, day: u32) {
    let mut query = world.query::<(Entity, &Village)>();
    let mut villages: Vec<(Entity, SettlementId)> = query
        .iter(world)
        .map(|(entity, village)| (entity, village.id))
        .collect();
    villages.sort_by_key(|(_, id)| *id);

    for (entity, settlement_id) in villages {
        let state = current_state(world, entity);
        let mut decree = world.get::<TownHallDecree>(entity).map(|d| d.0.clone());
        let status = economy::observe_decree(&mut decree, day);
        let expired = matches!(status, DecreeStatus::Expired(_));
        let transition = economy::handle_day_tick(&state, day, status.active(), &mut ctx.rng.0);
        if expired {
            world.entity_mut(entity).remove::<TownHallDecree>();
        }
        ctx.commit(world, entity, settlement_id, day, transition);
    }
}
