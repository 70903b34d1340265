//! Read-side helpers over an economy `World`.
//!
//! Summaries are derived on every call from the stored raw state and the
//! current `GovernmentInfluence`, so provider changes show up immediately.

use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;

use crate::economy::{self, EffectiveSummary};
use crate::ecs::clock::SimClock;
use crate::ecs::components::{TownHallDecree, Village, VillageEconomy};
use crate::ecs::resources::{GovernmentInfluence, SettlementMap};
use crate::ecs::time::SimTime;
use crate::flush::VillageSnapshot;
use crate::model::{ECONOMY_TIERS, EconomyState, PurchaseContext, SettlementId, Tier};

fn village_entity(world: &World, settlement: SettlementId) -> Option<Entity> {
    world
        .get_resource::<SettlementMap>()?
        .get_bevy(settlement)
        .filter(|entity| world.get_entity(*entity).is_ok())
}

fn raw_state(world: &World, entity: Entity) -> EconomyState {
    world
        .get::<VillageEconomy>(entity)
        .map(|economy| economy.0.clone())
        .unwrap_or_default()
}

fn summarize(world: &World, settlement: SettlementId, state: &EconomyState) -> EffectiveSummary {
    let government = world
        .get_resource::<GovernmentInfluence>()
        .and_then(|influence| economy::lookup_government(influence.provider(), settlement));
    economy::derive_summary(state, government.as_ref())
}

/// Effective economy of a village, or `None` if the settlement is unknown.
pub fn economy_summary(world: &World, settlement: SettlementId) -> Option<EffectiveSummary> {
    let entity = village_entity(world, settlement)?;
    Some(summarize(world, settlement, &raw_state(world, entity)))
}

pub fn merchant_price(
    world: &World,
    settlement: SettlementId,
    base_price: f64,
    context: PurchaseContext,
) -> Option<u32> {
    let summary = economy_summary(world, settlement)?;
    Some(economy::merchant_price(base_price, &summary, context))
}

/// Tavern rest cost on the clock's current day. Removes the village's
/// `TownHallDecree` if it has expired.
pub fn rest_cost(world: &mut World, settlement: SettlementId) -> Option<u32> {
    let today = world.get_resource::<SimClock>().map_or(0, SimClock::today);
    rest_cost_on(world, settlement, today)
}

/// Tavern rest cost on a host-supplied day, for hosts that drive days through
/// `EconomyCommand::DayChanged` rather than the clock.
pub fn rest_cost_on(world: &mut World, settlement: SettlementId, today: u32) -> Option<u32> {
    let entity = village_entity(world, settlement)?;
    let summary = summarize(world, settlement, &raw_state(world, entity));

    let mut decree = world.get::<TownHallDecree>(entity).map(|d| d.0.clone());
    let had_decree = decree.is_some();
    let cost = economy::rest_cost(&summary, &mut decree, today);
    if had_decree && decree.is_none() {
        world.entity_mut(entity).remove::<TownHallDecree>();
    }
    Some(cost)
}

pub fn village_tiers() -> &'static [Tier; 3] {
    &ECONOMY_TIERS
}

/// Raw state of every village, ordered by settlement id.
pub fn village_snapshots(world: &mut World) -> Vec<VillageSnapshot> {
    let mut query = world.query::<(&Village, Option<&VillageEconomy>)>();
    let mut snapshots: Vec<VillageSnapshot> = query
        .iter(world)
        .map(|(village, economy)| VillageSnapshot {
            settlement_id: village.id,
            name: village.name.clone(),
            founded_day: village.founded.map(SimTime::absolute_day),
            state: economy.map(|e| e.0.clone()).unwrap_or_default(),
        })
        .collect();
    snapshots.sort_by_key(|snapshot| snapshot.settlement_id);
    snapshots
}
