use std::hash::{DefaultHasher, Hash, Hasher};

use bevy_ecs::resource::Resource;
use bevy_ecs::world::World;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::IdGenerator;
use crate::ecs::clock::SimClock;

/// Master seed for the economy world. Domain RNGs are derived from it
/// every tick.
#[derive(Resource, Debug, Clone, Copy)]
pub struct SimRng {
    pub seed: u64,
}

impl SimRng {
    pub fn seeded(seed: u64) -> Self {
        Self { seed }
    }
}

/// RNG consumed by day-tick drift. Reseeded every tick.
#[derive(Resource)]
pub struct EconomyRng(pub SmallRng);

impl Default for EconomyRng {
    fn default() -> Self {
        Self(SmallRng::seed_from_u64(0))
    }
}

pub(crate) const ECONOMY_DOMAIN: &str = "economy";

/// Hash of (seed, domain, tick). Same inputs, same stream.
pub(crate) fn derive_domain_seed(seed: u64, domain: &str, tick: u64) -> u64 {
    let mut hasher = DefaultHasher::new();
    seed.hash(&mut hasher);
    domain.hash(&mut hasher);
    tick.hash(&mut hasher);
    hasher.finish()
}

/// Exclusive system run in `SimPhase::PreUpdate` before the economy systems.
pub fn distribute_rng(world: &mut World) {
    let seed = world.resource::<SimRng>().seed;
    let tick = world.resource::<SimClock>().tick_count;
    world.resource_mut::<EconomyRng>().0 =
        SmallRng::seed_from_u64(derive_domain_seed(seed, ECONOMY_DOMAIN, tick));
}

/// Shared id source for settlements and journal entries.
#[derive(Resource, Default)]
pub struct EcsIdGenerator(pub IdGenerator);
