//! Economy systems.
//!
//! PreUpdate (after message rotation):
//! 1. `ensure_village_economy`: villages without state get the baseline
//! 2. `queue_daily_tick`: writes `DayChanged` at the first minute of each day
//!
//! Update:
//! 3. `apply_economy_commands`: drains all economy commands
//!
//! PostUpdate:
//! 4. `flush_journal_on_interval`: periodic JSONL flush when configured

use bevy_app::{App, Plugin};
use bevy_ecs::entity::Entity;
use bevy_ecs::message::MessageWriter;
use bevy_ecs::query::{With, Without};
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::system::{Commands, Query, Res};
use bevy_ecs::world::World;

use crate::ecs::clock::SimClock;
use crate::ecs::commands::{EconomyCommand, apply_economy_commands};
use crate::ecs::components::{Village, VillageEconomy};
use crate::ecs::conditions::daily;
use crate::ecs::queries::village_snapshots;
use crate::ecs::resources::{EconomyConfig, EconomyJournal};
use crate::ecs::schedule::{SimPhase, SimTick};
use crate::flush::flush_journal_to_jsonl;

pub fn add_economy_systems(app: &mut App) {
    app.add_systems(
        SimTick,
        (ensure_village_economy, queue_daily_tick.run_if(daily))
            .chain()
            .in_set(SimPhase::PreUpdate)
            .after(bevy_ecs::message::message_update_system),
    );
    app.add_systems(SimTick, apply_economy_commands.in_set(SimPhase::Update));
    app.add_systems(
        SimTick,
        flush_journal_on_interval
            .run_if(daily)
            .in_set(SimPhase::PostUpdate),
    );
}

/// Installs the economy systems into the `SimTick` schedule.
pub struct EconomyPlugin;

impl Plugin for EconomyPlugin {
    fn build(&self, app: &mut App) {
        add_economy_systems(app);
    }
}

fn ensure_village_economy(
    mut commands: Commands,
    bare: Query<Entity, (With<Village>, Without<VillageEconomy>)>,
) {
    for entity in &bare {
        commands.entity(entity).insert(VillageEconomy::default());
    }
}

fn queue_daily_tick(clock: Res<SimClock>, mut commands: MessageWriter<EconomyCommand>) {
    commands.write(EconomyCommand::day_changed(clock.today()));
}

fn flush_journal_on_interval(world: &mut World) {
    let Some(config) = world.get_resource::<EconomyConfig>() else {
        return;
    };
    let Some(output_dir) = config.output_dir.clone() else {
        return;
    };
    let interval = config.flush_interval_days;
    let elapsed = world
        .resource::<SimClock>()
        .today()
        .saturating_sub(config.start_day);
    if interval == 0 || elapsed == 0 || !elapsed.is_multiple_of(interval) {
        return;
    }

    let villages = village_snapshots(world);
    let journal = world.resource::<EconomyJournal>();
    match flush_journal_to_jsonl(journal, &villages, &output_dir) {
        Ok(()) => {
            tracing::debug!(entries = journal.len(), dir = %output_dir.display(), "flushed economy journal");
            world.resource_mut::<EconomyJournal>().clear();
        }
        Err(err) => {
            tracing::warn!(error = %err, dir = %output_dir.display(), "economy journal flush failed");
        }
    }
}
