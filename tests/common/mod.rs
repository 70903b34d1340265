#![allow(dead_code)]

use bevy_app::App;
use bevy_ecs::message::Messages;
use village_economy::ecs::{EconomyCommand, EconomyNotice};
use village_economy::model::{Area, EconomyState, Enemy, PurchaseContext};

/// One step of an arbitrary mutation sequence.
#[derive(Debug, Clone)]
pub enum Step {
    Tick(u32),
    Battle { boss: bool, area: Area },
    Purchase { gold: f64, context: PurchaseContext },
}

pub fn state(prosperity: i32, security: i32, trade: i32) -> EconomyState {
    EconomyState::with_metrics(prosperity, security, trade)
}

pub fn goblin() -> Enemy {
    Enemy::new("Goblin", false)
}

pub fn troll_king() -> Enemy {
    Enemy::new("Troll King", true)
}

pub fn send(app: &mut App, command: EconomyCommand) {
    app.world_mut()
        .resource_mut::<Messages<EconomyCommand>>()
        .write(command);
}

pub fn drain_notices(app: &mut App) -> Vec<EconomyNotice> {
    app.world_mut()
        .resource_mut::<Messages<EconomyNotice>>()
        .drain()
        .collect()
}

pub fn read_lines(path: &std::path::Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}
