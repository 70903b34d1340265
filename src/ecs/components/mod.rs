pub mod common;
pub mod settlement;

pub use common::Village;
pub use settlement::{TownHallDecree, VillageEconomy};
