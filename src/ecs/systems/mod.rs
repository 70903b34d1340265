pub mod economy;

pub use economy::{EconomyPlugin, add_economy_systems};
