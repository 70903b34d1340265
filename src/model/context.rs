use serde::{Deserialize, Serialize};

/// Where a battle took place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Area {
    Village,
    Forest,
    Ruins,
    Other(String),
}

string_enum_open!(Area {
    Village => "village",
    Forest => "forest",
    Ruins => "ruins",
});

impl Area {
    /// Battles on trade routes outside the village make those routes safer.
    pub fn is_dangerous_route(&self) -> bool {
        matches!(self, Area::Forest | Area::Ruins)
    }
}

/// Which kind of merchant a purchase was made from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum PurchaseContext {
    #[default]
    Village,
    Wandering,
}

string_enum!(PurchaseContext, "purchase context", {
    Village => "village",
    Wandering => "wandering",
});

/// The defeated enemy, as far as the economy cares.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_boss: bool,
}

impl Enemy {
    pub fn new(name: impl Into<String>, is_boss: bool) -> Self {
        Self {
            name: name.into(),
            is_boss,
        }
    }
}
