use bevy_ecs::resource::Resource;

use crate::model::{GovernmentEffectProvider, NoGovernment};

/// The world's source of government effects. Consulted on every read, so
/// swapping the provider takes effect on the next query.
#[derive(Resource)]
pub struct GovernmentInfluence(pub Box<dyn GovernmentEffectProvider + Send + Sync>);

impl GovernmentInfluence {
    pub fn new<P>(provider: P) -> Self
    where
        P: GovernmentEffectProvider + Send + Sync + 'static,
    {
        Self(Box::new(provider))
    }

    pub fn provider(&self) -> &dyn GovernmentEffectProvider {
        self.0.as_ref()
    }
}

impl Default for GovernmentInfluence {
    fn default() -> Self {
        Self::new(NoGovernment)
    }
}
