//! Host-agnostic economy service for one settlement.
//!
//! Owns the settlement's raw state and its decree slot, replaces the state on
//! every transition, and hands each emitted event back to the caller. The
//! bevy integration in [`crate::ecs`] is the engine-side counterpart.

use rand::Rng;

use crate::economy::{self, EffectiveSummary};
use crate::model::{
    Area, ECONOMY_TIERS, EconomyEvent, EconomyState, Enemy, GovernmentEffectProvider,
    PurchaseContext, SettlementId, Tier, TownHallEffect,
};

pub struct EconomyService<P> {
    settlement: SettlementId,
    state: EconomyState,
    decree: Option<TownHallEffect>,
    government: P,
}

impl<P: GovernmentEffectProvider> EconomyService<P> {
    /// Start a settlement at the default baseline.
    pub fn new(settlement: SettlementId, government: P) -> Self {
        Self::with_state(settlement, EconomyState::default(), government)
    }

    pub fn with_state(settlement: SettlementId, state: EconomyState, government: P) -> Self {
        Self {
            settlement,
            state,
            decree: None,
            government,
        }
    }

    pub fn settlement(&self) -> SettlementId {
        self.settlement
    }

    /// Raw persisted state.
    pub fn state(&self) -> &EconomyState {
        &self.state
    }

    pub fn decree(&self) -> Option<&TownHallEffect> {
        self.decree.as_ref()
    }

    /// Install (or replace) the town hall decree.
    pub fn set_decree(&mut self, decree: TownHallEffect) {
        self.decree = Some(decree);
    }

    pub fn government_mut(&mut self) -> &mut P {
        &mut self.government
    }

    pub fn tiers(&self) -> &'static [Tier; 3] {
        &ECONOMY_TIERS
    }

    pub fn summary(&self) -> EffectiveSummary {
        let gov = economy::lookup_government(&self.government, self.settlement);
        economy::derive_summary(&self.state, gov.as_ref())
    }

    pub fn merchant_price(&self, base_price: f64, context: PurchaseContext) -> u32 {
        economy::merchant_price(base_price, &self.summary(), context)
    }

    /// May drop an expired decree as a side effect.
    pub fn rest_cost(&mut self, today: u32) -> u32 {
        let summary = self.summary();
        economy::rest_cost(&summary, &mut self.decree, today)
    }

    pub fn handle_day_tick<R: Rng + ?Sized>(
        &mut self,
        absolute_day: u32,
        rng: &mut R,
    ) -> Option<EconomyEvent> {
        // Observing the slot first lets an expired decree fall out here too.
        let status = economy::observe_decree(&mut self.decree, absolute_day);
        let transition = economy::handle_day_tick(&self.state, absolute_day, status.active(), rng);
        self.commit(transition)
    }

    pub fn handle_after_battle(&mut self, enemy: &Enemy, area: &Area) -> Option<EconomyEvent> {
        let transition = economy::handle_after_battle(&self.state, enemy, area);
        self.commit(transition)
    }

    pub fn handle_after_purchase(
        &mut self,
        gold_spent: f64,
        context: PurchaseContext,
    ) -> Option<EconomyEvent> {
        let transition = economy::handle_after_purchase(&self.state, gold_spent, context);
        self.commit(transition)
    }

    fn commit(&mut self, transition: economy::Transition) -> Option<EconomyEvent> {
        if transition.event.is_some() {
            self.state = transition.state;
        }
        transition.event
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;
    use crate::error::ProviderError;
    use crate::model::{GovernmentEffect, NoGovernment, StaticGovernment, TierId};

    struct BrokenGovernment;

    impl GovernmentEffectProvider for BrokenGovernment {
        fn village_effect(
            &self,
            settlement: SettlementId,
        ) -> Result<Option<GovernmentEffect>, ProviderError> {
            Err(ProviderError::Rejected {
                settlement,
                reason: "council dissolved".to_string(),
            })
        }
    }

    fn service() -> EconomyService<NoGovernment> {
        EconomyService::new(SettlementId(1), NoGovernment)
    }

    #[test]
    fn summary_of_fresh_village() {
        let svc = service();
        let summary = svc.summary();
        assert_eq!(summary.tier_id, TierId::Stable);
        assert_eq!(svc.merchant_price(100.0, PurchaseContext::Village), 100);
        assert_eq!(svc.merchant_price(100.0, PurchaseContext::Wandering), 110);
    }

    #[test]
    fn double_tick_emits_one_event() {
        let mut svc = service();
        let mut rng = SmallRng::seed_from_u64(1);
        assert!(svc.handle_day_tick(4, &mut rng).is_some());
        let after_first = svc.state().clone();
        assert!(svc.handle_day_tick(4, &mut rng).is_none());
        assert_eq!(svc.state(), &after_first);
    }

    #[test]
    fn day_tick_drops_expired_decree() {
        let mut svc = service();
        svc.set_decree(TownHallEffect::new("festival", 2).with_deltas(1.0, 1.0, 1.0));
        let mut rng = SmallRng::seed_from_u64(1);
        svc.handle_day_tick(3, &mut rng);
        assert!(svc.decree().is_none());
        assert_eq!(svc.state().last_decree_nudge, None);
    }

    #[test]
    fn rest_cost_expiry_boundary() {
        let mut svc = service();
        svc.set_decree(TownHallEffect::new("inn-levy", 9).with_rest_cost_multiplier(2.0));
        assert_eq!(svc.rest_cost(9), 30);
        assert_eq!(svc.rest_cost(10), 15);
        assert!(svc.decree().is_none());
        assert_eq!(svc.rest_cost(10), 15);
    }

    #[test]
    fn broken_government_falls_back_to_raw() {
        let svc = EconomyService::with_state(
            SettlementId(2),
            EconomyState::with_metrics(80, 40, 50),
            BrokenGovernment,
        );
        let summary = svc.summary();
        assert_eq!(summary.prosperity, 80);
        assert_eq!(summary.tier_id, TierId::Thriving);
        assert_eq!(svc.merchant_price(100.0, PurchaseContext::Village), 90);
    }

    #[test]
    fn government_changes_are_seen_on_next_read() {
        let mut svc = EconomyService::with_state(
            SettlementId(3),
            EconomyState::with_metrics(80, 40, 50),
            StaticGovernment::new(),
        );
        assert_eq!(svc.summary().tier_id, TierId::Thriving);
        svc.government_mut()
            .set(SettlementId(3), GovernmentEffect::new(-0.3, 0.0));
        assert_eq!(svc.summary().tier_id, TierId::Stable);
        assert_eq!(svc.state().tier_id, TierId::Thriving);
    }

    #[test]
    fn purchase_and_battle_replace_state() {
        let mut svc = service();
        let event = svc.handle_after_purchase(100.0, PurchaseContext::Village);
        assert!(matches!(event, Some(EconomyEvent::AfterPurchase { .. })));
        assert_eq!(svc.state().trade, 55);
        assert!(svc.handle_after_purchase(100.0, PurchaseContext::Wandering).is_none());
        let event = svc.handle_after_battle(&Enemy::new("Troll", true), &Area::Forest);
        assert!(matches!(event, Some(EconomyEvent::AfterBattle { .. })));
        assert_eq!(svc.state().security, 48);
    }
}
