mod common;

use common::{Step, goblin, state, troll_king};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use village_economy::economy::{
    derive_summary, get_merchant_price, get_rest_cost, handle_after_battle, handle_after_purchase,
    handle_day_tick,
};
use village_economy::model::{
    Area, EconomyEvent, EconomyState, Enemy, GovernmentEffect, PurchaseContext, TierId,
    TownHallEffect,
};

/// Every draw is zero, so day-tick drift is exactly -2.7.
struct ZeroRng;

impl RngCore for ZeroRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
    }
}

fn apply(state: &EconomyState, step: &Step, rng: &mut SmallRng) -> EconomyState {
    let transition = match step {
        Step::Tick(day) => handle_day_tick(state, *day, None, rng),
        Step::Battle { boss, area } => {
            handle_after_battle(state, &Enemy::new("Foe", *boss), area)
        }
        Step::Purchase { gold, context } => handle_after_purchase(state, *gold, *context),
    };
    transition.state
}

fn arb_area() -> impl Strategy<Value = Area> {
    prop_oneof![
        Just(Area::Forest),
        Just(Area::Ruins),
        Just(Area::Village),
        "[a-z]{1,8}".prop_map(|s: String| Area::from(s)),
    ]
}

fn arb_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        (0u32..400).prop_map(Step::Tick),
        (any::<bool>(), arb_area()).prop_map(|(boss, area)| Step::Battle { boss, area }),
        (
            prop_oneof![-100.0..20_000.0f64, Just(f64::NAN), Just(f64::INFINITY)],
            prop_oneof![Just(PurchaseContext::Village), Just(PurchaseContext::Wandering)],
        )
            .prop_map(|(gold, context)| Step::Purchase { gold, context }),
    ]
}

proptest! {
    #[test]
    fn metrics_stay_in_range(
        p in 0i32..=100,
        s in 0i32..=100,
        t in 0i32..=100,
        seed in any::<u64>(),
        steps in prop::collection::vec(arb_step(), 1..60),
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut current = state(p, s, t);
        for step in &steps {
            current = apply(&current, step, &mut rng);
            prop_assert!(current.metrics_in_range(), "{current:?} after {step:?}");
            prop_assert_eq!(current.tier_id, TierId::classify(current.prosperity));
        }
    }

    #[test]
    fn second_tick_on_same_day_is_noop(
        p in 0i32..=100,
        day in 0u32..10_000,
        seed in any::<u64>(),
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let first = handle_day_tick(&state(p, 40, 50), day, None, &mut rng);
        prop_assert!(first.event.is_some());
        let second = handle_day_tick(&first.state, day, None, &mut rng);
        prop_assert!(second.event.is_none());
        prop_assert_eq!(second.state, first.state);
    }

    #[test]
    fn merchant_price_floor_and_markup(
        base in -1_000.0..10_000.0f64,
        p in 0i32..=100,
    ) {
        let raw = state(p, 40, 50);
        let village = get_merchant_price(base, &raw, None, PurchaseContext::Village);
        let wandering = get_merchant_price(base, &raw, None, PurchaseContext::Wandering);
        prop_assert!(village >= 1);
        prop_assert!(wandering >= village);
    }

    #[test]
    fn effective_metrics_stay_in_range(
        p in 0i32..=100,
        t in 0i32..=100,
        p_mod in -1.0..1.0f64,
        s_mod in -1.0..1.0f64,
    ) {
        let gov = GovernmentEffect::new(p_mod, s_mod);
        let summary = derive_summary(&state(p, 40, t), Some(&gov));
        prop_assert!((0..=100).contains(&summary.prosperity));
        prop_assert!((0..=100).contains(&summary.trade));
        prop_assert_eq!(summary.tier_id, TierId::classify(summary.prosperity));
    }
}

#[test]
fn tier_boundaries() {
    assert_eq!(state(34, 40, 50).tier_id, TierId::Struggling);
    assert_eq!(state(35, 40, 50).tier_id, TierId::Stable);
    assert_eq!(state(70, 40, 50).tier_id, TierId::Stable);
    assert_eq!(state(71, 40, 50).tier_id, TierId::Thriving);
}

#[test]
fn purchase_is_capped() {
    let transition = handle_after_purchase(&state(50, 40, 50), 10_000.0, PurchaseContext::Village);
    assert_eq!(transition.state.trade, 55);
    assert_eq!(transition.state.prosperity, 54);
    match transition.event {
        Some(EconomyEvent::AfterPurchase {
            trade_delta,
            prosperity_delta,
            ..
        }) => {
            assert_eq!(trade_delta, 5.0);
            assert_eq!(prosperity_delta, 4.0);
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[test]
fn wandering_purchase_is_noop() {
    let before = state(50, 40, 50);
    let transition = handle_after_purchase(&before, 500.0, PurchaseContext::Wandering);
    assert!(transition.event.is_none());
    assert_eq!(transition.state, before);
}

#[test]
fn battle_only_counts_on_dangerous_routes() {
    let before = state(50, 40, 50);
    assert!(handle_after_battle(&before, &troll_king(), &Area::Village).is_noop());

    let boss = handle_after_battle(&before, &troll_king(), &Area::Ruins);
    assert_eq!(boss.state.security, 48);
    assert_eq!(boss.state.prosperity, 55);

    let minion = handle_after_battle(&before, &goblin(), &Area::from("forest"));
    assert_eq!(minion.state.security, 42);
    assert_eq!(minion.state.prosperity, 51);
}

#[test]
fn baseline_prices() {
    let raw = state(50, 40, 50);
    assert_eq!(get_merchant_price(100.0, &raw, None, PurchaseContext::Village), 100);
    assert_eq!(get_merchant_price(100.0, &raw, None, PurchaseContext::Wandering), 110);
    assert_eq!(get_merchant_price(0.2, &raw, None, PurchaseContext::Village), 1);
}

#[test]
fn government_can_demote_effective_tier() {
    let raw = state(80, 40, 50);
    let gov = GovernmentEffect::new(-0.3, 0.0);
    let summary = derive_summary(&raw, Some(&gov));
    assert_eq!(summary.prosperity, 56);
    assert_eq!(summary.tier_id, TierId::Stable);
    assert_eq!(raw.tier_id, TierId::Thriving);
}

#[test]
fn decree_expiry_is_lazy_and_final() {
    let raw = state(50, 40, 50);
    let mut decree = Some(TownHallEffect::new("inn-levy", 10).with_rest_cost_multiplier(2.0));

    assert_eq!(get_rest_cost(&raw, None, &mut decree, 10), 30);
    assert!(decree.is_some());

    assert_eq!(get_rest_cost(&raw, None, &mut decree, 11), 15);
    assert!(decree.is_none());
    assert_eq!(get_rest_cost(&raw, None, &mut decree, 11), 15);
}

#[test]
fn day_tick_starts_from_post_purchase_state() {
    let purchased = handle_after_purchase(&state(50, 40, 50), 100.0, PurchaseContext::Village);
    assert_eq!(purchased.state.prosperity, 54);

    let ticked = handle_day_tick(&purchased.state, 0, None, &mut ZeroRng);
    assert_eq!(ticked.state.prosperity, 51);
    assert_eq!(ticked.state.trade, 55);
    match ticked.event {
        Some(EconomyEvent::DayTicked { prosperity, .. }) => assert_eq!(prosperity, 51),
        other => panic!("unexpected event {other:?}"),
    }
}
