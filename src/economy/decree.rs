//! Reading town hall decrees with lazy expiry.
//!
//! A decree is dropped the first time it is observed past its last day, by
//! whichever read happens first (rest-cost quote or day tick). There is no
//! background sweep.

use crate::model::TownHallEffect;

/// Outcome of observing a decree slot on a given day.
#[derive(Debug, PartialEq)]
pub enum DecreeStatus<'a> {
    Absent,
    Active(&'a TownHallEffect),
    /// The decree was past expiry and has been removed from the slot.
    Expired(TownHallEffect),
}

impl<'a> DecreeStatus<'a> {
    pub fn active(&self) -> Option<&'a TownHallEffect> {
        match self {
            DecreeStatus::Active(decree) => Some(*decree),
            _ => None,
        }
    }
}

/// Observe the decree in `slot` on `today`, removing it if it has expired.
pub fn observe_decree(slot: &mut Option<TownHallEffect>, today: u32) -> DecreeStatus<'_> {
    if slot.as_ref().is_some_and(|d| d.is_expired(today)) {
        if let Some(decree) = slot.take() {
            tracing::debug!(
                decree = %decree.decree_id,
                expires_on_day = decree.expires_on_day,
                today,
                "town hall decree expired"
            );
            return DecreeStatus::Expired(decree);
        }
    }
    match slot.as_ref() {
        Some(decree) => DecreeStatus::Active(decree),
        None => DecreeStatus::Absent,
    }
}

/// Non-mutating check: the decree if it applies on `today`.
pub fn active_decree(decree: Option<&TownHallEffect>, today: u32) -> Option<&TownHallEffect> {
    decree.filter(|d| d.is_active(today))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_slot_is_absent() {
        let mut slot = None;
        assert_eq!(observe_decree(&mut slot, 5), DecreeStatus::Absent);
    }

    #[test]
    fn active_decree_stays_in_slot() {
        let mut slot = Some(TownHallEffect::new("festival", 5));
        let status = observe_decree(&mut slot, 5);
        assert_eq!(status.active().map(|d| d.decree_id.as_str()), Some("festival"));
        assert!(slot.is_some());
    }

    #[test]
    fn expired_decree_is_removed_once() {
        let mut slot = Some(TownHallEffect::new("festival", 5));
        match observe_decree(&mut slot, 6) {
            DecreeStatus::Expired(decree) => assert_eq!(decree.decree_id, "festival"),
            other => panic!("expected expiry, got {other:?}"),
        }
        assert!(slot.is_none());
        assert_eq!(observe_decree(&mut slot, 6), DecreeStatus::Absent);
    }

    #[test]
    fn active_decree_filter_does_not_mutate() {
        let decree = TownHallEffect::new("curfew", 2);
        assert!(active_decree(Some(&decree), 2).is_some());
        assert!(active_decree(Some(&decree), 3).is_none());
        assert!(active_decree(None, 0).is_none());
    }
}
