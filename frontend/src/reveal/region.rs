use std::sync::atomic::{AtomicU64, Ordering};

use crate::config::{RevealOptions, RATIO_TOLERANCE};

static NEXT_REGION_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of one mount of a tracked section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId(u64);

impl RegionId {
    fn next() -> Self {
        Self(NEXT_REGION_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl std::fmt::Display for RegionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "region-{}", self.0)
    }
}

/// There is no transition out of `Revealed`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Unseen,
    Revealed,
}

#[derive(Debug)]
pub struct TrackedRegion {
    id: RegionId,
    state: RevealState,
    options: RevealOptions,
}

impl TrackedRegion {
    pub fn new(options: RevealOptions) -> Self {
        Self {
            id: RegionId::next(),
            state: RevealState::Unseen,
            options,
        }
    }

    pub fn id(&self) -> RegionId {
        self.id
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    #[cfg(test)]
    pub fn is_revealed(&self) -> bool {
        self.state == RevealState::Revealed
    }

    /// Feeds one observation of the visible fraction.
    ///
    /// Returns `true` only for the observation that latched the region. A
    /// region that is not intersecting at all never latches, whatever the
    /// threshold.
    pub fn observe(&mut self, visible_fraction: f64) -> bool {
        match self.state {
            RevealState::Revealed => false,
            RevealState::Unseen => {
                let intersecting = visible_fraction > 0.0;
                if intersecting && visible_fraction + RATIO_TOLERANCE >= self.options.threshold() {
                    self.state = RevealState::Revealed;
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Latches without an observation. Used when the host cannot observe the viewport.
    pub fn force_reveal(&mut self) -> bool {
        let latched = self.state == RevealState::Unseen;
        self.state = RevealState::Revealed;
        latched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unseen() {
        let region = TrackedRegion::new(RevealOptions::default());
        assert_eq!(region.state(), RevealState::Unseen);
        assert!(!region.is_revealed());
    }

    #[test]
    fn latches_once_threshold_met_and_never_reverts() {
        let mut region = TrackedRegion::new(RevealOptions::default());
        assert!(!region.observe(0.0));
        assert!(!region.observe(0.05));
        assert!(region.observe(0.1));
        assert!(region.is_revealed());

        // leave and re-enter the viewport
        assert!(!region.observe(0.0));
        assert!(!region.observe(0.8));
        assert!(!region.observe(0.0));
        assert_eq!(region.state(), RevealState::Revealed);
    }

    #[test]
    fn tolerates_rounded_ratios_at_the_threshold() {
        let mut region = TrackedRegion::new(RevealOptions::new(0.5, 0).unwrap());
        assert!(!region.observe(0.45));
        assert!(region.observe(0.4995));
    }

    #[test]
    fn tiny_thresholds_still_need_an_intersection() {
        let mut region = TrackedRegion::new(RevealOptions::new(0.0005, 0).unwrap());
        assert!(!region.observe(0.0));
        assert!(!region.observe(-0.0));
        assert!(!region.is_revealed());
        assert!(region.observe(0.0001));
    }

    #[test]
    fn force_reveal_is_idempotent() {
        let mut region = TrackedRegion::new(RevealOptions::default());
        assert!(region.force_reveal());
        assert!(!region.force_reveal());
        assert!(!region.observe(1.0));
    }

    #[test]
    fn every_mount_gets_its_own_id() {
        let a = TrackedRegion::new(RevealOptions::default());
        let b = TrackedRegion::new(RevealOptions::default());
        assert_ne!(a.id(), b.id());
    }
}
