use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};

use super::notifier::{Timers, VisibilityNotifier};
#[cfg(test)]
use super::region::{RegionId, RevealState};
use super::region::TrackedRegion;
use super::scheduler::RevealScheduler;
use crate::config::RevealOptions;
use crate::lifecycle::CancelGuard;

/// One mounted, tracked section.
///
/// Owns its viewport observation and its presentation timer. Dropping the
/// tracker releases both, whether or not the region ever latched.
pub struct VisibilityTracker {
    observation: Option<CancelGuard>,
    region: Rc<RefCell<TrackedRegion>>,
    scheduler: Rc<RefCell<RevealScheduler>>,
}

impl VisibilityTracker {
    pub fn mount<N: VisibilityNotifier>(
        notifier: &N,
        target: &N::Target,
        timers: Rc<dyn Timers>,
        options: RevealOptions,
        on_present: impl Fn() + 'static,
    ) -> Self {
        let region = Rc::new(RefCell::new(TrackedRegion::new(options)));
        let scheduler = Rc::new(RefCell::new(RevealScheduler::new(
            options.delay_ms(),
            timers,
            on_present,
        )));
        let id = region.borrow().id();
        debug!("{} mounted (threshold {}, delay {}ms)", id, options.threshold(), options.delay_ms());

        let on_change = {
            let region = region.clone();
            let scheduler = scheduler.clone();
            Box::new(move |visible_fraction: f64| {
                let latched = region.borrow_mut().observe(visible_fraction);
                if latched {
                    debug!("{} revealed at {:.3} visible", id, visible_fraction);
                    scheduler.borrow_mut().latched();
                }
            })
        };

        match notifier.observe(target, options.threshold(), on_change) {
            Ok(guard) => Self {
                observation: Some(guard),
                region,
                scheduler,
            },
            Err(err) => {
                warn!("{}: {}, showing content immediately", id, err);
                Self::shown_at_once(region, scheduler)
            }
        }
    }

    /// Tracker for content that has nothing to observe, e.g. a node that
    /// never rendered. The content is latched and presented right away.
    pub fn unobserved(timers: Rc<dyn Timers>, options: RevealOptions, on_present: impl Fn() + 'static) -> Self {
        let region = Rc::new(RefCell::new(TrackedRegion::new(options)));
        let scheduler = Rc::new(RefCell::new(RevealScheduler::new(
            options.delay_ms(),
            timers,
            on_present,
        )));
        warn!("{} has no target, showing content immediately", region.borrow().id());
        Self::shown_at_once(region, scheduler)
    }

    fn shown_at_once(region: Rc<RefCell<TrackedRegion>>, scheduler: Rc<RefCell<RevealScheduler>>) -> Self {
        region.borrow_mut().force_reveal();
        scheduler.borrow_mut().present_now();
        Self {
            observation: None,
            region,
            scheduler,
        }
    }
}

#[cfg(test)]
impl VisibilityTracker {
    pub fn id(&self) -> RegionId {
        self.region.borrow().id()
    }

    pub fn state(&self) -> RevealState {
        self.region.borrow().state()
    }

    pub fn is_revealed(&self) -> bool {
        self.region.borrow().is_revealed()
    }

    pub fn is_presented(&self) -> bool {
        self.scheduler.borrow().is_presented()
    }

    pub fn is_observing(&self) -> bool {
        self.observation.is_some()
    }
}

impl Drop for VisibilityTracker {
    fn drop(&mut self) {
        if let Some(observation) = self.observation.take() {
            observation.cancel();
        }
        self.scheduler.borrow_mut().cancel();
        debug!("{} released ({:?})", self.region.borrow().id(), self.region.borrow().state());
    }
}
