use std::cell::Cell;
use std::rc::Rc;

use log::debug;

use super::notifier::Timers;
use crate::lifecycle::CancelGuard;

/// Defers the visible effect of a latch by a fixed delay.
///
/// The latch itself is never delayed. The scheduler only decides when the
/// owner is told to present it, and it presents at most once.
pub struct RevealScheduler {
    delay_ms: u32,
    timers: Rc<dyn Timers>,
    presented: Rc<Cell<bool>>,
    pending: Option<CancelGuard>,
    on_present: Rc<dyn Fn()>,
}

impl RevealScheduler {
    pub fn new(delay_ms: u32, timers: Rc<dyn Timers>, on_present: impl Fn() + 'static) -> Self {
        Self {
            delay_ms,
            timers,
            presented: Rc::new(Cell::new(false)),
            pending: None,
            on_present: Rc::new(on_present),
        }
    }

    #[cfg(test)]
    pub fn is_presented(&self) -> bool {
        self.presented.get()
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some() && !self.presented.get()
    }

    /// Called when the owning region latches. Repeat calls never stack delays.
    pub fn latched(&mut self) {
        if self.presented.get() || self.pending.is_some() {
            return;
        }
        if self.delay_ms == 0 {
            self.present_now();
            return;
        }

        let presented = Rc::downgrade(&self.presented);
        let on_present = self.on_present.clone();
        debug!("presentation deferred by {}ms", self.delay_ms);
        self.pending = Some(self.timers.after(
            self.delay_ms,
            Box::new(move || {
                // the scheduler is gone, nothing left to present
                let Some(presented) = presented.upgrade() else {
                    return;
                };
                if !presented.replace(true) {
                    on_present();
                }
            }),
        ));
    }

    /// Skips any delay. Used when the content must not stay hidden.
    pub fn present_now(&mut self) {
        self.pending = None;
        if !self.presented.replace(true) {
            (self.on_present)();
        }
    }

    /// Drops a pending timer before it fires.
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            if !self.presented.get() {
                debug!("pending presentation cancelled");
            }
            pending.cancel();
        }
    }
}
