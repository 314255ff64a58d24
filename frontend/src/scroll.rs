use std::cell::Cell;
use std::rc::Rc;

use log::{debug, warn};

use crate::error::ViewError;
use crate::lifecycle::CancelGuard;

/// Host capability reporting the page's vertical scroll offset.
pub trait ScrollSource {
    fn offset(&self) -> Result<f64, ViewError>;

    /// `on_scroll` receives the new offset on every scroll signal.
    fn subscribe(&self, on_scroll: Box<dyn FnMut(f64)>) -> Result<CancelGuard, ViewError>;
}

/// Navigation bar appearance derived from the scroll signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavStyle {
    Transparent,
    Opaque,
}

impl NavStyle {
    pub fn class(self) -> &'static str {
        match self {
            NavStyle::Transparent => "top-nav transparent",
            NavStyle::Opaque => "top-nav scrolled",
        }
    }
}

/// Unlike a reveal latch, this flag follows the offset in both directions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollState {
    threshold_px: f64,
    scrolled_past_threshold: bool,
}

impl ScrollState {
    pub fn new(threshold_px: f64) -> Self {
        Self {
            threshold_px,
            scrolled_past_threshold: false,
        }
    }

    pub fn scrolled_past_threshold(&self) -> bool {
        self.scrolled_past_threshold
    }

    /// Returns `true` when the flag flipped.
    pub fn update(&mut self, offset: f64) -> bool {
        let past = offset > self.threshold_px;
        let changed = past != self.scrolled_past_threshold;
        self.scrolled_past_threshold = past;
        changed
    }

    pub fn nav_style(&self) -> NavStyle {
        if self.scrolled_past_threshold {
            NavStyle::Opaque
        } else {
            NavStyle::Transparent
        }
    }
}

/// Page-view scoped observer of the scroll offset.
///
/// The subscription is held for as long as the monitor lives.
pub struct ScrollStateMonitor {
    state: Rc<Cell<ScrollState>>,
    subscription: Option<CancelGuard>,
}

impl ScrollStateMonitor {
    /// `on_change` receives the new state whenever the threshold flag flips,
    /// including once at attach time if the page is already scrolled.
    pub fn attach<S: ScrollSource>(
        source: &S,
        threshold_px: f64,
        on_change: impl Fn(ScrollState) + 'static,
    ) -> Self {
        let state = Rc::new(Cell::new(ScrollState::new(threshold_px)));
        let on_change = Rc::new(on_change);

        let apply = {
            let state = state.clone();
            let on_change = on_change.clone();
            move |offset: f64| {
                let mut next = state.get();
                if next.update(offset) {
                    state.set(next);
                    debug!("scroll offset {}, past threshold: {}", offset, next.scrolled_past_threshold());
                    on_change(next);
                }
            }
        };

        // Initial check
        match source.offset() {
            Ok(offset) => apply(offset),
            Err(err) => warn!("{}, keeping default navigation style", err),
        }

        let subscription = match source.subscribe(Box::new(apply)) {
            Ok(guard) => Some(guard),
            Err(err) => {
                warn!("{}, keeping default navigation style", err);
                let mut fallback = state.get();
                if fallback.update(0.0) {
                    state.set(fallback);
                    on_change(fallback);
                }
                None
            }
        };

        Self { state, subscription }
    }
}

impl Drop for ScrollStateMonitor {
    fn drop(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.cancel();
        }
        debug!("scroll monitor detached ({:?})", self.state.get().nav_style());
    }
}

#[cfg(test)]
impl ScrollStateMonitor {
    pub fn scrolled_past_threshold(&self) -> bool {
        self.state.get().scrolled_past_threshold()
    }

    pub fn nav_style(&self) -> NavStyle {
        self.state.get().nav_style()
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }
}
