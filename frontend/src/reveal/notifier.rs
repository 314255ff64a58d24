use crate::error::ViewError;
use crate::lifecycle::CancelGuard;

/// Host capability reporting how much of a target is inside the viewport.
pub trait VisibilityNotifier {
    type Target;

    /// Starts observing `target`. `on_change` receives the visible fraction,
    /// `0.0` while the target is outside the viewport. Hosts deliver an initial
    /// observation without waiting for a scroll. Dropping the returned guard
    /// stops the observation.
    fn observe(
        &self,
        target: &Self::Target,
        threshold: f64,
        on_change: Box<dyn FnMut(f64)>,
    ) -> Result<CancelGuard, ViewError>;
}

/// One-shot timers. Dropping the guard cancels a timer that has not fired.
pub trait Timers {
    fn after(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> CancelGuard;
}
