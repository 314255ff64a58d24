use log::{warn, Level};

use crate::error::ViewError;

/// Sign-up/login entry point shared by every call to action.
pub const APP_URL: &str = "https://app.repostai.io";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const CONTACT_MAILTO: &str = "mailto:info@launchnext.pro";

/// Vertical offset past which the navigation bar turns opaque.
pub const SCROLL_THRESHOLD_PX: f64 = 20.0;

pub const DEFAULT_VISIBILITY_THRESHOLD: f64 = 0.1;
pub const DEFAULT_PRESENTATION_DELAY_MS: u32 = 0;

/// Browsers round the reported intersection ratio.
pub const RATIO_TOLERANCE: f64 = 1e-3;

/// Per-section reveal configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    threshold: f64,
    delay_ms: u32,
}

impl RevealOptions {
    pub fn new(threshold: f64, delay_ms: u32) -> Result<Self, ViewError> {
        // NaN fails both comparisons
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(ViewError::InvalidThreshold(threshold));
        }
        Ok(Self { threshold, delay_ms })
    }

    /// Like [`RevealOptions::new`], but an invalid threshold falls back to
    /// the default one instead of failing.
    pub fn or_default_threshold(threshold: f64, delay_ms: u32) -> Self {
        Self::new(threshold, delay_ms).unwrap_or_else(|err| {
            warn!("{}, using the default threshold", err);
            Self::with_delay(delay_ms)
        })
    }

    pub fn with_delay(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            ..Self::default()
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_VISIBILITY_THRESHOLD,
            delay_ms: DEFAULT_PRESENTATION_DELAY_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_thresholds_outside_unit_interval() {
        assert_eq!(RevealOptions::new(0.0, 0), Err(ViewError::InvalidThreshold(0.0)));
        assert!(RevealOptions::new(1.5, 0).is_err());
        assert!(RevealOptions::new(-0.2, 0).is_err());
        assert!(RevealOptions::new(f64::NAN, 0).is_err());
    }

    #[test]
    fn accepts_full_visibility_and_keeps_delay() {
        let options = RevealOptions::new(1.0, 300).unwrap();
        assert_eq!(options.threshold(), 1.0);
        assert_eq!(options.delay_ms(), 300);
    }

    #[test]
    fn invalid_threshold_falls_back_but_keeps_delay() {
        let options = RevealOptions::or_default_threshold(f64::NAN, 250);
        assert_eq!(options, RevealOptions::with_delay(250));
        let options = RevealOptions::or_default_threshold(3.0, 0);
        assert_eq!(options.threshold(), DEFAULT_VISIBILITY_THRESHOLD);
    }

    #[test]
    fn valid_threshold_is_kept_as_given() {
        let options = RevealOptions::or_default_threshold(0.6, 100);
        assert_eq!(options.threshold(), 0.6);
        assert_eq!(options.delay_ms(), 100);
    }

    #[test]
    fn every_call_to_action_targets_the_hosted_app() {
        assert_eq!(APP_URL, "https://app.repostai.io");
        assert!(CONTACT_MAILTO.starts_with("mailto:"));
    }

    #[test]
    fn default_is_ten_percent_without_delay() {
        let options = RevealOptions::default();
        assert_eq!(options.threshold(), 0.1);
        assert_eq!(options.delay_ms(), 0);
        assert_eq!(RevealOptions::with_delay(200).threshold(), 0.1);
    }
}
