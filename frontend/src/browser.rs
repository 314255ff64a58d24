//! `web-sys` and `gloo-timers` implementations of the host interfaces.

use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};

use crate::error::ViewError;
use crate::lifecycle::CancelGuard;
use crate::reveal::{Timers, VisibilityNotifier};
use crate::scroll::ScrollSource;

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// Viewport observation backed by `IntersectionObserver`, one per target.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNotifier;

impl VisibilityNotifier for BrowserNotifier {
    type Target = Element;

    fn observe(
        &self,
        target: &Element,
        threshold: f64,
        mut on_change: Box<dyn FnMut(f64)>,
    ) -> Result<CancelGuard, ViewError> {
        let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let visible = if entry.is_intersecting() {
                    entry.intersection_ratio()
                } else {
                    0.0
                };
                on_change(visible);
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));

        // Throws when the host has no IntersectionObserver
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|err| ViewError::ObserverUnavailable(describe(&err)))?;
        observer.observe(target);

        let target = target.clone();
        Ok(CancelGuard::new(move || {
            observer.unobserve(&target);
            observer.disconnect();
            drop(callback);
        }))
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimers;

impl Timers for BrowserTimers {
    fn after(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> CancelGuard {
        let timeout = Timeout::new(delay_ms, callback);
        // dropping a Timeout clears it
        CancelGuard::new(move || drop(timeout))
    }
}

/// The window's vertical scroll position.
pub struct WindowScroll {
    window: Window,
}

impl WindowScroll {
    pub fn current() -> Result<Self, ViewError> {
        let window = web_sys::window()
            .ok_or_else(|| ViewError::ScrollUnavailable("no global window".to_string()))?;
        Ok(Self { window })
    }
}

impl ScrollSource for WindowScroll {
    fn offset(&self) -> Result<f64, ViewError> {
        self.window
            .scroll_y()
            .map_err(|err| ViewError::ScrollUnavailable(describe(&err)))
    }

    fn subscribe(&self, mut on_scroll: Box<dyn FnMut(f64)>) -> Result<CancelGuard, ViewError> {
        let window = self.window.clone();
        let scroll_callback = Closure::wrap(Box::new(move || {
            if let Ok(offset) = window.scroll_y() {
                on_scroll(offset);
            }
        }) as Box<dyn FnMut()>);

        self.window
            .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
            .map_err(|err| ViewError::ScrollUnavailable(describe(&err)))?;

        let window = self.window.clone();
        Ok(CancelGuard::new(move || {
            if let Err(err) = window.remove_event_listener_with_callback(
                "scroll",
                scroll_callback.as_ref().unchecked_ref(),
            ) {
                warn!("failed to remove scroll listener: {}", describe(&err));
            }
        }))
    }
}
