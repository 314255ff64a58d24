use std::rc::Rc;

use log::warn;
use web_sys::Element;
use yew::prelude::*;

use crate::browser::{BrowserNotifier, BrowserTimers, WindowScroll};
use crate::config::RevealOptions;
use crate::reveal::VisibilityTracker;
use crate::scroll::{NavStyle, ScrollStateMonitor};

/// Tracks `node` and returns whether its reveal should be presented.
///
/// The tracker lives as long as the mount. A node that never rendered an
/// element is shown right away.
#[hook]
pub fn use_reveal(node: NodeRef, options: RevealOptions) -> bool {
    let presented = use_state(|| false);

    {
        let presented = presented.setter();
        use_effect_with_deps(
            move |(node, options)| {
                let timers = Rc::new(BrowserTimers);
                let on_present = move || presented.set(true);
                let tracker = match node.cast::<Element>() {
                    Some(element) => {
                        VisibilityTracker::mount(&BrowserNotifier, &element, timers, *options, on_present)
                    }
                    None => VisibilityTracker::unobserved(timers, *options, on_present),
                };
                move || drop(tracker)
            },
            (node, options),
        );
    }

    *presented
}

/// Navigation bar style for the current scroll offset.
#[hook]
pub fn use_nav_style(threshold_px: f64) -> NavStyle {
    let style = use_state(|| NavStyle::Transparent);

    {
        let style = style.setter();
        use_effect_with_deps(
            move |threshold_px| {
                let monitor = match WindowScroll::current() {
                    Ok(source) => Some(ScrollStateMonitor::attach(&source, *threshold_px, move |state| {
                        style.set(state.nav_style())
                    })),
                    Err(err) => {
                        warn!("{}, keeping default navigation style", err);
                        None
                    }
                };
                move || drop(monitor)
            },
            threshold_px,
        );
    }

    *style
}
