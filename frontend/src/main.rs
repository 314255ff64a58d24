use yew::prelude::*;
use log::info;

mod browser;
mod config;
mod error;
mod hooks;
mod lifecycle;
mod menu;
mod reveal;
mod scroll;
mod sections;
#[cfg(test)]
mod fakes;

mod components {
    pub mod cards;
    pub mod fade_in;
    pub mod nav;
}
mod pages {
    pub mod landing;
}

use components::nav::Nav;
use hooks::use_nav_style;
use menu::{MenuAction, NavigationMenuController};
use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    // One scroll monitor and one menu controller per page view
    let style = use_nav_style(config::SCROLL_THRESHOLD_PX);
    let menu = use_reducer(NavigationMenuController::default);

    let on_menu = {
        let menu = menu.clone();
        Callback::from(move |action: MenuAction| menu.dispatch(action))
    };

    html! {
        <>
            <Nav style={style} menu={*menu} on_menu={on_menu} />
            <Landing />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting landing page");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use crate::config::{RevealOptions, SCROLL_THRESHOLD_PX};
    use crate::fakes::{FakeNotifier, FakeScroll, FakeTimers};
    use crate::menu::{MenuAction, MenuState, NavigationMenuController};
    use crate::reveal::VisibilityTracker;
    use crate::scroll::{NavStyle, ScrollStateMonitor};
    use crate::sections::Anchor;

    #[test]
    fn page_view_scenario() {
        let scroll = FakeScroll::at(0.0);
        let monitor = ScrollStateMonitor::attach(&scroll, SCROLL_THRESHOLD_PX, |_| {});
        let mut menu = NavigationMenuController::default();
        assert_eq!(monitor.nav_style(), NavStyle::Transparent);
        assert_eq!(menu.state(), MenuState::Closed);

        scroll.scroll_to(100.0);
        assert_eq!(monitor.nav_style(), NavStyle::Opaque);

        menu.apply(MenuAction::Toggle);
        assert_eq!(menu.state(), MenuState::Open);

        let anchor = Anchor::from_label("Roadmap").unwrap();
        let fragment = menu.activate(anchor);
        assert_eq!(menu.state(), MenuState::Closed);
        assert_eq!(fragment, "#roadmap");
    }

    #[test]
    fn sections_reveal_independently_of_the_scroll_signal() {
        let scroll = FakeScroll::at(0.0);
        let notifier = FakeNotifier::default();
        let timers = FakeTimers::default();
        notifier.place(0, 1.0);

        let shown = Rc::new(Cell::new(0));
        let mount = |target: u32, delay_ms: u32| {
            let shown = shown.clone();
            VisibilityTracker::mount(
                &notifier,
                &target,
                Rc::new(timers.clone()),
                RevealOptions::with_delay(delay_ms),
                move || shown.set(shown.get() + 1),
            )
        };
        let hero = mount(0, 0);
        let cards: Vec<_> = [100, 200, 300].into_iter().map(|delay| mount(1, delay)).collect();
        let monitor = ScrollStateMonitor::attach(&scroll, SCROLL_THRESHOLD_PX, |_| {});

        assert!(hero.is_presented());
        assert!(cards.iter().all(|card| !card.is_revealed()));

        scroll.scroll_to(900.0);
        notifier.deliver(1, 0.4);
        assert!(monitor.scrolled_past_threshold());
        assert!(cards.iter().all(|card| card.is_revealed()));
        assert_eq!(shown.get(), 1);

        timers.advance(300);
        assert!(cards.iter().all(|card| card.is_presented()));
        assert_eq!(shown.get(), 4);

        scroll.scroll_to(0.0);
        notifier.deliver(1, 0.0);
        assert!(!monitor.scrolled_past_threshold());
        assert!(cards.iter().all(|card| card.is_revealed()));
    }
}
