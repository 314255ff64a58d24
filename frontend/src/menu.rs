use std::rc::Rc;

use log::debug;
use yew::Reducible;

use crate::sections::Anchor;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

pub enum MenuAction {
    Toggle,
    Close,
    /// A link inside the overlay was activated.
    Navigate(Anchor),
}

/// Open/closed state of the mobile navigation overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavigationMenuController {
    state: MenuState,
}

impl NavigationMenuController {
    #[cfg(test)]
    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }

    pub fn toggle(&mut self) {
        self.state = match self.state {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
        debug!("mobile menu {:?}", self.state);
    }

    pub fn close(&mut self) {
        if self.state == MenuState::Open {
            self.state = MenuState::Closed;
            debug!("mobile menu closed");
        }
    }

    /// Collapses the overlay and returns the fragment the browser scrolls to.
    pub fn activate(&mut self, anchor: Anchor) -> String {
        self.close();
        anchor.href()
    }

    pub fn apply(&mut self, action: MenuAction) {
        match action {
            MenuAction::Toggle => self.toggle(),
            MenuAction::Close => self.close(),
            MenuAction::Navigate(anchor) => {
                self.activate(anchor);
            }
        }
    }
}

impl Reducible for NavigationMenuController {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        next.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}
