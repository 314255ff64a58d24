//! Synthetic hosts for driving the view state without a browser.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use crate::error::ViewError;
use crate::lifecycle::CancelGuard;
use crate::reveal::{Timers, VisibilityNotifier};
use crate::scroll::ScrollSource;

type Listener<T> = Rc<RefCell<Box<dyn FnMut(T)>>>;

#[derive(Default)]
struct NotifierInner {
    next: usize,
    layout: HashMap<u32, f64>,
    observers: BTreeMap<usize, (u32, Listener<f64>)>,
}

/// Delivers intersection changes on demand. Targets are plain numbers.
#[derive(Clone, Default)]
pub struct FakeNotifier {
    inner: Rc<RefCell<NotifierInner>>,
    failure: Option<ViewError>,
}

impl FakeNotifier {
    pub fn failing(err: ViewError) -> Self {
        Self {
            failure: Some(err),
            ..Self::default()
        }
    }

    /// Sets the visible fraction reported on the initial observation pass.
    pub fn place(&self, target: u32, visible_fraction: f64) {
        self.inner.borrow_mut().layout.insert(target, visible_fraction);
    }

    pub fn deliver(&self, target: u32, visible_fraction: f64) {
        self.inner.borrow_mut().layout.insert(target, visible_fraction);
        let listeners: Vec<_> = self
            .inner
            .borrow()
            .observers
            .values()
            .filter(|(t, _)| *t == target)
            .map(|(_, l)| l.clone())
            .collect();
        for listener in listeners {
            (&mut *listener.borrow_mut())(visible_fraction);
        }
    }

    pub fn active(&self) -> usize {
        self.inner.borrow().observers.len()
    }
}

impl VisibilityNotifier for FakeNotifier {
    type Target = u32;

    fn observe(
        &self,
        target: &u32,
        _threshold: f64,
        on_change: Box<dyn FnMut(f64)>,
    ) -> Result<CancelGuard, ViewError> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        let listener: Listener<f64> = Rc::new(RefCell::new(on_change));
        let (key, initial) = {
            let mut inner = self.inner.borrow_mut();
            let key = inner.next;
            inner.next += 1;
            inner.observers.insert(key, (*target, listener.clone()));
            (key, inner.layout.get(target).copied().unwrap_or(0.0))
        };
        (&mut *listener.borrow_mut())(initial);

        let inner = Rc::downgrade(&self.inner);
        Ok(CancelGuard::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner.borrow_mut().observers.remove(&key);
            }
        }))
    }
}

#[derive(Default)]
struct TimersInner {
    now: u64,
    next: usize,
    pending: BTreeMap<usize, (u64, Box<dyn FnOnce()>)>,
}

/// Manual clock. Timers fire only inside [`FakeTimers::advance`].
#[derive(Clone, Default)]
pub struct FakeTimers {
    inner: Rc<RefCell<TimersInner>>,
}

impl FakeTimers {
    pub fn advance(&self, ms: u64) {
        let deadline = self.inner.borrow().now + ms;
        loop {
            let due = {
                let mut inner = self.inner.borrow_mut();
                let next = inner
                    .pending
                    .iter()
                    .filter(|(_, (at, _))| *at <= deadline)
                    .min_by_key(|(key, (at, _))| (*at, **key))
                    .map(|(key, (at, _))| (*key, *at));
                match next {
                    Some((key, at)) => {
                        inner.now = at;
                        inner.pending.remove(&key).map(|(_, callback)| callback)
                    }
                    None => None,
                }
            };
            match due {
                Some(callback) => callback(),
                None => break,
            }
        }
        self.inner.borrow_mut().now = deadline;
    }

    pub fn pending(&self) -> usize {
        self.inner.borrow().pending.len()
    }
}

impl Timers for FakeTimers {
    fn after(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> CancelGuard {
        let key = {
            let mut inner = self.inner.borrow_mut();
            let key = inner.next;
            inner.next += 1;
            let at = inner.now + u64::from(delay_ms);
            inner.pending.insert(key, (at, callback));
            key
        };
        let inner = Rc::downgrade(&self.inner);
        CancelGuard::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner.borrow_mut().pending.remove(&key);
            }
        })
    }
}

#[derive(Default)]
struct ScrollInner {
    offset: f64,
    next: usize,
    listeners: BTreeMap<usize, Listener<f64>>,
}

/// Scriptable vertical scroll position.
#[derive(Clone, Default)]
pub struct FakeScroll {
    inner: Rc<RefCell<ScrollInner>>,
    failure: Option<ViewError>,
}

impl FakeScroll {
    pub fn at(offset: f64) -> Self {
        let scroll = Self::default();
        scroll.inner.borrow_mut().offset = offset;
        scroll
    }

    pub fn failing(err: ViewError) -> Self {
        Self {
            failure: Some(err),
            ..Self::default()
        }
    }

    pub fn scroll_to(&self, offset: f64) {
        self.inner.borrow_mut().offset = offset;
        let listeners: Vec<_> = self.inner.borrow().listeners.values().cloned().collect();
        for listener in listeners {
            (&mut *listener.borrow_mut())(offset);
        }
    }

    pub fn listeners(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl ScrollSource for FakeScroll {
    fn offset(&self) -> Result<f64, ViewError> {
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(self.inner.borrow().offset),
        }
    }

    fn subscribe(&self, on_scroll: Box<dyn FnMut(f64)>) -> Result<CancelGuard, ViewError> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        let key = {
            let mut inner = self.inner.borrow_mut();
            let key = inner.next;
            inner.next += 1;
            inner.listeners.insert(key, Rc::new(RefCell::new(on_scroll)));
            key
        };
        let inner = Rc::downgrade(&self.inner);
        Ok(CancelGuard::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner.borrow_mut().listeners.remove(&key);
            }
        }))
    }
}
