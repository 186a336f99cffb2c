//! Observable splitter divider positions and two-way divider binding.

use std::{
    cell::{Cell, RefCell},
    rc::{Rc, Weak},
};

use log::warn;

type DividerListener = Rc<dyn Fn(f64)>;

/// Relative offset of one splitter boundary in `[0.0, 1.0]`.
///
/// Lives on the UI thread only. Listeners run synchronously after each
/// effective change and may write back to other dividers.
pub struct DividerPosition {
    value: Cell<f64>,
    listeners: RefCell<Vec<DividerListener>>,
}

impl DividerPosition {
    /// Creates a shared divider at `initial` (clamped into range).
    pub fn new(initial: f64) -> Rc<Self> {
        let initial = if initial.is_finite() {
            initial.clamp(0.0, 1.0)
        } else {
            0.5
        };
        Rc::new(Self {
            value: Cell::new(initial),
            listeners: RefCell::new(Vec::new()),
        })
    }

    pub fn get(&self) -> f64 {
        self.value.get()
    }

    /// Moves the divider and notifies listeners when the value changed.
    pub fn set(&self, position: f64) {
        if !position.is_finite() {
            warn!(
                "Ignoring non-finite divider position {}. Keeping {}",
                position,
                self.value.get()
            );
            return;
        }
        let next = position.clamp(0.0, 1.0);
        if next == self.value.get() {
            return;
        }
        self.value.set(next);

        // Snapshot so a listener can subscribe or re-enter `set` safely.
        let listeners: Vec<DividerListener> = self.listeners.borrow().clone();
        for listener in listeners {
            listener(next);
        }
    }

    /// Registers a callback invoked with every new value.
    pub fn subscribe(&self, listener: impl Fn(f64) + 'static) {
        self.listeners.borrow_mut().push(Rc::new(listener));
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl std::fmt::Debug for DividerPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DividerPosition")
            .field("value", &self.value.get())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Bidirectional link keeping two dividers at the same value.
#[derive(Debug)]
pub struct DividerBinding {
    first: Weak<DividerPosition>,
    second: Weak<DividerPosition>,
}

impl DividerBinding {
    /// Links `first` to `second`. `first` adopts `second`'s current value.
    pub fn bind(first: &Rc<DividerPosition>, second: &Rc<DividerPosition>) -> Self {
        first.set(second.get());

        let propagating = Rc::new(Cell::new(false));
        forward_changes(first, second, &propagating);
        forward_changes(second, first, &propagating);

        Self {
            first: Rc::downgrade(first),
            second: Rc::downgrade(second),
        }
    }

    /// Returns `true` while both endpoints are alive.
    pub fn is_active(&self) -> bool {
        self.first.strong_count() > 0 && self.second.strong_count() > 0
    }
}

fn forward_changes(
    source: &Rc<DividerPosition>,
    target: &Rc<DividerPosition>,
    propagating: &Rc<Cell<bool>>,
) {
    let target = Rc::downgrade(target);
    let propagating = Rc::clone(propagating);
    source.subscribe(move |value| {
        if propagating.get() {
            return;
        }
        let Some(target) = target.upgrade() else {
            return;
        };
        propagating.set(true);
        target.set(value);
        propagating.set(false);
    });
}
