use std::fmt;

/// What happened to a store. Positions are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreChange {
    Added(usize),
    Removed(usize),
    Replaced(usize),
    /// Whole contents swapped out (bulk set or clear).
    Reset,
}

pub type Listener = Box<dyn FnMut(StoreChange)>;

/// Change listeners attached to a store. Stores call `notify` only after a
/// mutation has completed, so a listener that reads the store back always
/// sees the post-mutation state.
#[derive(Default)]
pub struct Listeners {
    listeners: Vec<Listener>,
}

impl Listeners {
    pub fn register(&mut self, listener: impl FnMut(StoreChange) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn notify(&mut self, change: StoreChange) {
        for listener in &mut self.listeners {
            listener(change);
        }
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Listeners({})", self.listeners.len())
    }
}
