use crate::controller::RunState;

/// What a [`crate::Controller`] command just changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// The board advanced; carries the new generation number.
    Generation(u64),
    Cell { row: usize, col: usize },
    Cleared,
    Seeded,
    RunState(RunState),
    Speed(u64),
}

/// Receives a notification after every state change so a renderer can redraw.
pub trait Observer: Send {
    fn on_change(&self, change: &Change);
}

impl<F> Observer for F
where
    F: Fn(&Change) + Send,
{
    fn on_change(&self, change: &Change) {
        self(change)
    }
}
