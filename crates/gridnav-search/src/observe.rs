//! Per-step observation side channel.
//!
//! The traversal loop reports what it does through an [`Observer`]. Observers
//! are informational only: they see positions and roles, never the frontier
//! or the grid, and cannot change the outcome except by asking to abort.

use std::sync::atomic::{AtomicBool, Ordering};

use gridnav_core::{Pos, Role};

/// One step of a running search.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Observation {
    pub pos: Pos,
    pub role: Role,
}

impl Observation {
    #[inline]
    pub const fn new(pos: Pos, role: Role) -> Self {
        Self { pos, role }
    }
}

/// Receiver for search observations.
pub trait Observer {
    /// Called synchronously for every observation, in emission order.
    fn observe(&mut self, obs: Observation);

    /// Polled once per loop iteration; `true` stops the search with
    /// [`SearchError::Cancelled`](crate::SearchError::Cancelled).
    fn aborted(&self) -> bool {
        false
    }
}

impl<F: FnMut(Observation)> Observer for F {
    #[inline]
    fn observe(&mut self, obs: Observation) {
        self(obs)
    }
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Observer for Silent {
    #[inline]
    fn observe(&mut self, _obs: Observation) {}
}

/// Observer that keeps every observation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recorder {
    pub events: Vec<Observation>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Positions observed with `role`, in emission order.
    pub fn positions(&self, role: Role) -> Vec<Pos> {
        self.events
            .iter()
            .filter(|o| o.role == role)
            .map(|o| o.pos)
            .collect()
    }
}

impl Observer for Recorder {
    fn observe(&mut self, obs: Observation) {
        self.events.push(obs);
    }
}

/// Wraps an observer with a shared abort flag.
///
/// The flag may be raised from the wrapped observer itself, or from any
/// other holder of the reference.
pub struct WithAbort<'a, O> {
    pub observer: O,
    flag: &'a AtomicBool,
}

impl<'a, O: Observer> WithAbort<'a, O> {
    pub fn new(observer: O, flag: &'a AtomicBool) -> Self {
        Self { observer, flag }
    }
}

impl<O: Observer> Observer for WithAbort<'_, O> {
    #[inline]
    fn observe(&mut self, obs: Observation) {
        self.observer.observe(obs);
    }

    #[inline]
    fn aborted(&self) -> bool {
        self.flag.load(Ordering::Relaxed) || self.observer.aborted()
    }
}
