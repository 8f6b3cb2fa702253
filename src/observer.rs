//! Tick observer trait for monitoring rope simulation progress.

/// Trait for observing rope simulation ticks.
///
/// Implement this trait to monitor solver progress (e.g., for debugging,
/// visualization, or performance profiling). All methods have default
/// no-op implementations.
pub trait TickObserver {
    /// Called after vertex 0 has been moved to the anchor position.
    fn on_anchor(&mut self) {}

    /// Called after all free vertices have been integrated (Verlet step).
    fn on_integrate(&mut self) {}

    /// Called when a vertex is pushed out of a collider.
    fn on_collision(&mut self, _vertex: usize, _collider: usize) {}

    /// Called when a constraint with coincident endpoints is split by jitter.
    fn on_jitter(&mut self, _constraint: usize) {}

    /// Called after each relaxation pass.
    fn on_relaxation_pass(&mut self, _iteration: usize) {}

    /// Called when a tick is fully complete.
    fn on_tick_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpTickObserver;

impl TickObserver for NoOpTickObserver {}

/// Counts solver events across however many ticks it observes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickStats {
    pub ticks: usize,
    pub relaxation_passes: usize,
    pub collisions: usize,
    pub jitters: usize,
}

impl TickObserver for TickStats {
    fn on_collision(&mut self, _vertex: usize, _collider: usize) {
        self.collisions += 1;
    }

    fn on_jitter(&mut self, _constraint: usize) {
        self.jitters += 1;
    }

    fn on_relaxation_pass(&mut self, _iteration: usize) {
        self.relaxation_passes += 1;
    }

    fn on_tick_complete(&mut self) {
        self.ticks += 1;
    }
}
