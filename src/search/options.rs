use std::time::Duration;

/// Tunables for a [`KnightSearch`](super::KnightSearch).
///
/// The default runs an unbounded, single-threaded search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Wall-clock budget for the whole search. `None` means no limit.
    pub time_limit: Option<Duration>,
    /// Search starting cells on the rayon thread pool.
    ///
    /// Only honoured when the crate is built with the `parallel` feature.
    pub parallel: bool,
}

impl SearchOptions {
    /// Sets the wall-clock budget.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Enables or disables the parallel search.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
