//! Refresh coordination state machine for `session_client` 401 handling.
//!
//! DESIGN
//! ======
//! The coordinator is pure and single-threaded: it decides what each request
//! that observed a 401 should do, and holds the waiters parked behind the
//! in-flight refresh. Generic over the waiter type so the machine tests
//! without a browser; the hydrate client parks oneshot senders, tests park
//! plain markers.

#[cfg(test)]
#[path = "session_client_refresh_test.rs"]
mod session_client_refresh_test;

/// What a request that just observed a 401 should do next.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum RefreshDirective {
    /// No refresh in flight: the caller owns the refresh call and must
    /// drain the queue with its outcome.
    Begin,
    /// A refresh is already in flight: park a waiter and await the drain.
    Wait,
    /// The request was already replayed once; surface the 401 unchanged.
    PassThrough,
}

/// Serializes token refreshes so N concurrent 401s cause exactly one
/// refresh call.
#[cfg(any(test, feature = "hydrate"))]
pub(super) struct RefreshCoordinator<W> {
    phase: Phase<W>,
}

#[cfg(any(test, feature = "hydrate"))]
enum Phase<W> {
    Idle,
    Refreshing { waiters: Vec<W> },
}

#[cfg(any(test, feature = "hydrate"))]
impl<W> Default for RefreshCoordinator<W> {
    fn default() -> Self {
        Self { phase: Phase::Idle }
    }
}

#[cfg(any(test, feature = "hydrate"))]
impl<W> RefreshCoordinator<W> {
    pub(super) fn new() -> Self {
        Self::default()
    }

    /// Decide how a request that received a 401 proceeds.
    ///
    /// A request that has already been replayed never triggers or joins a
    /// refresh; its 401 is terminal.
    pub(super) fn on_unauthorized(&mut self, already_retried: bool) -> RefreshDirective {
        if already_retried {
            return RefreshDirective::PassThrough;
        }
        match self.phase {
            Phase::Refreshing { .. } => RefreshDirective::Wait,
            Phase::Idle => {
                self.phase = Phase::Refreshing { waiters: Vec::new() };
                RefreshDirective::Begin
            }
        }
    }

    /// Park a waiter behind the in-flight refresh.
    ///
    /// Parking while idle drops the waiter, which fails closed: a oneshot
    /// receiver whose sender is gone resolves as an error.
    pub(super) fn park(&mut self, waiter: W) {
        if let Phase::Refreshing { waiters } = &mut self.phase {
            waiters.push(waiter);
        }
    }

    /// End the refresh and hand every parked waiter to the owner for
    /// draining. Resets to idle; a second call yields nothing.
    pub(super) fn complete(&mut self) -> Vec<W> {
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Refreshing { waiters } => waiters,
            Phase::Idle => Vec::new(),
        }
    }

    #[must_use]
    pub(super) fn is_refreshing(&self) -> bool {
        matches!(self.phase, Phase::Refreshing { .. })
    }

    #[must_use]
    pub(super) fn parked(&self) -> usize {
        match &self.phase {
            Phase::Refreshing { waiters } => waiters.len(),
            Phase::Idle => 0,
        }
    }
}
