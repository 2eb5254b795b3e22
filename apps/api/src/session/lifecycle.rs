//! Request lifecycle for suspending operations.
//!
//! AI calls are never cancelled; instead every dispatch gets a ticket and only the
//! latest ticket may land its result. Exports are guarded by a busy flag that
//! rejects a second trigger outright.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::Serialize;

/// Identifies one dispatch of an operation within its slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Ticket(u64);

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum RequestState<T> {
    Idle,
    InFlight { ticket: Ticket },
    Succeeded { ticket: Ticket, result: T },
    Failed { ticket: Ticket, message: String },
}

/// Outcome of handing a finished call back to its slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landing {
    Landed,
    /// A newer dispatch began after this one; its result was dropped.
    Superseded,
}

/// One operation's lifecycle state plus its ticket counter.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct RequestSlot<T> {
    state: RequestState<T>,
    #[serde(skip)]
    issued: u64,
}

impl<T> Default for RequestSlot<T> {
    fn default() -> Self {
        Self {
            state: RequestState::Idle,
            issued: 0,
        }
    }
}

impl<T> RequestSlot<T> {
    pub fn state(&self) -> &RequestState<T> {
        &self.state
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self.state, RequestState::InFlight { .. })
    }

    /// Moves to `InFlight` under a fresh ticket. Any earlier in-flight ticket becomes stale.
    pub fn begin(&mut self) -> Ticket {
        self.issued += 1;
        let ticket = Ticket(self.issued);
        self.state = RequestState::InFlight { ticket };
        ticket
    }

    /// Lands `outcome` if `ticket` is still the current in-flight dispatch.
    pub fn complete(&mut self, ticket: Ticket, outcome: Result<T, String>) -> Landing {
        match self.state {
            RequestState::InFlight { ticket: current } if current == ticket => {
                self.state = match outcome {
                    Ok(result) => RequestState::Succeeded { ticket, result },
                    Err(message) => RequestState::Failed { ticket, message },
                };
                Landing::Landed
            }
            _ => Landing::Superseded,
        }
    }
}

/// Shared "an export is running" flag.
#[derive(Debug, Clone, Default)]
pub struct BusyFlag(Arc<AtomicBool>);

impl BusyFlag {
    /// Returns `None` if the flag is already held.
    pub fn try_acquire(&self) -> Option<BusyGuard> {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| BusyGuard(Arc::clone(&self.0)))
    }

    pub fn is_busy(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Holds a [`BusyFlag`]; releases it on drop, whatever the exit path.
#[derive(Debug)]
pub struct BusyGuard(Arc<AtomicBool>);

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
