//! Interval and timeout bookkeeping driven by an external clock.
//!
//! Timers are plain data. The table's driver supplies a monotonic
//! millisecond clock through [`crate::Table::advance_to`], and every timer
//! due by then fires in due order. Cancelling removes the entry, so a
//! cancelled timer can never fire late.

use alloc::vec::Vec;

/// Handle returned when a timer is scheduled. Ids are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// What a timer does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// The dealer reveal sequence takes its next step.
    DealerDraw,
    /// The dealer has stopped and the settle pause is over.
    RevealSettled,
    /// The bust message has been shown long enough.
    BustSettled,
    /// The outcome message has been shown long enough.
    ResolutionElapsed,
}

#[derive(Debug, Clone, Copy)]
struct Timer {
    id: TimerId,
    due_at: u64,
    period: Option<u64>,
    event: TimerEvent,
}

/// A fired timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired {
    /// Handle of the timer that fired.
    pub id: TimerId,
    /// The time it was due, which may be earlier than the current clock.
    pub due_at: u64,
    /// The event to dispatch.
    pub event: TimerEvent,
}

/// The set of pending timers.
#[derive(Debug, Clone, Default)]
pub struct Timers {
    next_id: u64,
    pending: Vec<Timer>,
}

impl Timers {
    /// Creates an empty timer set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next_id: 0,
            pending: Vec::new(),
        }
    }

    fn insert(&mut self, due_at: u64, period: Option<u64>, event: TimerEvent) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(Timer {
            id,
            due_at,
            period,
            event,
        });
        id
    }

    /// Schedules `event` every `period_ms`, first firing at `now + period_ms`.
    ///
    /// A zero period is treated as one millisecond.
    pub fn set_interval(&mut self, now: u64, period_ms: u64, event: TimerEvent) -> TimerId {
        let period = period_ms.max(1);
        self.insert(now.saturating_add(period), Some(period), event)
    }

    /// Schedules `event` once at `now + delay_ms`.
    pub fn set_timeout(&mut self, now: u64, delay_ms: u64, event: TimerEvent) -> TimerId {
        self.insert(now.saturating_add(delay_ms), None, event)
    }

    /// Cancels a timer. Returns `false` if it had already fired or been
    /// cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|t| t.id != id);
        self.pending.len() != before
    }

    /// Cancels every pending timer. Returns how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let dropped = self.pending.len();
        self.pending.clear();
        dropped
    }

    /// Returns whether `id` is still pending.
    #[must_use]
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|t| t.id == id)
    }

    /// Earliest due time, if anything is pending.
    #[must_use]
    pub fn next_due(&self) -> Option<u64> {
        self.pending.iter().map(|t| t.due_at).min()
    }

    /// Number of pending timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns whether nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Pops the earliest timer due at or before `now`.
    ///
    /// Ties fire in scheduling order. Intervals are re-armed one period
    /// after their own due time, not after `now`.
    pub fn pop_due(&mut self, now: u64) -> Option<Fired> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due_at <= now)
            .min_by_key(|(_, t)| (t.due_at, t.id))
            .map(|(i, _)| i)?;

        let timer = self.pending[index];
        match timer.period {
            Some(period) => self.pending[index].due_at = timer.due_at.saturating_add(period),
            None => {
                self.pending.swap_remove(index);
            }
        }

        Some(Fired {
            id: timer.id,
            due_at: timer.due_at,
            event: timer.event,
        })
    }
}
