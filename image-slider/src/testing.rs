//! In-memory hosts for exercising the slider without a UI toolkit.
//!
//! Both types are cheap handles over shared state: hand one clone to the
//! slider and keep another to inspect or drive it.
use std::{collections::BTreeMap, sync::Arc, time::Duration};

use parking_lot::Mutex;

use crate::{IntervalTimer, ScrollCommand, ScrollViewport, TimerId};

/// A viewport that records every scroll command it receives.
#[derive(Clone, Debug, Default)]
pub struct RecordingViewport {
    commands: Arc<Mutex<Vec<ScrollCommand>>>,
}

impl RecordingViewport {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All commands received so far.
    pub fn commands(&self) -> Vec<ScrollCommand> {
        self.commands.lock().clone()
    }

    /// The most recent command.
    pub fn last(&self) -> Option<ScrollCommand> {
        self.commands.lock().last().copied()
    }

    /// Forgets recorded commands.
    pub fn clear(&self) {
        self.commands.lock().clear();
    }
}

impl ScrollViewport for RecordingViewport {
    fn scroll_to(&mut self, command: ScrollCommand) {
        self.commands.lock().push(command);
    }
}

#[derive(Debug)]
struct TimerEntry {
    period: Duration,
    next_due: Duration,
}

#[derive(Debug, Default)]
struct ManualTimerInner {
    now: Duration,
    next_id: u64,
    timers: BTreeMap<TimerId, TimerEntry>,
}

/// A fake clock driving repeating timers on demand.
#[derive(Clone, Debug, Default)]
pub struct ManualTimer {
    inner: Arc<Mutex<ManualTimerInner>>,
}

impl ManualTimer {
    /// Creates a clock at time zero with no timers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the clock and returns the ticks that became due, in firing
    /// order. Cancelled timers never fire.
    pub fn advance(&self, by: Duration) -> Vec<TimerId> {
        let mut inner = self.inner.lock();
        let target = inner.now + by;
        let mut fired = Vec::new();
        loop {
            let due = inner
                .timers
                .iter()
                .filter(|(_, entry)| entry.next_due <= target)
                .min_by_key(|(id, entry)| (entry.next_due, **id))
                .map(|(id, _)| *id);
            let Some(id) = due else {
                break;
            };
            if let Some(entry) = inner.timers.get_mut(&id) {
                entry.next_due += entry.period;
            }
            fired.push(id);
        }
        inner.now = target;
        fired
    }

    /// Number of live timers.
    pub fn active_count(&self) -> usize {
        self.inner.lock().timers.len()
    }

    /// Ids of live timers.
    pub fn active_ids(&self) -> Vec<TimerId> {
        self.inner.lock().timers.keys().copied().collect()
    }
}

impl IntervalTimer for ManualTimer {
    fn start(&mut self, period: Duration) -> TimerId {
        let period = period.max(Duration::from_millis(1));
        let mut inner = self.inner.lock();
        inner.next_id += 1;
        let id = TimerId(inner.next_id);
        let next_due = inner.now + period;
        inner.timers.insert(id, TimerEntry { period, next_due });
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.inner.lock().timers.remove(&id);
    }
}
