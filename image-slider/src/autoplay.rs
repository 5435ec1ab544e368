//! Autoplay scheduling on top of a host interval timer.
//!
//! The scheduler is either idle or running exactly one timer. Every
//! navigation resets it: the running timer is cancelled and, when an interval
//! is configured, a fresh one is started. Ticks carry the [`TimerId`] they
//! were started with so a tick that was already queued when its timer was
//! cancelled can be recognised and dropped.
use std::time::Duration;

/// Identifies one started interval timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

/// A repeating timer provided by the host event loop.
///
/// Ticks are delivered back to the slider through
/// [`ImageSlider::on_autoplay_tick`](crate::ImageSlider::on_autoplay_tick) on
/// the same thread that handles every other slider event.
pub trait IntervalTimer {
    /// Starts a repeating timer with the given period.
    fn start(&mut self, period: Duration) -> TimerId;
    /// Cancels a timer. Cancelling an unknown or already cancelled id is a
    /// no-op.
    fn cancel(&mut self, id: TimerId);
}

impl<T: IntervalTimer + ?Sized> IntervalTimer for &mut T {
    fn start(&mut self, period: Duration) -> TimerId {
        (**self).start(period)
    }

    fn cancel(&mut self, id: TimerId) {
        (**self).cancel(id);
    }
}

impl<T: IntervalTimer + ?Sized> IntervalTimer for Box<T> {
    fn start(&mut self, period: Duration) -> TimerId {
        (**self).start(period)
    }

    fn cancel(&mut self, id: TimerId) {
        (**self).cancel(id);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SchedulerState {
    Idle,
    Running { id: TimerId },
}

/// Owns at most one outstanding autoplay timer.
#[derive(Debug)]
pub struct AutoplayScheduler<T: IntervalTimer> {
    timer: T,
    state: SchedulerState,
}

impl<T: IntervalTimer> AutoplayScheduler<T> {
    /// Creates an idle scheduler.
    pub fn new(timer: T) -> Self {
        Self {
            timer,
            state: SchedulerState::Idle,
        }
    }

    /// Cancels the running timer, then starts a new one if `interval` is set
    /// and non-zero.
    pub fn reset(&mut self, interval: Option<Duration>) {
        self.stop();
        let Some(period) = interval.filter(|period| !period.is_zero()) else {
            return;
        };
        let id = self.timer.start(period);
        tracing::trace!(?id, ?period, "autoplay timer started");
        self.state = SchedulerState::Running { id };
    }

    /// Cancels the running timer, if any.
    pub fn stop(&mut self) {
        if let SchedulerState::Running { id } = self.state {
            self.timer.cancel(id);
            tracing::trace!(?id, "autoplay timer cancelled");
        }
        self.state = SchedulerState::Idle;
    }

    /// Whether `id` is the currently running timer.
    pub fn is_current(&self, id: TimerId) -> bool {
        matches!(self.state, SchedulerState::Running { id: current } if current == id)
    }

    /// Whether a timer is running.
    pub fn is_running(&self) -> bool {
        matches!(self.state, SchedulerState::Running { .. })
    }
}

impl<T: IntervalTimer> Drop for AutoplayScheduler<T> {
    fn drop(&mut self) {
        self.stop();
    }
}
