//! A minimal single-threaded host: timers run as tokio tasks but every event
//! is funnelled through one channel and handled by the dispatch loop.
use std::{collections::HashMap, time::Duration};

use image_slider::{IntervalTimer, Node, PressAction, Px, ScrollCommand, ScrollViewport, TimerId};
use tokio::{
    sync::mpsc::UnboundedSender,
    task::JoinHandle,
    time::{Instant, MissedTickBehavior},
};
use tracing::info;

/// Events delivered to the dispatch loop.
#[derive(Debug)]
pub enum HostEvent {
    Layout(Px),
    ScrollSettled(f32),
    Tick(TimerId),
    Tap(PressAction),
    Quit,
}

/// Interval timer backed by one tokio task per started timer.
///
/// Must be used from inside a tokio runtime.
pub struct TokioTimer {
    events: UnboundedSender<HostEvent>,
    next_id: u64,
    tasks: HashMap<TimerId, JoinHandle<()>>,
}

impl TokioTimer {
    pub fn new(events: UnboundedSender<HostEvent>) -> Self {
        Self {
            events,
            next_id: 0,
            tasks: HashMap::new(),
        }
    }
}

impl IntervalTimer for TokioTimer {
    fn start(&mut self, period: Duration) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        let events = self.events.clone();
        let task = tokio::spawn(async move {
            // `interval` ticks immediately; the first autoplay tick is one
            // period out.
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if events.send(HostEvent::Tick(id)).is_err() {
                    break;
                }
            }
        });
        self.tasks.insert(id, task);
        id
    }

    fn cancel(&mut self, id: TimerId) {
        if let Some(task) = self.tasks.remove(&id) {
            task.abort();
        }
    }
}

impl Drop for TokioTimer {
    fn drop(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.abort();
        }
    }
}

/// Viewport that pretends every animated scroll finishes instantly and
/// reports the settle back, as a paging scroll view would after momentum
/// ends.
pub struct SimulatedViewport {
    events: UnboundedSender<HostEvent>,
}

impl SimulatedViewport {
    pub fn new(events: UnboundedSender<HostEvent>) -> Self {
        Self { events }
    }
}

impl ScrollViewport for SimulatedViewport {
    fn scroll_to(&mut self, command: ScrollCommand) {
        info!(x = command.x, animated = command.animated, "scroll");
        if command.animated {
            let _ = self.events.send(HostEvent::ScrollSettled(command.x));
        }
    }
}

/// One-line summary of the pagination row, `●` marking the selected dot.
pub fn describe_buttons(buttons: &Node) -> String {
    match buttons {
        Node::Row { children, .. } => children
            .iter()
            .map(|child| match child {
                Node::Pressable { child, .. } => describe_buttons(child),
                other => describe_buttons(other),
            })
            .collect::<Vec<_>>()
            .join(" "),
        Node::Dot(style) if style.opacity >= 1.0 => "●".to_owned(),
        Node::Dot(_) => "○".to_owned(),
        Node::Label(text) => text.clone(),
        _ => String::new(),
    }
}
