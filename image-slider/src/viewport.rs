//! Host scroll viewport interface.
//!
//! ## Usage
//!
//! Implement [`ScrollViewport`] on top of the host's horizontal paging
//! scroll view and apply the [`ScrollConfig`] from each render.
use std::time::Duration;

use crate::{LoopMode, Px, SlideIndex};

/// Interval at which the host should report scroll events.
pub const SCROLL_EVENT_THROTTLE: Duration = Duration::from_millis(16);

/// A command to move the viewport's content offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollCommand {
    /// Horizontal content offset. The vertical offset is always zero.
    pub x: f32,
    /// Whether the host should animate to the offset.
    pub animated: bool,
}

/// A horizontally scrolling host view the slider can command.
pub trait ScrollViewport {
    /// Scrolls the content to the given offset.
    fn scroll_to(&mut self, command: ScrollCommand);
}

impl<V: ScrollViewport + ?Sized> ScrollViewport for &mut V {
    fn scroll_to(&mut self, command: ScrollCommand) {
        (**self).scroll_to(command);
    }
}

impl<V: ScrollViewport + ?Sized> ScrollViewport for Box<V> {
    fn scroll_to(&mut self, command: ScrollCommand) {
        (**self).scroll_to(command);
    }
}

/// Scroll view properties derived on every render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollConfig {
    /// Snap to whole slides.
    pub paging_enabled: bool,
    /// Scroll horizontally.
    pub horizontal: bool,
    /// Show the scroll indicator.
    pub shows_indicator: bool,
    /// How often the host reports scroll events.
    pub event_throttle: Duration,
    /// Allow overscroll bounce; only when both-sides looping needs to reveal
    /// the leading ghost.
    pub bounces: bool,
    /// Inset before the first real slide that makes room for the leading
    /// ghost.
    pub content_inset_leading: Px,
    /// Whether the user may swipe. Disabled while resting on a ghost slide
    /// until it snaps back.
    pub scroll_enabled: bool,
}

impl ScrollConfig {
    /// Derives the config for the current mode, width and index.
    pub fn derive(mode: LoopMode, width: Px, current: SlideIndex) -> Self {
        let both_sides = mode == LoopMode::BothSides;
        Self {
            paging_enabled: true,
            horizontal: true,
            shows_indicator: false,
            event_throttle: SCROLL_EVENT_THROTTLE,
            bounces: both_sides,
            content_inset_leading: if both_sides { width } else { Px::ZERO },
            scroll_enabled: !current.is_ghost(),
        }
    }
}
