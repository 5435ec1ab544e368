//! A swipeable image carousel component.
//!
//! The slider renders a horizontally paged strip of images with pagination
//! dots, optional autoplay and optional infinite looping. It is headless: the
//! host supplies a [`ScrollViewport`] and an [`IntervalTimer`], forwards
//! layout, scroll-settle, timer and press events, and draws the
//! [`SliderView`] returned by [`ImageSlider::render`].
//!
//! # Usage
//!
//! ```
//! use std::time::Duration;
//!
//! use image_slider::{ImageSliderArgs, Node};
//!
//! let args = ImageSliderArgs::default()
//!     .images([
//!         "https://placeimg.com/640/640/nature",
//!         "https://placeimg.com/640/640/people",
//!         "https://placeimg.com/640/640/animals",
//!     ])
//!     .looping(true)
//!     .auto_play_with_interval(Duration::from_secs(3))
//!     .on_position_changed(|position| println!("now showing {position}"))
//!     .custom_buttons(|scope| Node::Label(format!("{}", scope.position + 1)));
//!
//! assert_eq!(args.images.len(), 3);
//! ```
//!
//! Events must be delivered on one thread, one at a time; each handler runs
//! to completion before the next is dispatched.
#![deny(missing_docs, clippy::unwrap_used)]

mod autoplay;
mod color;
mod dp;
mod position;
mod prop;
mod px;
mod render;
mod slide_index;
mod slider;
mod source;
mod style;
mod viewport;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use crate::{
    autoplay::{AutoplayScheduler, IntervalTimer, TimerId},
    color::{Color, ParseColorError},
    dp::{Dp, SCALE_FACTOR, set_scale_factor},
    position::PositionMode,
    prop::{CallbackWith, RenderSlotWith},
    px::{Px, round_half_away, to_fixed},
    render::{
        ButtonsScope, Navigator, Node, PressAction, PressEvent, PressFeedback, Slide, SliderView,
        default_buttons, default_slide,
    },
    slide_index::{LoopMode, SlideIndex},
    slider::{ImageSlider, ImageSliderArgs},
    source::ImageSource,
    style::{
        ButtonStripStyle, ContainerStyle, DotStyle, SlideStyle, SliderDefaults, SliderStyle,
        ViewportStyle,
    },
    viewport::{SCROLL_EVENT_THROTTLE, ScrollCommand, ScrollConfig, ScrollViewport},
};
