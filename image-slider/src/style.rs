//! Default look of the slider and the caller's style override.
use std::time::Duration;

use derive_setters::Setters;

use crate::{Color, Dp, Px};

/// Defaults for [`ImageSlider`](crate::ImageSlider) styling.
pub struct SliderDefaults;

impl SliderDefaults {
    /// Viewport background behind images, `#222`.
    pub const VIEWPORT_BACKGROUND: Color = Color::new(
        0x22 as f32 / 255.0,
        0x22 as f32 / 255.0,
        0x22 as f32 / 255.0,
        1.0,
    );
    /// Slide width before the first layout reports a real viewport width.
    pub const IMAGE_WIDTH: Dp = Dp(200.0);
    /// Diameter of a pagination dot.
    pub const DOT_SIZE: Dp = Dp(8.0);
    /// Margin around each pagination dot.
    pub const DOT_MARGIN: Dp = Dp(3.0);
    /// Unselected dot color, `#ccc`.
    pub const DOT_COLOR: Color = Color::new(
        0xcc as f32 / 255.0,
        0xcc as f32 / 255.0,
        0xcc as f32 / 255.0,
        1.0,
    );
    /// Unselected dot opacity.
    pub const DOT_OPACITY: f32 = 0.9;
    /// Selected dot color.
    pub const SELECTED_DOT_COLOR: Color = Color::WHITE;
    /// Selected dot opacity.
    pub const SELECTED_DOT_OPACITY: f32 = 1.0;
    /// Underlay shown while a dot is pressed.
    pub const DOT_UNDERLAY: Color = Self::DOT_COLOR;
    /// Height of the dot strip.
    pub const STRIP_HEIGHT: Dp = Dp(15.0);
    /// Top margin of the dot strip; negative to overlap the images.
    pub const STRIP_MARGIN_TOP: Dp = Dp(-25.0);
    /// Bottom margin of the dot strip.
    pub const STRIP_MARGIN_BOTTOM: Dp = Dp(10.0);
    /// Width of the blocker covering the leading edge on the first slide.
    pub const EDGE_BLOCKER_WIDTH: Dp = Dp(50.0);
    /// Delay before a slide press registers, so swipes are not taken as taps.
    pub const PRESS_IN_DELAY: Duration = Duration::from_millis(200);
}

/// Caller style override merged into the container and the viewport.
#[derive(Clone, Debug, Default, PartialEq, Setters)]
#[setters(strip_option)]
pub struct SliderStyle {
    /// Fixed width instead of filling the parent.
    pub width: Option<Dp>,
    /// Fixed height instead of filling the parent.
    pub height: Option<Dp>,
    /// Background color of the container and viewport.
    pub background: Option<Color>,
    /// Flex grow factor of the container.
    pub flex: Option<f32>,
}

/// Resolved style of the outer container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerStyle {
    /// Flex grow factor.
    pub flex: f32,
    /// Fixed width, if any.
    pub width: Option<Dp>,
    /// Fixed height, if any.
    pub height: Option<Dp>,
    /// Background color.
    pub background: Color,
}

impl ContainerStyle {
    /// Merges the caller override over the container defaults.
    pub fn resolve(style: &SliderStyle) -> Self {
        Self {
            flex: style.flex.unwrap_or(1.0),
            width: style.width,
            height: style.height,
            background: style.background.unwrap_or(Color::TRANSPARENT),
        }
    }
}

/// Resolved style of the scrolling viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportStyle {
    /// Fixed width, if any.
    pub width: Option<Dp>,
    /// Fixed height, if any.
    pub height: Option<Dp>,
    /// Background shown behind and between images.
    pub background: Color,
}

impl ViewportStyle {
    /// Merges the caller override over the viewport defaults.
    pub fn resolve(style: &SliderStyle) -> Self {
        Self {
            width: style.width,
            height: style.height,
            background: style
                .background
                .unwrap_or(SliderDefaults::VIEWPORT_BACKGROUND),
        }
    }
}

/// Layout of one slide in the strip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideStyle {
    /// Slide width; equal to the viewport width.
    pub width: Px,
    /// Slides fill the viewport height.
    pub fill_height: bool,
    /// Leading margin; `-width` for the leading ghost so it sits left of
    /// offset zero.
    pub margin_leading: Px,
}

/// Style of one pagination dot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DotStyle {
    /// Diameter.
    pub size: Dp,
    /// Margin on every side.
    pub margin: Dp,
    /// Corner radius; half the size for a circle.
    pub corner_radius: Dp,
    /// Fill color.
    pub color: Color,
    /// Opacity.
    pub opacity: f32,
}

impl DotStyle {
    /// Default dot, selected or not.
    pub fn new(selected: bool) -> Self {
        let (color, opacity) = if selected {
            (
                SliderDefaults::SELECTED_DOT_COLOR,
                SliderDefaults::SELECTED_DOT_OPACITY,
            )
        } else {
            (SliderDefaults::DOT_COLOR, SliderDefaults::DOT_OPACITY)
        };
        Self {
            size: SliderDefaults::DOT_SIZE,
            margin: SliderDefaults::DOT_MARGIN,
            corner_radius: Dp(SliderDefaults::DOT_SIZE.0 / 2.0),
            color,
            opacity,
        }
    }
}

/// Style of the row holding pagination controls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ButtonStripStyle {
    /// Row height.
    pub height: Dp,
    /// Top margin.
    pub margin_top: Dp,
    /// Bottom margin.
    pub margin_bottom: Dp,
    /// Children are centered on both axes.
    pub centered: bool,
}

impl Default for ButtonStripStyle {
    fn default() -> Self {
        Self {
            height: SliderDefaults::STRIP_HEIGHT,
            margin_top: SliderDefaults::STRIP_MARGIN_TOP,
            margin_bottom: SliderDefaults::STRIP_MARGIN_BOTTOM,
            centered: true,
        }
    }
}
