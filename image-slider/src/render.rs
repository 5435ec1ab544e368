//! Declarative view tree produced by the slider and its render delegates.
//!
//! ## Usage
//!
//! The host walks a [`SliderView`] to build its native widgets and forwards
//! taps on [`Node::Pressable`] nodes back through
//! [`ImageSlider::dispatch`](crate::ImageSlider::dispatch).
use std::time::Duration;

use crate::{
    ButtonStripStyle, Color, ContainerStyle, Dp, DotStyle, ImageSource, ScrollConfig,
    SlideIndex, SlideStyle, SliderDefaults, ViewportStyle,
};

/// What a pressable node does when tapped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressAction {
    /// Navigate to a real slide.
    MoveTo {
        /// Target slide.
        index: usize,
        /// Whether the viewport animates.
        animated: bool,
    },
    /// Report a tap on a slide through `on_press`.
    PressSlide {
        /// The tapped slide, which may be a ghost.
        index: SlideIndex,
    },
}

/// Visual feedback while a pressable node is held.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PressFeedback {
    /// Dim the child; the press registers only after `delay_press_in`.
    Opacity {
        /// Delay before the press registers.
        delay_press_in: Duration,
    },
    /// Show an underlay color behind the child.
    Highlight {
        /// Underlay color.
        underlay: Color,
    },
}

/// A node in the slider's view tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// A text label, for custom controls.
    Label(String),
    /// An image filling its slide.
    Image {
        /// Image descriptor.
        source: ImageSource,
        /// Slide layout.
        style: SlideStyle,
    },
    /// A tappable wrapper.
    Pressable {
        /// Action dispatched on tap.
        action: PressAction,
        /// Press feedback.
        feedback: PressFeedback,
        /// Wrapped content.
        child: Box<Node>,
    },
    /// A pagination dot.
    Dot(DotStyle),
    /// A horizontal row.
    Row {
        /// Row layout.
        style: ButtonStripStyle,
        /// Children, left to right.
        children: Vec<Node>,
    },
    /// A transparent, full-height view covering the leading edge so a swipe
    /// from the screen edge on the first slide is not taken by the viewport.
    EdgeBlocker {
        /// Blocker width.
        width: Dp,
    },
}

impl Node {
    /// Wraps this node in a pressable.
    pub fn pressable(self, action: PressAction, feedback: PressFeedback) -> Self {
        Node::Pressable {
            action,
            feedback,
            child: Box::new(self),
        }
    }

    /// Collects every press action in the subtree, depth first.
    pub fn actions(&self) -> Vec<PressAction> {
        let mut actions = Vec::new();
        self.collect_actions(&mut actions);
        actions
    }

    fn collect_actions(&self, out: &mut Vec<PressAction>) {
        match self {
            Node::Pressable { action, child, .. } => {
                out.push(*action);
                child.collect_actions(out);
            }
            Node::Row { children, .. } => {
                for child in children {
                    child.collect_actions(out);
                }
            }
            _ => {}
        }
    }
}

/// Descriptor passed to the slide render delegate.
#[derive(Clone, Debug, PartialEq)]
pub struct Slide {
    /// The image shown on this slide; ghosts carry the mirrored image.
    pub item: ImageSource,
    /// Layout the slide must occupy.
    pub style: SlideStyle,
    /// Position in the strip.
    pub index: SlideIndex,
    /// Slide width in pixels.
    pub width: crate::Px,
}

/// Payload of `on_press`.
#[derive(Clone, Debug, PartialEq)]
pub struct PressEvent {
    /// The tapped image.
    pub image: ImageSource,
    /// The tapped slide.
    pub index: SlideIndex,
}

/// Render-time handle for navigation.
///
/// Render delegates run while the view tree is built, so instead of moving
/// the slider directly they attach the actions created here to pressable
/// nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Navigator {
    image_count: usize,
}

impl Navigator {
    pub(crate) fn new(image_count: usize) -> Self {
        Self { image_count }
    }

    /// Animated navigation to `index`.
    pub fn move_to(&self, index: usize) -> PressAction {
        PressAction::MoveTo {
            index,
            animated: true,
        }
    }

    /// Navigation to `index` without animation.
    pub fn jump_to(&self, index: usize) -> PressAction {
        PressAction::MoveTo {
            index,
            animated: false,
        }
    }

    /// Number of real slides.
    pub fn image_count(&self) -> usize {
        self.image_count
    }
}

/// Input of the pagination render delegate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonsScope {
    /// Current position; a ghost is reported as the slide it mirrors.
    pub position: usize,
    /// Navigation handle, the render-time form of `move_to`.
    pub navigator: Navigator,
}

/// Everything the host needs to draw the slider.
#[derive(Clone, Debug, PartialEq)]
pub struct SliderView {
    /// Outer container.
    pub container: ContainerStyle,
    /// Scrolling viewport style.
    pub viewport: ViewportStyle,
    /// Scroll behaviour.
    pub scroll: ScrollConfig,
    /// Slides in strip order, ghosts included.
    pub slides: Vec<Node>,
    /// Pagination controls.
    pub buttons: Node,
    /// Edge blocker, when present.
    pub edge_blocker: Option<Node>,
}

/// Default slide: the image, tappable when `pressable` is set.
pub fn default_slide(slide: Slide, pressable: bool) -> Node {
    let image = Node::Image {
        source: slide.item,
        style: slide.style,
    };
    if !pressable {
        return image;
    }
    image.pressable(
        PressAction::PressSlide { index: slide.index },
        PressFeedback::Opacity {
            delay_press_in: SliderDefaults::PRESS_IN_DELAY,
        },
    )
}

/// Default pagination: one highlight-pressable dot per image.
pub fn default_buttons(scope: ButtonsScope) -> Node {
    let children = (0..scope.navigator.image_count())
        .map(|index| {
            Node::Dot(DotStyle::new(index == scope.position)).pressable(
                scope.navigator.move_to(index),
                PressFeedback::Highlight {
                    underlay: SliderDefaults::DOT_UNDERLAY,
                },
            )
        })
        .collect();
    Node::Row {
        style: ButtonStripStyle::default(),
        children,
    }
}
