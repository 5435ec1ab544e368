//! Swipeable image slider.
//!
//! ## Usage
//!
//! Show a horizontally paged strip of images with pagination dots, optional
//! autoplay and optional infinite looping.
use std::time::Duration;

use derive_setters::Setters;
use tracing::{debug, trace, warn};

use crate::{
    AutoplayScheduler, ButtonsScope, CallbackWith, ContainerStyle, ImageSource, IntervalTimer,
    LoopMode, Navigator, Node, PositionMode, PressAction, PressEvent, Px, RenderSlotWith,
    ScrollCommand, ScrollConfig, ScrollViewport, Slide, SlideIndex, SlideStyle, SliderDefaults,
    SliderStyle, SliderView, TimerId, ViewportStyle, default_buttons, default_slide,
    px::{round_half_away, to_fixed},
};

/// Configuration of an [`ImageSlider`].
#[derive(Clone, Debug, Default, PartialEq, Setters)]
pub struct ImageSliderArgs {
    /// Images in slide order.
    #[setters(skip)]
    pub images: Vec<ImageSource>,
    /// Wrap forward from the last slide to the first through a trailing ghost
    /// slide.
    pub looping: bool,
    /// Wrap in both directions through leading and trailing ghost slides.
    /// Takes precedence over `looping`.
    pub loop_both_sides: bool,
    /// Autoplay period. `None` or zero disables autoplay.
    #[setters(strip_option)]
    pub auto_play_with_interval: Option<Duration>,
    /// Caller-controlled position. When set, the caller owns navigation and
    /// the slider mirrors this index.
    #[setters(strip_option)]
    pub position: Option<usize>,
    /// Invoked with the new index on every committed transition to a real
    /// slide.
    #[setters(skip)]
    pub on_position_changed: Option<CallbackWith<usize>>,
    /// Invoked when a slide is tapped.
    #[setters(skip)]
    pub on_press: Option<CallbackWith<PressEvent>>,
    /// Renders the pagination controls instead of the default dots.
    #[setters(skip)]
    pub custom_buttons: Option<RenderSlotWith<ButtonsScope, Node>>,
    /// Renders each slide instead of the default image.
    #[setters(skip)]
    pub custom_slide: Option<RenderSlotWith<Slide, Node>>,
    /// Style override merged into the container and the viewport.
    pub style: SliderStyle,
}

impl ImageSliderArgs {
    /// Sets the images. Plain strings are treated as URIs.
    pub fn images<I, S>(mut self, images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ImageSource>,
    {
        self.images = images.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the position-changed handler.
    pub fn on_position_changed<F>(mut self, on_position_changed: F) -> Self
    where
        F: Fn(usize) + Send + Sync + 'static,
    {
        self.on_position_changed = Some(CallbackWith::new(on_position_changed));
        self
    }

    /// Sets the slide press handler.
    pub fn on_press<F>(mut self, on_press: F) -> Self
    where
        F: Fn(PressEvent) + Send + Sync + 'static,
    {
        self.on_press = Some(CallbackWith::new(on_press));
        self
    }

    /// Sets the pagination render delegate.
    pub fn custom_buttons<F>(mut self, custom_buttons: F) -> Self
    where
        F: Fn(ButtonsScope) -> Node + Send + Sync + 'static,
    {
        self.custom_buttons = Some(RenderSlotWith::new(custom_buttons));
        self
    }

    /// Sets the slide render delegate.
    pub fn custom_slide<F>(mut self, custom_slide: F) -> Self
    where
        F: Fn(Slide) -> Node + Send + Sync + 'static,
    {
        self.custom_slide = Some(RenderSlotWith::new(custom_slide));
        self
    }

    /// The effective loop mode.
    pub fn loop_mode(&self) -> LoopMode {
        LoopMode::from_flags(self.looping, self.loop_both_sides)
    }
}

/// # ImageSlider
///
/// A mounted slider instance bound to a host viewport and interval timer.
///
/// ## Usage
///
/// Mount once, forward the host's layout, scroll-settle, timer and press
/// events to it on the UI thread, and draw whatever [`render`](Self::render)
/// returns after each event.
///
/// ## Examples
///
/// ```
/// use std::time::Duration;
///
/// use image_slider::{
///     ImageSlider, ImageSliderArgs, IntervalTimer, Px, ScrollCommand, ScrollViewport,
///     SlideIndex, TimerId,
/// };
///
/// #[derive(Default)]
/// struct Viewport(Vec<ScrollCommand>);
///
/// impl ScrollViewport for Viewport {
///     fn scroll_to(&mut self, command: ScrollCommand) {
///         self.0.push(command);
///     }
/// }
///
/// struct NoTimer;
///
/// impl IntervalTimer for NoTimer {
///     fn start(&mut self, _period: Duration) -> TimerId {
///         TimerId(0)
///     }
///     fn cancel(&mut self, _id: TimerId) {}
/// }
///
/// let args = ImageSliderArgs::default().images(["a.jpg", "b.jpg", "c.jpg"]);
/// let mut slider = ImageSlider::mount(args, Viewport::default(), NoTimer);
/// slider.on_layout(Px(320));
/// slider.move_to(2, true);
///
/// assert_eq!(slider.position(), SlideIndex::Real(2));
/// assert_eq!(slider.viewport().0.last().map(|command| command.x), Some(640.0));
/// ```
pub struct ImageSlider<V: ScrollViewport, T: IntervalTimer> {
    args: ImageSliderArgs,
    viewport: V,
    autoplay: AutoplayScheduler<T>,
    index: SlideIndex,
    width: Px,
    mounted: bool,
}

impl<V: ScrollViewport, T: IntervalTimer> ImageSlider<V, T> {
    /// Mounts a slider and starts autoplay if configured.
    ///
    /// The viewport width is unknown until the first
    /// [`on_layout`](Self::on_layout).
    pub fn mount(args: ImageSliderArgs, viewport: V, timer: T) -> Self {
        let count = args.images.len();
        let index = match args.position {
            Some(position) if position < count => SlideIndex::Real(position),
            _ => SlideIndex::Real(0),
        };
        let mut slider = Self {
            args,
            viewport,
            autoplay: AutoplayScheduler::new(timer),
            index,
            width: Px::ZERO,
            mounted: true,
        };
        debug!(
            images = count,
            loop_mode = ?slider.loop_mode(),
            ?index,
            "image slider mounted"
        );
        slider.reset_autoplay();
        slider
    }

    /// Current configuration.
    pub fn args(&self) -> &ImageSliderArgs {
        &self.args
    }

    /// The host viewport.
    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    /// Last width reported by [`on_layout`](Self::on_layout).
    pub fn width(&self) -> Px {
        self.width
    }

    /// Whether the slider is still mounted.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Whether an autoplay timer is outstanding.
    pub fn is_autoplay_running(&self) -> bool {
        self.autoplay.is_running()
    }

    /// Who owns the position right now.
    pub fn position_mode(&self) -> PositionMode {
        PositionMode::resolve(self.args.position, self.index)
    }

    /// The authoritative position.
    pub fn position(&self) -> SlideIndex {
        self.position_mode().index()
    }

    /// The internally tracked index, which mirrors a controlled position.
    pub fn internal_index(&self) -> SlideIndex {
        self.index
    }

    fn image_count(&self) -> usize {
        self.args.images.len()
    }

    fn loop_mode(&self) -> LoopMode {
        self.args.loop_mode()
    }

    /// Navigates to a real slide.
    pub fn move_to(&mut self, index: usize, animated: bool) {
        self.move_to_slide(SlideIndex::Real(index), animated);
    }

    /// Navigates to any slide in the strip, ghosts included.
    ///
    /// Scrolls the viewport to the slide, adopts it as the internal index,
    /// notifies `on_position_changed` when the position changed to a real
    /// slide, and restarts autoplay. Slides that do not exist for the current
    /// images and loop mode are ignored.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn move_to_slide(&mut self, target: SlideIndex, animated: bool) {
        if !self.mounted {
            trace!("ignoring navigation after unmount");
            return;
        }
        let count = self.image_count();
        if !target.is_valid(count, self.loop_mode()) {
            warn!(?target, count, "ignoring navigation to a missing slide");
            return;
        }

        let previous = self.position();
        let x = target.offset(self.width.to_f32(), count);
        self.viewport.scroll_to(ScrollCommand { x, animated });
        self.index = target;

        if target != previous
            && let Some(position) = target.real()
        {
            self.notify_position_changed(position);
        }

        self.reset_autoplay();
    }

    /// Reconciles the index after the host reports that scrolling settled at
    /// content offset `x`.
    ///
    /// Settling on the trailing ghost snaps to the first slide and settling on
    /// the leading ghost snaps to the last, both without animation. Otherwise
    /// the nearest slide is adopted unless the slider rests on a ghost. The
    /// position-changed callback fires at most once, and only when the
    /// position actually changed.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn on_scroll_settle(&mut self, x: f32) {
        if !self.mounted {
            return;
        }
        let count = self.image_count();
        let width = self.width.to_f32();
        if count == 0 || width <= f32::EPSILON {
            trace!(count, width, "nothing to reconcile");
            return;
        }

        let mode = self.loop_mode();
        if mode.loops_forward() && to_fixed(x) >= to_fixed(width * count as f32) {
            debug!("wrapping forward from trailing ghost");
            self.move_to_slide(SlideIndex::Real(0), false);
            return;
        }
        if mode.has_leading_ghost() && to_fixed(x) <= to_fixed(-width) {
            debug!("wrapping backward from leading ghost");
            self.move_to_slide(SlideIndex::Real(count - 1), false);
            return;
        }

        let previous = self.position();
        if !self.index.is_ghost() {
            let settled = round_half_away(f64::from(x) / f64::from(width));
            let settled = isize::try_from(settled).unwrap_or(isize::MAX);
            match SlideIndex::resolve(settled, count, LoopMode::None) {
                Some(settled) => {
                    self.index = settled;
                    if settled != previous
                        && let Some(position) = settled.real()
                    {
                        self.notify_position_changed(position);
                    }
                }
                None => debug!(settled, "scroll settled outside the real slides"),
            }
        }

        self.reset_autoplay();
    }

    /// Advances the slider when the autoplay timer `id` fires.
    ///
    /// Ticks from timers that have since been cancelled are dropped.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn on_autoplay_tick(&mut self, id: TimerId) {
        if !self.mounted || !self.autoplay.is_current(id) {
            trace!(?id, "ignoring stale autoplay tick");
            return;
        }
        let count = self.image_count();
        if count == 0 {
            return;
        }
        let current = self.position();
        let next = current.advance(count, self.loop_mode());
        // From a ghost the next slide is the one it mirrors, which shares the
        // same image; jump there instead of scrolling across the strip.
        self.move_to_slide(next, !current.is_ghost());
    }

    /// Recaptures the viewport width after mount, rotation or resize and
    /// re-aligns the offset to the authoritative position without animation.
    ///
    /// Layout is not a transition: it never notifies `on_position_changed`
    /// and leaves the autoplay countdown alone.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn on_layout(&mut self, width: Px) {
        if !self.mounted {
            return;
        }
        let width = width.max(Px::ZERO);
        if width != self.width {
            debug!(from = ?self.width, to = ?width, "viewport width changed");
        }
        self.width = width;
        self.align_viewport();
    }

    fn align_viewport(&mut self) {
        let count = self.image_count();
        let target = self.position();
        if !target.is_valid(count, self.loop_mode()) {
            trace!(?target, count, "no slide to align to");
            return;
        }
        let x = target.offset(self.width.to_f32(), count);
        self.viewport.scroll_to(ScrollCommand { x, animated: false });
        self.index = target;
    }

    /// Replaces the configuration.
    ///
    /// A newly supplied controlled position that differs from the internal
    /// index scrolls there; the callback is not echoed back to the caller.
    /// Autoplay restarts when its interval changed.
    pub fn set_args(&mut self, args: ImageSliderArgs) {
        let previous_position = self.args.position;
        let interval_changed = self.args.auto_play_with_interval != args.auto_play_with_interval;
        let shape_changed = self.args.images.len() != args.images.len()
            || self.args.loop_mode() != args.loop_mode();
        self.args = args;

        let count = self.image_count();
        if shape_changed && !self.index.is_valid(count, self.loop_mode()) {
            let clamped = match self.index.mirrored(count) {
                SlideIndex::Real(i) if i < count => SlideIndex::Real(i),
                _ => SlideIndex::Real(count.saturating_sub(1)),
            };
            debug!(from = ?self.index, to = ?clamped, "clamping index to new images");
            self.index = clamped;
        }

        if let Some(position) = self.args.position
            && previous_position != Some(position)
            && SlideIndex::Real(position) != self.index
        {
            self.move_to(position, true);
            return;
        }

        if interval_changed || shape_changed {
            self.reset_autoplay();
        }
    }

    /// Performs an action attached to a pressable node of the view tree.
    pub fn dispatch(&mut self, action: PressAction) {
        match action {
            PressAction::MoveTo { index, animated } => self.move_to(index, animated),
            PressAction::PressSlide { index } => self.press_slide(index),
        }
    }

    fn press_slide(&self, index: SlideIndex) {
        if !self.mounted {
            return;
        }
        let Some(on_press) = &self.args.on_press else {
            return;
        };
        let Some(image) = self.image_for(index) else {
            warn!(?index, "press on a missing slide");
            return;
        };
        on_press.call(PressEvent { image, index });
    }

    /// Stops autoplay; every later event is ignored.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.autoplay.stop();
        self.mounted = false;
        debug!("image slider unmounted");
    }

    /// Builds the view tree for the current state.
    pub fn render(&self) -> SliderView {
        let count = self.image_count();
        let mode = self.loop_mode();
        let width = if self.width > Px::ZERO {
            self.width
        } else {
            SliderDefaults::IMAGE_WIDTH.to_px()
        };

        let mut strip = Vec::with_capacity(count + 2);
        if count > 0 {
            if mode.has_leading_ghost() {
                strip.push(SlideIndex::LeadingGhost);
            }
            strip.extend((0..count).map(SlideIndex::Real));
            if mode.has_trailing_ghost() {
                strip.push(SlideIndex::TrailingGhost);
            }
        }
        let slides = strip
            .into_iter()
            .filter_map(|index| self.render_slide(index, width))
            .collect();

        let position = self.position();
        let scope = ButtonsScope {
            position: position.mirrored(count).real().unwrap_or(0),
            navigator: Navigator::new(count),
        };
        let buttons = match &self.args.custom_buttons {
            Some(custom_buttons) => custom_buttons.render(scope),
            None => default_buttons(scope),
        };

        let edge_blocker = (!mode.has_leading_ghost() && position == SlideIndex::Real(0))
            .then_some(Node::EdgeBlocker {
                width: SliderDefaults::EDGE_BLOCKER_WIDTH,
            });

        SliderView {
            container: ContainerStyle::resolve(&self.args.style),
            viewport: ViewportStyle::resolve(&self.args.style),
            scroll: ScrollConfig::derive(mode, width, self.index),
            slides,
            buttons,
            edge_blocker,
        }
    }

    fn render_slide(&self, index: SlideIndex, width: Px) -> Option<Node> {
        let item = self.image_for(index)?;
        let margin_leading = if index == SlideIndex::LeadingGhost {
            -width
        } else {
            Px::ZERO
        };
        let slide = Slide {
            item,
            style: SlideStyle {
                width,
                fill_height: true,
                margin_leading,
            },
            index,
            width,
        };
        Some(match &self.args.custom_slide {
            Some(custom_slide) => custom_slide.render(slide),
            None => default_slide(slide, self.args.on_press.is_some()),
        })
    }

    fn image_for(&self, index: SlideIndex) -> Option<ImageSource> {
        let real = index.mirrored(self.image_count()).real()?;
        self.args.images.get(real).cloned()
    }

    fn notify_position_changed(&self, position: usize) {
        debug!(position, "position changed");
        if let Some(on_position_changed) = &self.args.on_position_changed {
            on_position_changed.call(position);
        }
    }

    fn reset_autoplay(&mut self) {
        if self.image_count() == 0 {
            self.autoplay.stop();
            return;
        }
        self.autoplay.reset(self.args.auto_play_with_interval);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;

    use super::*;
    use crate::testing::{ManualTimer, RecordingViewport};

    const WIDTH: Px = Px(400);

    struct Harness {
        slider: ImageSlider<RecordingViewport, ManualTimer>,
        viewport: RecordingViewport,
        timer: ManualTimer,
        changes: Arc<Mutex<Vec<usize>>>,
    }

    impl Harness {
        fn new(args: ImageSliderArgs) -> Self {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
                .with_test_writer()
                .try_init();

            let changes = Arc::new(Mutex::new(Vec::new()));
            let recorded = Arc::clone(&changes);
            let args = args.on_position_changed(move |position| recorded.lock().push(position));
            let viewport = RecordingViewport::new();
            let timer = ManualTimer::new();
            let mut slider = ImageSlider::mount(args, viewport.clone(), timer.clone());
            slider.on_layout(WIDTH);
            viewport.clear();
            changes.lock().clear();
            Self {
                slider,
                viewport,
                timer,
                changes,
            }
        }

        fn changes(&self) -> Vec<usize> {
            self.changes.lock().clone()
        }

        fn clear(&self) {
            self.viewport.clear();
            self.changes.lock().clear();
        }

        fn tick(&mut self, by: Duration) {
            for id in self.timer.advance(by) {
                self.slider.on_autoplay_tick(id);
            }
        }
    }

    fn images(count: usize) -> Vec<String> {
        (0..count)
            .map(|i| format!("https://example.com/{i}.jpg"))
            .collect()
    }

    fn args(count: usize) -> ImageSliderArgs {
        ImageSliderArgs::default().images(images(count))
    }

    fn command(x: f32, animated: bool) -> ScrollCommand {
        ScrollCommand { x, animated }
    }

    #[test]
    fn move_to_scrolls_and_notifies_once_per_transition() {
        let mut h = Harness::new(args(5));
        for i in 1..5 {
            h.slider.move_to(i, true);
            assert_eq!(h.viewport.last(), Some(command(i as f32 * 400.0, true)));
            assert_eq!(h.slider.position(), SlideIndex::Real(i));
        }
        assert_eq!(h.changes(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn move_to_current_index_scrolls_without_callback() {
        let mut h = Harness::new(args(5));
        h.slider.move_to(0, true);
        assert_eq!(h.viewport.commands(), vec![command(0.0, true)]);
        assert!(h.changes().is_empty());
    }

    #[test]
    fn move_to_missing_slide_is_ignored() {
        let mut h = Harness::new(args(5));
        h.slider.move_to(7, true);
        h.slider.move_to_slide(SlideIndex::TrailingGhost, true);
        h.slider.move_to_slide(SlideIndex::LeadingGhost, true);
        assert!(h.viewport.commands().is_empty());
        assert!(h.changes().is_empty());
        assert_eq!(h.slider.position(), SlideIndex::Real(0));
    }

    #[test]
    fn settle_past_last_slide_wraps_to_first() {
        let mut h = Harness::new(args(5).looping(true));
        h.slider.move_to(4, true);
        h.clear();

        h.slider.on_scroll_settle(2000.0);

        assert_eq!(h.viewport.last(), Some(command(0.0, false)));
        assert_eq!(h.slider.position(), SlideIndex::Real(0));
        assert_eq!(h.changes(), vec![0]);
    }

    #[test]
    fn wrap_threshold_tolerates_sub_pixel_offsets() {
        let mut h = Harness::new(args(5).looping(true));
        h.slider.move_to(4, true);
        h.clear();

        h.slider.on_scroll_settle(1999.6);

        assert_eq!(h.slider.position(), SlideIndex::Real(0));
        assert_eq!(h.changes(), vec![0]);
    }

    #[test]
    fn settle_before_first_slide_wraps_to_last() {
        let mut h = Harness::new(args(5).loop_both_sides(true));
        h.slider.on_scroll_settle(-400.0);

        assert_eq!(h.viewport.last(), Some(command(1600.0, false)));
        assert_eq!(h.slider.position(), SlideIndex::Real(4));
        assert_eq!(h.changes(), vec![4]);
    }

    #[test]
    fn plain_loop_does_not_wrap_backward() {
        let mut h = Harness::new(args(5).looping(true));
        h.slider.on_scroll_settle(-400.0);
        assert_eq!(h.slider.position(), SlideIndex::Real(0));
        assert!(h.changes().is_empty());
    }

    #[test]
    fn settle_adopts_nearest_slide_once() {
        let mut h = Harness::new(args(5));
        h.slider.on_scroll_settle(810.0);
        assert_eq!(h.slider.position(), SlideIndex::Real(2));

        h.slider.on_scroll_settle(800.0);
        h.slider.on_scroll_settle(600.0);
        assert_eq!(h.slider.position(), SlideIndex::Real(2));

        h.slider.on_scroll_settle(1000.0);
        assert_eq!(h.slider.position(), SlideIndex::Real(3));
        assert_eq!(h.changes(), vec![2, 3]);
        // Reconciling never commands the viewport.
        assert!(h.viewport.commands().is_empty());
    }

    #[test]
    fn settle_while_on_ghost_keeps_ghost() {
        let mut h = Harness::new(args(5).looping(true));
        h.slider.move_to_slide(SlideIndex::TrailingGhost, true);
        h.slider.on_scroll_settle(1000.0);
        assert_eq!(h.slider.position(), SlideIndex::TrailingGhost);
        assert!(h.changes().is_empty());
        assert!(!h.slider.render().scroll.scroll_enabled);
    }

    #[test]
    fn autoplay_without_loop_wraps_from_last_to_first() {
        let interval = Duration::from_secs(3);
        let mut h = Harness::new(args(5).auto_play_with_interval(interval));
        h.slider.move_to(4, true);
        h.clear();

        h.tick(interval);

        assert_eq!(h.slider.position(), SlideIndex::Real(0));
        assert_eq!(h.viewport.last(), Some(command(0.0, true)));
        assert_eq!(h.changes(), vec![0]);
    }

    #[test]
    fn autoplay_with_loop_passes_through_trailing_ghost() {
        let interval = Duration::from_secs(1);
        let mut h = Harness::new(args(3).looping(true).auto_play_with_interval(interval));
        h.slider.move_to(2, false);
        h.clear();

        h.tick(interval);
        assert_eq!(h.slider.position(), SlideIndex::TrailingGhost);
        assert_eq!(h.viewport.last(), Some(command(1200.0, true)));
        assert!(h.changes().is_empty());

        h.slider.on_scroll_settle(1200.0);
        assert_eq!(h.slider.position(), SlideIndex::Real(0));
        assert_eq!(h.viewport.last(), Some(command(0.0, false)));
        assert_eq!(h.changes(), vec![0]);
    }

    #[test]
    fn autoplay_advances_every_interval() {
        let interval = Duration::from_millis(500);
        let mut h = Harness::new(args(4).auto_play_with_interval(interval));
        for _ in 0..5 {
            h.tick(interval);
        }
        assert_eq!(h.changes(), vec![1, 2, 3, 0, 1]);
    }

    #[test]
    fn navigation_restarts_autoplay_countdown() {
        let interval = Duration::from_secs(1);
        let mut h = Harness::new(args(5).auto_play_with_interval(interval));

        h.tick(Duration::from_millis(600));
        h.slider.move_to(2, true);
        h.tick(Duration::from_millis(600));
        assert_eq!(h.slider.position(), SlideIndex::Real(2));

        h.tick(Duration::from_millis(400));
        assert_eq!(h.slider.position(), SlideIndex::Real(3));
        assert_eq!(h.timer.active_count(), 1);
    }

    #[test]
    fn changing_only_the_interval_reschedules_autoplay() {
        let mut h = Harness::new(args(5).auto_play_with_interval(Duration::from_secs(1)));
        let first = h.timer.active_ids();
        h.tick(Duration::from_millis(600));

        let next = h.slider.args().clone().auto_play_with_interval(Duration::from_secs(2));
        h.slider.set_args(next);
        let second = h.timer.active_ids();
        assert_eq!(second.len(), 1);
        assert_ne!(first, second);

        // The old one-second deadline passes without a move.
        h.tick(Duration::from_secs(1));
        assert_eq!(h.slider.position(), SlideIndex::Real(0));

        h.tick(Duration::from_secs(1));
        assert_eq!(h.slider.position(), SlideIndex::Real(1));
        assert_eq!(h.changes(), vec![1]);
    }

    #[test]
    fn unmount_cancels_autoplay() {
        let mut h = Harness::new(args(5).auto_play_with_interval(Duration::from_secs(1)));
        let queued = h.timer.active_ids();
        assert_eq!(queued.len(), 1);

        h.slider.unmount();
        assert!(!h.slider.is_autoplay_running());
        assert_eq!(h.timer.active_count(), 0);

        h.tick(Duration::from_secs(10));
        // A tick the host had already queued before unmount is dropped too.
        h.slider.on_autoplay_tick(queued[0]);
        h.slider.on_scroll_settle(800.0);
        assert!(h.changes().is_empty());
        assert_eq!(h.slider.position(), SlideIndex::Real(0));
    }

    #[test]
    fn dropping_the_slider_cancels_autoplay() {
        let h = Harness::new(args(5).auto_play_with_interval(Duration::from_secs(1)));
        let timer = h.timer.clone();
        assert_eq!(timer.active_count(), 1);
        drop(h);
        assert_eq!(timer.active_count(), 0);
    }

    #[test]
    fn layout_with_same_width_is_idempotent() {
        let mut h = Harness::new(args(5));
        h.slider.move_to(3, true);
        h.clear();

        h.slider.on_layout(WIDTH);
        let first = h.viewport.commands();
        h.slider.on_layout(WIDTH);
        let second = h.viewport.commands();

        assert_eq!(first, vec![command(1200.0, false)]);
        assert_eq!(second, vec![command(1200.0, false); 2]);
        assert_eq!(h.slider.position(), SlideIndex::Real(3));
        assert!(h.changes().is_empty());
    }

    #[test]
    fn controlled_layout_realigns_to_caller_position_without_callback() {
        let mut h = Harness::new(args(5).position(3));
        h.slider.on_scroll_settle(400.0);
        assert_eq!(h.changes(), vec![1]);
        h.clear();

        h.slider.on_layout(WIDTH);
        h.slider.on_layout(WIDTH);

        assert_eq!(h.viewport.commands(), vec![command(1200.0, false); 2]);
        assert_eq!(h.slider.internal_index(), SlideIndex::Real(3));
        assert_eq!(h.slider.position(), SlideIndex::Real(3));
        assert!(h.changes().is_empty());
    }

    #[test]
    fn out_of_range_controlled_position_stays_silent() {
        let mut h = Harness::new(args(5).position(7));
        assert_eq!(h.slider.internal_index(), SlideIndex::Real(0));

        h.slider.on_layout(WIDTH);
        h.slider.on_layout(Px(800));

        assert!(h.viewport.commands().is_empty());
        assert!(h.changes().is_empty());
        assert_eq!(h.slider.internal_index(), SlideIndex::Real(0));
    }

    #[test]
    fn layout_realigns_offset_to_new_width() {
        let mut h = Harness::new(args(5));
        h.slider.move_to(2, true);
        h.slider.on_layout(Px(800));
        assert_eq!(h.viewport.last(), Some(command(1600.0, false)));
        assert_eq!(h.slider.width(), Px(800));
        assert_eq!(h.slider.position(), SlideIndex::Real(2));
    }

    #[test]
    fn controlled_position_wins_and_is_not_echoed() {
        let mut h = Harness::new(args(5).position(2));
        assert_eq!(h.slider.position_mode(), PositionMode::Controlled(2));
        assert_eq!(h.slider.internal_index(), SlideIndex::Real(2));

        let next = h.slider.args().clone().position(3);
        h.slider.set_args(next);
        assert_eq!(h.viewport.last(), Some(command(1200.0, true)));
        assert_eq!(h.slider.internal_index(), SlideIndex::Real(3));
        assert!(h.changes().is_empty());

        // A swipe reports the new index; the caller decides whether to adopt
        // it.
        h.slider.on_scroll_settle(400.0);
        assert_eq!(h.changes(), vec![1]);
        assert_eq!(h.slider.position(), SlideIndex::Real(3));
    }

    #[test]
    fn controlled_position_zero_is_honoured() {
        let mut h = Harness::new(args(5));
        h.slider.move_to(3, true);
        h.clear();

        let next = h.slider.args().clone().position(0);
        h.slider.set_args(next);
        assert_eq!(h.viewport.last(), Some(command(0.0, true)));
        assert_eq!(h.slider.position(), SlideIndex::Real(0));
        assert!(h.changes().is_empty());
    }

    #[test]
    fn shrinking_images_clamps_index() {
        let mut h = Harness::new(args(5));
        h.slider.move_to(4, true);
        let next = h.slider.args().clone().images(images(2));
        h.slider.set_args(next);
        assert_eq!(h.slider.position(), SlideIndex::Real(1));
    }

    #[test]
    fn empty_images_degrade_gracefully() {
        let mut h = Harness::new(args(0).auto_play_with_interval(Duration::from_secs(1)));
        assert!(!h.slider.is_autoplay_running());

        h.slider.move_to(0, true);
        h.slider.on_scroll_settle(0.0);
        h.tick(Duration::from_secs(5));

        let view = h.slider.render();
        assert!(view.slides.is_empty());
        assert!(view.buttons.actions().is_empty());
        assert!(h.viewport.commands().is_empty());
        assert!(h.changes().is_empty());
    }

    #[test]
    fn settle_before_first_layout_is_ignored() {
        let changes = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&changes);
        let args = args(3).on_position_changed(move |p| recorded.lock().push(p));
        let mut slider = ImageSlider::mount(args, RecordingViewport::new(), ManualTimer::new());
        slider.on_scroll_settle(500.0);
        assert_eq!(slider.position(), SlideIndex::Real(0));
        assert!(changes.lock().is_empty());
    }

    #[test]
    fn render_places_ghost_slides_around_real_ones() {
        let h = Harness::new(args(3).loop_both_sides(true));
        let view = h.slider.render();

        assert_eq!(view.slides.len(), 5);
        let Node::Image { source, style } = &view.slides[0] else {
            panic!("expected the leading ghost image");
        };
        assert_eq!(source.uri(), Some("https://example.com/2.jpg"));
        assert_eq!(style.margin_leading, Px(-400));
        let Node::Image { source, .. } = &view.slides[4] else {
            panic!("expected the trailing ghost image");
        };
        assert_eq!(source.uri(), Some("https://example.com/0.jpg"));

        assert!(view.scroll.bounces);
        assert_eq!(view.scroll.content_inset_leading, WIDTH);
        assert_eq!(view.edge_blocker, None);
    }

    #[test]
    fn edge_blocker_only_on_first_slide_without_both_sides_loop() {
        let mut h = Harness::new(args(3).looping(true));
        assert!(h.slider.render().edge_blocker.is_some());
        h.slider.move_to(1, true);
        assert!(h.slider.render().edge_blocker.is_none());
        assert_eq!(h.slider.render().slides.len(), 4);
    }

    #[test]
    fn dots_navigate_when_dispatched() {
        let mut h = Harness::new(args(3));
        let actions = h.slider.render().buttons.actions();
        h.slider.dispatch(actions[2]);
        assert_eq!(h.slider.position(), SlideIndex::Real(2));
        assert_eq!(h.changes(), vec![2]);
    }

    #[test]
    fn slide_press_reports_image_and_index() {
        let pressed = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&pressed);
        let mut h = Harness::new(
            args(3)
                .loop_both_sides(true)
                .on_press(move |event| recorded.lock().push(event)),
        );

        let view = h.slider.render();
        let actions = view.slides[0].actions();
        assert_eq!(
            actions,
            vec![PressAction::PressSlide {
                index: SlideIndex::LeadingGhost
            }]
        );
        h.slider.dispatch(actions[0]);

        let pressed = pressed.lock();
        assert_eq!(pressed.len(), 1);
        assert_eq!(pressed[0].index, SlideIndex::LeadingGhost);
        assert_eq!(pressed[0].image.uri(), Some("https://example.com/2.jpg"));
    }

    #[test]
    fn custom_delegates_replace_defaults() {
        let mut h = Harness::new(
            args(3)
                .custom_slide(|slide| Node::Label(format!("slide {:?}", slide.index)))
                .custom_buttons(|scope| {
                    Node::Label(format!("{}/{}", scope.position, scope.navigator.image_count()))
                        .pressable(
                            scope.navigator.jump_to(scope.position + 1),
                            crate::PressFeedback::Opacity {
                                delay_press_in: Duration::ZERO,
                            },
                        )
                }),
        );

        let view = h.slider.render();
        assert_eq!(view.slides[1], Node::Label("slide Real(1)".into()));
        let actions = view.buttons.actions();
        assert_eq!(
            actions,
            vec![PressAction::MoveTo {
                index: 1,
                animated: false
            }]
        );

        h.slider.dispatch(actions[0]);
        assert_eq!(h.viewport.last(), Some(command(400.0, false)));
        assert_eq!(h.changes(), vec![1]);
    }
}
