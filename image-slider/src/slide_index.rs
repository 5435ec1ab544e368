//! Slide indices, including the ghost slides used for wraparound.
//!
//! Looping sliders render a copy of the first image after the last one and,
//! when looping both ways, a copy of the last image before the first one.
//! The slider rests on a ghost only until the scroll settles there, at which
//! point it snaps back to the real slide the ghost mirrors.

/// Which ghost slides exist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopMode {
    /// No wraparound.
    #[default]
    None,
    /// Wraps forward through one trailing ghost slide.
    Forward,
    /// Wraps in both directions through leading and trailing ghost slides.
    BothSides,
}

impl LoopMode {
    /// Builds the mode from the `loop` and `loop_both_sides` flags;
    /// `loop_both_sides` wins.
    pub fn from_flags(loop_: bool, loop_both_sides: bool) -> Self {
        match (loop_, loop_both_sides) {
            (_, true) => Self::BothSides,
            (true, false) => Self::Forward,
            (false, false) => Self::None,
        }
    }

    /// Whether moving past the last slide wraps to the first.
    pub fn loops_forward(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Whether a ghost of the last image precedes the first slide.
    pub fn has_leading_ghost(self) -> bool {
        matches!(self, Self::BothSides)
    }

    /// Whether a ghost of the first image follows the last slide.
    pub fn has_trailing_ghost(self) -> bool {
        self.loops_forward()
    }
}

/// Position within the rendered strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlideIndex {
    /// Ghost copy of the last image at offset `-width`.
    LeadingGhost,
    /// A real image.
    Real(usize),
    /// Ghost copy of the first image at offset `count * width`.
    TrailingGhost,
}

impl SlideIndex {
    /// Maps a signed strip index to a slide index.
    ///
    /// `-1` and `count` resolve to ghosts only when `mode` renders them.
    /// Anything else outside `0..count` is `None`.
    pub fn resolve(index: isize, count: usize, mode: LoopMode) -> Option<Self> {
        if count == 0 {
            return None;
        }
        if index == -1 {
            return mode.has_leading_ghost().then_some(Self::LeadingGhost);
        }
        let index = usize::try_from(index).ok()?;
        if index < count {
            Some(Self::Real(index))
        } else if index == count && mode.has_trailing_ghost() {
            Some(Self::TrailingGhost)
        } else {
            None
        }
    }

    /// Whether this index exists for the given count and mode.
    pub fn is_valid(self, count: usize, mode: LoopMode) -> bool {
        match self {
            Self::LeadingGhost => count > 0 && mode.has_leading_ghost(),
            Self::Real(i) => i < count,
            Self::TrailingGhost => count > 0 && mode.has_trailing_ghost(),
        }
    }

    /// Signed strip index: `-1`, `i`, or `count`.
    pub fn as_isize(self, count: usize) -> isize {
        match self {
            Self::LeadingGhost => -1,
            Self::Real(i) => i as isize,
            Self::TrailingGhost => count as isize,
        }
    }

    /// Horizontal content offset that brings this slide into view.
    pub fn offset(self, width: f32, count: usize) -> f32 {
        self.as_isize(count) as f32 * width
    }

    /// Whether this is one of the two ghost slides.
    pub fn is_ghost(self) -> bool {
        !matches!(self, Self::Real(_))
    }

    /// The real image index, if any.
    pub fn real(self) -> Option<usize> {
        match self {
            Self::Real(i) => Some(i),
            _ => None,
        }
    }

    /// The real slide a ghost mirrors; real slides map to themselves.
    pub fn mirrored(self, count: usize) -> Self {
        match self {
            Self::LeadingGhost => Self::Real(count.saturating_sub(1)),
            Self::Real(_) => self,
            Self::TrailingGhost => Self::Real(0),
        }
    }

    /// The slide autoplay advances to.
    ///
    /// From the last real slide this is the trailing ghost when looping and
    /// the first slide otherwise. Ghosts advance to the slide they mirror.
    pub fn advance(self, count: usize, mode: LoopMode) -> Self {
        match self {
            Self::Real(i) if i + 1 < count => Self::Real(i + 1),
            Self::Real(_) if mode.loops_forward() => Self::TrailingGhost,
            Self::Real(_) => Self::Real(0),
            ghost => ghost.mirrored(count),
        }
    }
}

impl Default for SlideIndex {
    fn default() -> Self {
        Self::Real(0)
    }
}
