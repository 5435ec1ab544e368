//! Resolution of the authoritative slider position.
use crate::SlideIndex;

/// Who owns the current position.
///
/// Resolved once per event or render: a caller-supplied position always wins
/// over the internally tracked index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PositionMode {
    /// The caller drives navigation; the slider only mirrors this index.
    Controlled(usize),
    /// The slider owns its index, which may rest on a ghost slide.
    Uncontrolled(SlideIndex),
}

impl PositionMode {
    /// Resolves the mode from the optional caller position and the internal
    /// index.
    pub fn resolve(controlled: Option<usize>, internal: SlideIndex) -> Self {
        match controlled {
            Some(position) => Self::Controlled(position),
            None => Self::Uncontrolled(internal),
        }
    }

    /// The authoritative slide index.
    pub fn index(self) -> SlideIndex {
        match self {
            Self::Controlled(position) => SlideIndex::Real(position),
            Self::Uncontrolled(index) => index,
        }
    }

    /// Whether the caller owns navigation.
    pub fn is_controlled(self) -> bool {
        matches!(self, Self::Controlled(_))
    }
}
