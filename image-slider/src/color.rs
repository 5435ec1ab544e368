//! Colors used by the slider's default styles.

/// Errors returned by [`Color::from_hex`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseColorError {
    /// The string did not start with `#`.
    #[error("color `{0}` must start with '#'")]
    MissingHash(String),
    /// The number of hex digits was not 3, 4, 6 or 8.
    #[error("color `{input}` has {len} hex digits, expected 3, 4, 6 or 8")]
    InvalidLength {
        /// Original input.
        input: String,
        /// Number of digits after `#`.
        len: usize,
    },
    /// A character was not a hex digit.
    #[error("color `{0}` contains a non-hex digit")]
    InvalidDigit(String),
}

/// A color with `f32` components in the range `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red component.
    pub r: f32,
    /// Green component.
    pub g: f32,
    /// Blue component.
    pub b: f32,
    /// Alpha component.
    pub a: f32,
}

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);
    /// Opaque black.
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

    /// Creates a new color from four components.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from `u8` components.
    #[inline]
    pub fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Creates an opaque color from `u8` components.
    #[inline]
    pub fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba_u8(r, g, b, 255)
    }

    /// Returns the same color with a different alpha.
    #[inline]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Parses CSS-style hex notation: `#rgb`, `#rgba`, `#rrggbb` or
    /// `#rrggbbaa`.
    pub fn from_hex(input: &str) -> Result<Self, ParseColorError> {
        let digits = input
            .strip_prefix('#')
            .ok_or_else(|| ParseColorError::MissingHash(input.to_owned()))?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit(input.to_owned()));
        }

        let nibble = |i: usize| -> u8 {
            // Validated above; every byte is an ASCII hex digit.
            (digits.as_bytes()[i] as char).to_digit(16).unwrap_or(0) as u8
        };
        let byte = |i: usize| nibble(i) * 16 + nibble(i + 1);

        match digits.len() {
            3 => Ok(Self::from_rgb_u8(
                nibble(0) * 17,
                nibble(1) * 17,
                nibble(2) * 17,
            )),
            4 => Ok(Self::from_rgba_u8(
                nibble(0) * 17,
                nibble(1) * 17,
                nibble(2) * 17,
                nibble(3) * 17,
            )),
            6 => Ok(Self::from_rgb_u8(byte(0), byte(2), byte(4))),
            8 => Ok(Self::from_rgba_u8(byte(0), byte(2), byte(4), byte(6))),
            len => Err(ParseColorError::InvalidLength {
                input: input.to_owned(),
                len,
            }),
        }
    }
}

impl Default for Color {
    #[inline]
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

impl From<[u8; 3]> for Color {
    #[inline]
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::from_rgb_u8(r, g, b)
    }
}

impl std::str::FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}
