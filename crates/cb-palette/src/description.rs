//! Description panel data — what gets printed over a color.
//!
//! Pairs a color with its hex code, its 0–255 channel readouts, and the
//! text color that stays readable on top of it.

use std::fmt;

use cb_color::{Color, Components, Mixer};

/// Text color for content drawn on a background: black on light
/// backgrounds, white on dark ones.
#[inline]
#[must_use]
pub const fn contrast_color(background_is_light: bool) -> Color {
    if background_is_light {
        Color::BLACK
    } else {
        Color::WHITE
    }
}

/// Everything the description panel shows for one color.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorDescription {
    /// The described color.
    pub color: Color,

    /// `#RRGGBB`.
    pub hex: String,

    /// Two-decimal 0–255 readouts.
    pub components: Components,

    /// Whether `color` is light (luminance >= 0.8).
    pub is_light: bool,

    /// Readable text color on top of `color`.
    pub text_color: Color,
}

impl ColorDescription {
    /// Describe `color` using `mixer` for every derived value.
    #[must_use]
    pub fn new<M: Mixer + ?Sized>(mixer: &M, color: Color) -> Self {
        let is_light = mixer.is_light(color);
        Self {
            color,
            hex: mixer.hex_code(color),
            components: mixer.format_components(color),
            is_light,
            text_color: contrast_color(is_light),
        }
    }

    /// The panel as text lines: the hex code, then the channel readouts.
    #[must_use]
    pub fn lines(&self) -> [String; 2] {
        let Components { red, green, blue } = &self.components;
        [
            self.hex.clone(),
            format!("R: {red}  G: {green}  B: {blue}"),
        ]
    }
}

impl fmt::Display for ColorDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [hex, rgb] = self.lines();
        write!(f, "{hex}\n{rgb}")
    }
}
