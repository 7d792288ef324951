// SPDX-License-Identifier: MIT
//
// The canonical color value: three normalized RGB channels.
//
// Single-character channel names (r, g, b) follow the usual color-science
// convention.
#![allow(clippy::many_single_char_names)]
//
// Hosts supply colors in several shapes. Conversion happens once, here, at
// the boundary:
//
//   f64 triple in [0, 1]   → Color::rgb   (clamped, NaN → 0)
//   8-bit triple 0–255     → Color::rgb8  (÷ 255)
//   "#RGB" / "#RRGGBB"     → str::parse
//   "rgb(r, g, b)" / "r,g,b" → str::parse
//
// Alpha is always opaque and is not stored.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ColorParseError;
use crate::mixer;

// ─── Color ───────────────────────────────────────────────────────────────────

/// An opaque RGB color with channels normalized to `[0.0, 1.0]`.
///
/// Colors have no identity; two colors with the same channels are the same
/// color. Construct through [`Color::rgb`] or [`Color::rgb8`] to get the
/// range guarantee. The fields are public for reading and for pattern
/// matching, and everything that formats a color clamps again, so a
/// hand-built out-of-range value can never overflow the 0–255 display range.
///
/// # Examples
///
/// ```
/// use cb_color::Color;
///
/// let red = Color::rgb(1.0, 0.0, 0.0);
/// assert_eq!(red, Color::rgb8(255, 0, 0));
/// assert_eq!(red, "#f00".parse::<Color>().unwrap());
/// assert_eq!(red.to_string(), "#FF0000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red intensity, 0.0 to 1.0.
    pub r: f64,

    /// Green intensity, 0.0 to 1.0.
    pub g: f64,

    /// Blue intensity, 0.0 to 1.0.
    pub b: f64,
}

impl Color {
    // ─── Constants ───────────────────────────────────────────────────────

    /// Pure black.
    pub const BLACK: Self = Self { r: 0.0, g: 0.0, b: 0.0 };

    /// Pure white.
    pub const WHITE: Self = Self { r: 1.0, g: 1.0, b: 1.0 };

    /// Pure red.
    pub const RED: Self = Self { r: 1.0, g: 0.0, b: 0.0 };

    /// Pure green.
    pub const GREEN: Self = Self { r: 0.0, g: 1.0, b: 0.0 };

    /// Pure blue.
    pub const BLUE: Self = Self { r: 0.0, g: 0.0, b: 1.0 };

    // ─── Constructors ────────────────────────────────────────────────────

    /// Create a color from normalized channels.
    ///
    /// Each channel is clamped to `[0.0, 1.0]` and NaN becomes `0.0`.
    /// Color pickers routinely hand back values like `1.0000001`; those are
    /// pulled into range instead of rejected.
    #[must_use]
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: sanitize(r),
            g: sanitize(g),
            b: sanitize(b),
        }
    }

    /// Create a color from 8-bit channels (0 to 255).
    #[must_use]
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: f64::from(r) / 255.0,
            g: f64::from(g) / 255.0,
            b: f64::from(b) / 255.0,
        }
    }

    // ─── Conversion ──────────────────────────────────────────────────────

    /// Channels as a tuple, in `(r, g, b)` order.
    #[inline]
    #[must_use]
    pub const fn channels(self) -> (f64, f64, f64) {
        (self.r, self.g, self.b)
    }

    /// Convert to 8-bit channels: × 255, rounded half away from zero,
    /// clamped to 0–255.
    #[must_use]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        (to_u8(self.r), to_u8(self.g), to_u8(self.b))
    }

    /// Whether every channel of `self` is within `eps` of `other`.
    #[must_use]
    pub fn approx_eq(self, other: Self, eps: f64) -> bool {
        (self.r - other.r).abs() <= eps
            && (self.g - other.g).abs() <= eps
            && (self.b - other.b).abs() <= eps
    }
}

impl Default for Color {
    /// Default is black, the background of an empty palette.
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&mixer::hex_code(*self))
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb8(r, g, b)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ColorParseError::Empty);
        }

        if s.get(..3).is_some_and(|p| p.eq_ignore_ascii_case("rgb")) {
            let inner = s[3..]
                .trim_start()
                .strip_prefix('(')
                .and_then(|rest| rest.strip_suffix(')'))
                .ok_or_else(|| ColorParseError::InvalidFunc(s.to_string()))?;
            return parse_triple(inner).ok_or_else(|| ColorParseError::InvalidFunc(s.to_string()))?;
        }

        if s.contains(',') {
            return parse_triple(s).ok_or_else(|| ColorParseError::InvalidFunc(s.to_string()))?;
        }

        parse_hex(s)
    }
}

// ─── Parsing ─────────────────────────────────────────────────────────────────

static TRIPLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)\s*$").expect("triple pattern is valid")
});

/// Parse `r, g, b` with 8-bit integer channels.
///
/// `None` means the text isn't a triple at all; `Some(Err(..))` means it is
/// one but a channel doesn't fit in a byte.
fn parse_triple(s: &str) -> Option<Result<Color, ColorParseError>> {
    let caps = TRIPLE.captures(s)?;
    let mut channels = [0u8; 3];
    for (slot, m) in channels.iter_mut().zip(caps.iter().skip(1).flatten()) {
        match m.as_str().parse::<u8>() {
            Ok(v) => *slot = v,
            Err(_) => return Some(Err(ColorParseError::OutOfRange(m.as_str().to_string()))),
        }
    }
    let [r, g, b] = channels;
    Some(Ok(Color::rgb8(r, g, b)))
}

/// Parse `#RGB` or `#RRGGBB` (the `#` is optional).
fn parse_hex(s: &str) -> Result<Color, ColorParseError> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    let bytes = digits.as_bytes();

    if bytes.len() != 3 && bytes.len() != 6 {
        return Err(ColorParseError::InvalidLength(bytes.len()));
    }
    if !bytes.iter().all(u8::is_ascii_hexdigit) {
        return Err(ColorParseError::InvalidHex(s.to_string()));
    }

    let color = if bytes.len() == 3 {
        let r = hex_digit(bytes[0]);
        let g = hex_digit(bytes[1]);
        let b = hex_digit(bytes[2]);
        Color::rgb8(r << 4 | r, g << 4 | g, b << 4 | b)
    } else {
        Color::rgb8(
            hex_digit(bytes[0]) << 4 | hex_digit(bytes[1]),
            hex_digit(bytes[2]) << 4 | hex_digit(bytes[3]),
            hex_digit(bytes[4]) << 4 | hex_digit(bytes[5]),
        )
    };
    Ok(color)
}

/// Value of an ASCII hex digit. Callers have already validated `c`.
#[inline]
const fn hex_digit(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => 0,
    }
}

// ─── Channel helpers ─────────────────────────────────────────────────────────

/// Pull a channel into `[0, 1]`.
#[allow(clippy::float_cmp)]
fn sanitize(v: f64) -> f64 {
    if v.is_nan() {
        log::trace!("color channel is NaN, using 0.0");
        return 0.0;
    }
    // `+ 0.0` turns -0.0 into 0.0 so readouts never print "-0.00".
    let clamped = v.clamp(0.0, 1.0) + 0.0;
    if clamped != v {
        log::trace!("color channel {v} clamped to {clamped}");
    }
    clamped
}

/// Convert a normalized channel to 0–255, rounding half away from zero.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Clamp guarantees 0.0 <= value <= 255.0 before truncation; NaN casts to 0.
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
