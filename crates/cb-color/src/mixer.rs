// SPDX-License-Identifier: MIT
//
// Color mixing and analysis.
//
// Everything here is a pure function over `Color` values: no state, no I/O,
// safe to call from any thread. The free functions are the implementation;
// the `Mixer` trait exists so presentation code can take a mixer as a
// dependency instead of calling the functions directly.
//
//   blend               channel-wise arithmetic mean, no gamma handling
//   relative_luminance  fixed NTSC luma weights 299 / 587 / 114
//   is_light            luminance >= 0.8
//   format_components   channel × 255 with two decimals ("127.50")
//   hex_code            channel × 255 rounded, "#RRGGBB" uppercase

use crate::color::Color;
use crate::error::EmptyInputError;

/// Luminance at or above which a color counts as light.
///
/// Light backgrounds get black text; everything below gets white text.
pub const LIGHT_THRESHOLD: f64 = 0.8;

// ─── Operations ──────────────────────────────────────────────────────────────

/// Average a list of colors channel by channel.
///
/// Each input is clamped to `[0, 1]` first (NaN counts as 0). A single
/// color then comes back without a round trip through the division. Two or
/// more colors produce `Σ channel / N` for each channel in plain linear RGB.
///
/// # Errors
///
/// Returns [`EmptyInputError`] if `colors` is empty.
///
/// # Examples
///
/// ```
/// use cb_color::Color;
/// use cb_color::mixer::blend;
///
/// let gray = blend(&[Color::BLACK, Color::WHITE]).unwrap();
/// assert_eq!(gray, Color::rgb(0.5, 0.5, 0.5));
/// assert!(blend(&[]).is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn blend(colors: &[Color]) -> Result<Color, EmptyInputError> {
    match colors {
        [] => Err(EmptyInputError),
        [only] => Ok(clamped(*only)),
        _ => {
            let n = colors.len() as f64;
            let (r, g, b) = colors.iter().map(|&c| clamped(c)).fold(
                (0.0, 0.0, 0.0),
                |(r, g, b), c| (r + c.r, g + c.g, b + c.b),
            );
            Ok(Color::rgb(r / n, g / n, b / n))
        }
    }
}

/// Weighted brightness of a color, 0.0 (black) to 1.0 (white).
///
/// `(R·299 + G·587 + B·114) / 1000` on normalized channels. These are the
/// classic NTSC luma weights, not WCAG relative luminance: there is no
/// linearization step.
#[must_use]
#[allow(clippy::suboptimal_flops)]
pub fn relative_luminance(color: Color) -> f64 {
    let (r, g, b) = clamped(color).channels();
    (r * 299.0 + g * 587.0 + b * 114.0) / 1000.0
}

/// Whether a color is light enough to need dark text on top of it.
///
/// A luminance of exactly [`LIGHT_THRESHOLD`] is light.
#[must_use]
pub fn is_light(color: Color) -> bool {
    relative_luminance(color) >= LIGHT_THRESHOLD
}

/// Decimal 0–255 readouts of each channel, two decimal places.
///
/// This is the float scaled by 255 and printed, not an integer pixel value:
/// 0.5 reads `"127.50"`.
#[must_use]
pub fn format_components(color: Color) -> Components {
    let (r, g, b) = clamped(color).channels();
    Components {
        red: format!("{:.2}", r * 255.0),
        green: format!("{:.2}", g * 255.0),
        blue: format!("{:.2}", b * 255.0),
    }
}

/// Six-digit uppercase hex code with a leading `#`, e.g. `#FF0000`.
///
/// Channels are scaled by 255, rounded half away from zero, and clamped to
/// 0–255 before formatting.
#[must_use]
pub fn hex_code(color: Color) -> String {
    let (r, g, b) = color.to_rgb8();
    format!("#{r:02X}{g:02X}{b:02X}")
}

/// Re-apply the `[0, 1]` guarantee to a color that may have been built by
/// hand through its public fields.
#[inline]
fn clamped(color: Color) -> Color {
    Color::rgb(color.r, color.g, color.b)
}

// ─── Components ──────────────────────────────────────────────────────────────

/// Display strings for the three channels of a color.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Components {
    pub red: String,
    pub green: String,
    pub blue: String,
}

// ─── Mixer ───────────────────────────────────────────────────────────────────

/// The mixing operations as an injectable dependency.
///
/// [`ColorMixer`] is the only implementation shipped; the trait is the seam
/// where a presentation layer (or a test) takes whatever mixer it is given.
pub trait Mixer {
    /// See [`blend`].
    ///
    /// # Errors
    ///
    /// Returns [`EmptyInputError`] if `colors` is empty.
    fn blend(&self, colors: &[Color]) -> Result<Color, EmptyInputError>;

    /// See [`relative_luminance`].
    fn relative_luminance(&self, color: Color) -> f64;

    /// See [`is_light`].
    fn is_light(&self, color: Color) -> bool {
        self.relative_luminance(color) >= LIGHT_THRESHOLD
    }

    /// See [`format_components`].
    fn format_components(&self, color: Color) -> Components;

    /// See [`hex_code`].
    fn hex_code(&self, color: Color) -> String;
}

/// Stateless [`Mixer`] backed by the free functions in this module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorMixer;

impl Mixer for ColorMixer {
    fn blend(&self, colors: &[Color]) -> Result<Color, EmptyInputError> {
        blend(colors)
    }

    fn relative_luminance(&self, color: Color) -> f64 {
        relative_luminance(color)
    }

    fn is_light(&self, color: Color) -> bool {
        is_light(color)
    }

    fn format_components(&self, color: Color) -> Components {
        format_components(color)
    }

    fn hex_code(&self, color: Color) -> String {
        hex_code(color)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    // ── Blend ───────────────────────────────────────────────────────

    #[test]
    fn blend_empty_is_error() {
        assert_eq!(blend(&[]), Err(EmptyInputError));
    }

    #[test]
    fn blend_single_is_identity() {
        let c = Color::rgb(0.1, 0.2, 0.3);
        assert_eq!(blend(&[c]), Ok(c));
    }

    #[test]
    fn blend_black_white_is_mid_gray() {
        let gray = blend(&[Color::BLACK, Color::WHITE]);
        assert_eq!(gray, Ok(Color::rgb(0.5, 0.5, 0.5)));
    }

    #[test]
    fn blend_primaries_is_third_gray() {
        let c = blend(&[Color::RED, Color::GREEN, Color::BLUE]).unwrap();
        let third = 1.0 / 3.0;
        assert!(c.approx_eq(Color::rgb(third, third, third), 1e-12), "{c:?}");
    }

    #[test]
    fn blend_is_unweighted_mean() {
        // Three reds and one blue: red 0.75, blue 0.25.
        let c = blend(&[Color::RED, Color::RED, Color::RED, Color::BLUE]).unwrap();
        assert_eq!(c, Color::rgb(0.75, 0.0, 0.25));
    }

    #[test]
    fn blend_same_color_is_that_color() {
        let c = Color::rgb8(12, 200, 99);
        let out = blend(&[c; 9]).unwrap();
        assert!(out.approx_eq(c, 1e-12));
    }

    #[test]
    fn blend_clamps_each_input_before_averaging() {
        let hot = Color { r: 3.0, g: 0.0, b: 0.0 };
        let c = blend(&[hot, Color::BLACK]).unwrap();
        assert_eq!(c, Color::rgb(0.5, 0.0, 0.0));
    }

    #[test]
    fn blend_single_out_of_range_is_clamped() {
        let hot = Color { r: 3.0, g: -1.0, b: 0.25 };
        assert_eq!(blend(&[hot]), Ok(Color::rgb(1.0, 0.0, 0.25)));
    }

    #[test]
    fn blend_nan_channel_counts_as_zero() {
        let broken = Color { r: f64::NAN, g: 0.0, b: 0.0 };
        let c = blend(&[broken, Color::WHITE]).unwrap();
        assert_eq!(c, Color::rgb(0.5, 0.5, 0.5));
    }

    // ── Luminance ───────────────────────────────────────────────────

    #[test]
    fn luminance_black_is_zero() {
        assert_eq!(relative_luminance(Color::BLACK), 0.0);
    }

    #[test]
    fn luminance_white_is_one() {
        assert_eq!(relative_luminance(Color::WHITE), 1.0);
    }

    #[test]
    fn luminance_uses_ntsc_weights() {
        assert!(approx_eq(relative_luminance(Color::RED), 0.299, 1e-12));
        assert!(approx_eq(relative_luminance(Color::GREEN), 0.587, 1e-12));
        assert!(approx_eq(relative_luminance(Color::BLUE), 0.114, 1e-12));
    }

    #[test]
    fn luminance_clamps_out_of_range() {
        let c = Color { r: 1.5, g: 1.5, b: 1.5 };
        assert_eq!(relative_luminance(c), 1.0);
    }

    // ── Light / dark ────────────────────────────────────────────────

    #[test]
    fn white_is_light_black_is_dark() {
        assert!(is_light(Color::WHITE));
        assert!(!is_light(Color::BLACK));
    }

    #[test]
    fn primaries_are_dark() {
        assert!(!is_light(Color::RED));
        assert!(!is_light(Color::GREEN));
        assert!(!is_light(Color::BLUE));
    }

    #[test]
    fn threshold_boundary_is_light() {
        // 0.9375·299 + 0.8125·587 + 0.375·114 = 800 exactly.
        let c = Color::rgb(0.9375, 0.8125, 0.375);
        assert_eq!(relative_luminance(c), LIGHT_THRESHOLD);
        assert!(is_light(c));
    }

    #[test]
    fn just_below_threshold_is_dark() {
        let c = Color::rgb(0.9375, 0.8125, 0.37);
        assert!(relative_luminance(c) < LIGHT_THRESHOLD);
        assert!(!is_light(c));
    }

    // ── Formatting ──────────────────────────────────────────────────

    #[test]
    fn components_of_white() {
        let expected = Components {
            red: "255.00".to_string(),
            green: "255.00".to_string(),
            blue: "255.00".to_string(),
        };
        assert_eq!(format_components(Color::WHITE), expected);
    }

    #[test]
    fn components_keep_fraction() {
        let c = format_components(Color::rgb(0.5, 0.0, 1.0 / 3.0));
        assert_eq!(c.red, "127.50");
        assert_eq!(c.green, "0.00");
        assert_eq!(c.blue, "85.00");
    }

    #[test]
    fn components_clamp_drift() {
        let c = format_components(Color { r: 1.000_000_1, g: -0.1, b: 0.0 });
        assert_eq!(c.red, "255.00");
        assert_eq!(c.green, "0.00");
    }

    #[test]
    fn components_never_show_negative_zero() {
        let c = format_components(Color::rgb(-0.0, 0.0, 0.0));
        assert_eq!(c.red, "0.00");
        let c = format_components(Color { r: -0.0, g: -0.0, b: 0.0 });
        assert_eq!(c.red, "0.00");
        assert_eq!(c.green, "0.00");
    }

    #[test]
    fn hex_of_primaries() {
        assert_eq!(hex_code(Color::RED), "#FF0000");
        assert_eq!(hex_code(Color::GREEN), "#00FF00");
        assert_eq!(hex_code(Color::BLUE), "#0000FF");
    }

    #[test]
    fn hex_is_uppercase_and_rounded() {
        assert_eq!(hex_code(Color::rgb8(0xab, 0xcd, 0xef)), "#ABCDEF");
        // 127.5 rounds away from zero.
        assert_eq!(hex_code(Color::rgb(0.5, 0.5, 0.5)), "#808080");
    }

    #[test]
    fn hex_clamps_out_of_range() {
        assert_eq!(hex_code(Color { r: 1.2, g: -0.3, b: 0.0 }), "#FF0000");
    }

    // ── Mixer trait ─────────────────────────────────────────────────

    #[test]
    fn color_mixer_delegates() {
        let mixer = ColorMixer;
        let c = Color::rgb8(10, 20, 30);
        assert_eq!(mixer.blend(&[c]), blend(&[c]));
        assert_eq!(mixer.relative_luminance(c), relative_luminance(c));
        assert_eq!(mixer.is_light(c), is_light(c));
        assert_eq!(mixer.format_components(c), format_components(c));
        assert_eq!(mixer.hex_code(c), hex_code(c));
    }

    #[test]
    fn mixer_works_as_trait_object() {
        let mixer: &dyn Mixer = &ColorMixer;
        assert!(mixer.is_light(Color::WHITE));
        assert_eq!(mixer.blend(&[]), Err(EmptyInputError));
    }

    // -- Property-based tests --

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn color() -> impl Strategy<Value = Color> {
            (0.0_f64..=1.0, 0.0_f64..=1.0, 0.0_f64..=1.0)
                .prop_map(|(r, g, b)| Color::rgb(r, g, b))
        }

        fn colors_and_shuffle() -> impl Strategy<Value = (Vec<Color>, Vec<Color>)> {
            prop::collection::vec(color(), 1..=9)
                .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
        }

        proptest! {
            #[test]
            fn blend_single_is_exact_identity(c in color()) {
                prop_assert_eq!(blend(&[c]), Ok(c));
            }

            #[test]
            fn blend_ignores_order((colors, shuffled) in colors_and_shuffle()) {
                let a = blend(&colors).unwrap();
                let b = blend(&shuffled).unwrap();
                prop_assert!(a.approx_eq(b, 1e-12), "{:?} vs {:?}", a, b);
            }

            #[test]
            fn blend_stays_within_input_bounds(colors in prop::collection::vec(color(), 1..=9)) {
                let out = blend(&colors).unwrap();
                let lo = colors.iter().map(|c| c.r).fold(f64::INFINITY, f64::min);
                let hi = colors.iter().map(|c| c.r).fold(f64::NEG_INFINITY, f64::max);
                prop_assert!(out.r >= lo - 1e-12 && out.r <= hi + 1e-12);
                prop_assert!((0.0..=1.0).contains(&out.g));
                prop_assert!((0.0..=1.0).contains(&out.b));
            }

            #[test]
            fn hex_round_trip_within_one_step(c in color()) {
                let parsed: Color = hex_code(c).parse().unwrap();
                prop_assert!(
                    parsed.approx_eq(c, 1.0 / 255.0),
                    "{:?} -> {} -> {:?}", c, hex_code(c), parsed
                );
            }

            #[test]
            fn luminance_in_unit_range(c in color()) {
                let lum = relative_luminance(c);
                prop_assert!((0.0..=1.0).contains(&lum), "luminance {}", lum);
                prop_assert_eq!(is_light(c), lum >= LIGHT_THRESHOLD);
            }

            #[test]
            fn components_have_two_decimals(c in color()) {
                let parts = format_components(c);
                for s in [&parts.red, &parts.green, &parts.blue] {
                    let (_, frac) = s.split_once('.').unwrap();
                    prop_assert_eq!(frac.len(), 2);
                }
            }
        }
    }
}
