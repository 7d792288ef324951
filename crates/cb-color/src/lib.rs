// SPDX-License-Identifier: MIT
//
// cb-color — color values and channel-wise blending for color-blender.
//
// Colors are plain RGB triples of normalized floats. Everything in here is
// a pure function over those triples: averaging a set of colors, scoring
// their brightness, and turning them into the strings a UI shows (hex codes
// and 0–255 component readouts).
//
// Host environments hand colors over in whatever shape they have (8-bit
// integers, hex strings, `rgb(...)` text). The conversions at the boundary
// live in `color`; the math lives in `mixer` and never sees anything but
// `f64` channels in [0, 1].

pub mod color;
pub mod error;
pub mod mixer;

pub use color::Color;
pub use error::{ColorParseError, EmptyInputError};
pub use mixer::{ColorMixer, Components, Mixer};
