//! # cb-palette — the nine-slot color palette
//!
//! The model behind color-blender's grid: up to nine chosen colors, a
//! trailing "add" slot, an editing mode for deleting colors, and the blended
//! background with everything a UI needs to draw on top of it.
//!
//! # Architecture
//!
//! ```text
//! pick / remove / set_editing
//!     │
//!     ▼
//! palette.rs:     ordered colors + trailing empty slot
//!     │
//!     ▼
//! cb_color::Mixer: blend → background, is_light → contrast color
//!     │
//!     ▼
//! description.rs: hex code, 0–255 readouts, text color
//! ```
//!
//! The mixer is injected, so the palette never reaches for a concrete
//! implementation of the color math.

pub mod description;
pub mod palette;

pub use description::ColorDescription;
pub use palette::{MAX_COLORS, Palette, PaletteError, Slot};
