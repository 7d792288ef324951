//! The palette — up to nine chosen colors and their blended background.
//!
//! Colors live in pick order. While there is room for another color, the
//! slot list ends with one [`Slot::Empty`], the cell a user taps to add a
//! color. Picking into an existing slot replaces that color; picking into
//! the empty slot appends.
//!
//! Every mutation re-blends the background and re-classifies it as light or
//! dark, so readers never see a stale value.
//!
//! Editing mode (deleting colors) is only available once there is at least
//! one color to delete, and picking is disabled while it is on.

use cb_color::{Color, ColorMixer, EmptyInputError, Mixer};
use thiserror::Error;

use crate::description::{ColorDescription, contrast_color};

/// Maximum number of colors in a palette.
pub const MAX_COLORS: usize = 9;

/// One cell of the palette grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Slot {
    /// A chosen color.
    Color(Color),

    /// The trailing "add a color" cell.
    Empty,
}

impl Slot {
    /// The color in this slot, if any.
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self {
            Self::Color(c) => Some(c),
            Self::Empty => None,
        }
    }
}

/// Why a palette operation was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    #[error("a palette holds at most {max} colors, got {0}", max = MAX_COLORS)]
    Full(usize),

    #[error("no slot at index {index} (palette has {len})")]
    SlotOutOfRange { index: usize, len: usize },

    #[error("colors cannot be picked while editing")]
    Editing,

    #[error("nothing to edit: the palette has no colors")]
    NotEditable,
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// Ordered set of up to [`MAX_COLORS`] colors blended into a background.
///
/// Generic over the [`Mixer`] so callers can inject their own; the default
/// is [`ColorMixer`].
#[derive(Debug, Clone)]
pub struct Palette<M = ColorMixer> {
    mixer: M,
    colors: Vec<Color>,
    background: Color,
    background_is_light: bool,
    editing: bool,
}

impl Palette {
    /// Create an empty palette with the standard mixer.
    #[must_use]
    pub fn new() -> Self {
        Self::with_mixer(ColorMixer)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Mixer> Palette<M> {
    /// Create an empty palette that uses `mixer` for all color math.
    #[must_use]
    pub fn with_mixer(mixer: M) -> Self {
        let mut palette = Self {
            mixer,
            colors: Vec::with_capacity(MAX_COLORS),
            background: Color::BLACK,
            background_is_light: false,
            editing: false,
        };
        palette.refresh();
        palette
    }

    /// Create a palette seeded with `colors`, in order.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::Full`] if more than [`MAX_COLORS`] colors are
    /// given.
    pub fn with_colors(
        mixer: M,
        colors: impl IntoIterator<Item = Color>,
    ) -> Result<Self, PaletteError> {
        let colors: Vec<Color> = colors.into_iter().collect();
        if colors.len() > MAX_COLORS {
            return Err(PaletteError::Full(colors.len()));
        }
        let mut palette = Self::with_mixer(mixer);
        palette.colors = colors;
        palette.refresh();
        Ok(palette)
    }

    // ── Contents ─────────────────────────────────────────────────────

    /// The chosen colors, in order.
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Number of chosen colors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether no colors have been chosen.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Whether the palette holds [`MAX_COLORS`] colors.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.colors.len() >= MAX_COLORS
    }

    /// Number of grid cells: the colors plus the empty slot, if any.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        if self.is_full() {
            self.colors.len()
        } else {
            self.colors.len() + 1
        }
    }

    /// The cell at `index`, or `None` past the end.
    #[must_use]
    pub fn slot(&self, index: usize) -> Option<Slot> {
        match self.colors.get(index) {
            Some(&c) => Some(Slot::Color(c)),
            None if index == self.colors.len() && !self.is_full() => Some(Slot::Empty),
            None => None,
        }
    }

    /// All grid cells in order.
    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        (0..self.slot_count()).filter_map(|i| self.slot(i))
    }

    // ── Mutation ─────────────────────────────────────────────────────

    /// Put `color` into the slot at `index`.
    ///
    /// An existing color is replaced; the empty slot gains the color and a
    /// new empty slot appears after it (until the palette is full).
    ///
    /// # Errors
    ///
    /// [`PaletteError::Editing`] while editing mode is on;
    /// [`PaletteError::SlotOutOfRange`] if `index` is not a slot.
    pub fn pick(&mut self, index: usize, color: Color) -> Result<(), PaletteError> {
        if self.editing {
            return Err(PaletteError::Editing);
        }
        match self.slot(index) {
            Some(Slot::Color(_)) => self.colors[index] = color,
            Some(Slot::Empty) => self.colors.push(color),
            None => {
                return Err(PaletteError::SlotOutOfRange {
                    index,
                    len: self.slot_count(),
                });
            }
        }
        log::debug!("picked {color} into slot {index}");
        self.refresh();
        Ok(())
    }

    /// Delete the color at `index` and return it.
    ///
    /// Leaving the palette with nothing to edit turns editing mode off.
    ///
    /// # Errors
    ///
    /// [`PaletteError::SlotOutOfRange`] if `index` is not a color slot (the
    /// empty slot can't be removed).
    pub fn remove(&mut self, index: usize) -> Result<Color, PaletteError> {
        if index >= self.colors.len() {
            return Err(PaletteError::SlotOutOfRange {
                index,
                len: self.colors.len(),
            });
        }
        let removed = self.colors.remove(index);
        log::debug!("removed {removed} from slot {index}");
        if !self.can_edit() {
            self.editing = false;
        }
        self.refresh();
        Ok(removed)
    }

    // ── Editing mode ─────────────────────────────────────────────────

    /// Whether editing mode is on.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.editing
    }

    /// Whether editing mode may be turned on (there are at least two
    /// cells, so at least one color).
    #[must_use]
    pub fn can_edit(&self) -> bool {
        self.slot_count() >= 2
    }

    /// Turn editing mode on or off.
    ///
    /// # Errors
    ///
    /// [`PaletteError::NotEditable`] when turning it on with no colors.
    pub fn set_editing(&mut self, editing: bool) -> Result<(), PaletteError> {
        if editing && !self.can_edit() {
            return Err(PaletteError::NotEditable);
        }
        self.editing = editing;
        Ok(())
    }

    // ── Background ───────────────────────────────────────────────────

    /// Blend of the chosen colors; black for an empty palette.
    #[must_use]
    pub const fn background(&self) -> Color {
        self.background
    }

    /// Whether the background is light.
    #[must_use]
    pub const fn background_is_light(&self) -> bool {
        self.background_is_light
    }

    /// Readable color for text and icons drawn on the background.
    #[must_use]
    pub const fn contrast_color(&self) -> Color {
        contrast_color(self.background_is_light)
    }

    /// Description panel data for the background.
    #[must_use]
    pub fn describe(&self) -> ColorDescription {
        ColorDescription::new(&self.mixer, self.background)
    }

    /// The injected mixer.
    #[must_use]
    pub const fn mixer(&self) -> &M {
        &self.mixer
    }

    /// Recompute the cached background after a mutation.
    fn refresh(&mut self) {
        self.background = match self.mixer.blend(&self.colors) {
            Ok(c) => c,
            Err(EmptyInputError) => Color::BLACK,
        };
        self.background_is_light = self.mixer.is_light(self.background);
        log::trace!(
            "background {} ({}) from {} colors",
            self.background,
            if self.background_is_light { "light" } else { "dark" },
            self.colors.len()
        );
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
