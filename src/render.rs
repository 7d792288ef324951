// SPDX-License-Identifier: MIT
//
// Terminal output for a palette.
//
// The swatch is a block of rows painted in the background color with the
// description drawn in its contrast color:
//
//   ┌────────────────────────────────┐
//   │                                │
//   │  #800080                       │   ← bg = blend, fg = black/white
//   │  R: 127.50  G: 0.00  B: 127.50 │
//   │                                │
//   └────────────────────────────────┘
//
// Every row is padded to the same display width, so the block stays square
// even if a line carries wide characters. Plain mode prints the description
// lines with no escape codes at all.

use std::io::{self, Write};

use cb_color::{Color, Mixer};
use cb_palette::{ColorDescription, Palette, Slot};
use unicode_width::UnicodeWidthStr;

/// Columns of padding left of the text inside a swatch.
const INSET: usize = 2;

// ─── Escape sequences ────────────────────────────────────────────────────────

/// Set the foreground color (24-bit SGR 38;2).
fn fg(w: &mut impl Write, color: Color) -> io::Result<()> {
    let (r, g, b) = color.to_rgb8();
    write!(w, "\x1b[38;2;{r};{g};{b}m")
}

/// Set the background color (24-bit SGR 48;2).
fn bg(w: &mut impl Write, color: Color) -> io::Result<()> {
    let (r, g, b) = color.to_rgb8();
    write!(w, "\x1b[48;2;{r};{g};{b}m")
}

/// Reset all SGR attributes (SGR 0).
fn reset(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[0m")
}

// ─── Swatch ──────────────────────────────────────────────────────────────────

/// Draw the description of a color.
///
/// With `ansi`, the lines sit inside a `width`-column block painted in the
/// color, framed by a blank row above and below. The block widens to fit
/// the text if `width` is too narrow.
pub fn swatch(
    w: &mut impl Write,
    desc: &ColorDescription,
    width: usize,
    ansi: bool,
) -> io::Result<()> {
    let lines = desc.lines();

    if !ansi {
        for line in &lines {
            writeln!(w, "{line}")?;
        }
        return Ok(());
    }

    let text_width = lines.iter().map(|l| l.width()).max().unwrap_or(0);
    let width = width.max(text_width + 2 * INSET);

    let blank = String::new();
    let rows = std::iter::once(&blank).chain(&lines).chain(std::iter::once(&blank));
    for line in rows {
        bg(w, desc.color)?;
        fg(w, desc.text_color)?;
        let pad = width - INSET - line.width();
        write!(w, "{:inset$}{line}{:pad$}", "", "", inset = INSET)?;
        reset(w)?;
        writeln!(w)?;
    }
    Ok(())
}

// ─── Slots ───────────────────────────────────────────────────────────────────

/// List every cell of the palette, one per line, numbered from 1.
///
/// Color cells show a small chip (with `ansi`) and the hex code; the empty
/// cell shows `+`.
pub fn slots<M: Mixer>(w: &mut impl Write, palette: &Palette<M>, ansi: bool) -> io::Result<()> {
    for (i, slot) in palette.slots().enumerate() {
        write!(w, "{:>2} ", i + 1)?;
        match slot {
            Slot::Color(color) => {
                if ansi {
                    bg(w, color)?;
                    w.write_all(b"    ")?;
                    reset(w)?;
                    w.write_all(b" ")?;
                }
                writeln!(w, "{}", palette.mixer().hex_code(color))?;
            }
            Slot::Empty => writeln!(w, "+")?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cb_color::ColorMixer;
    use pretty_assertions::assert_eq;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn plain_swatch_is_just_the_description() {
        let desc = ColorDescription::new(&ColorMixer, Color::RED);
        let out = render(|w| swatch(w, &desc, 32, false));
        assert_eq!(out, "#FF0000\nR: 255.00  G: 0.00  B: 0.00\n");
    }

    #[test]
    fn ansi_swatch_paints_every_row() {
        let desc = ColorDescription::new(&ColorMixer, Color::WHITE);
        let out = render(|w| swatch(w, &desc, 40, true));
        let rows: Vec<&str> = out.lines().collect();
        assert_eq!(rows.len(), 4);
        for row in &rows {
            assert!(row.starts_with("\x1b[48;2;255;255;255m\x1b[38;2;0;0;0m"), "{row:?}");
            assert!(row.ends_with("\x1b[0m"), "{row:?}");
        }
        assert!(rows[1].contains("  #FFFFFF"));
    }

    #[test]
    fn ansi_rows_are_padded_to_width() {
        let desc = ColorDescription::new(&ColorMixer, Color::BLACK);
        let out = render(|w| swatch(w, &desc, 40, true));
        let prefix = "\x1b[48;2;0;0;0m\x1b[38;2;255;255;255m";
        for row in out.lines() {
            let text = row
                .strip_prefix(prefix)
                .and_then(|r| r.strip_suffix("\x1b[0m"))
                .unwrap();
            assert_eq!(text.width(), 40, "{text:?}");
        }
    }

    #[test]
    fn narrow_swatch_widens_to_fit() {
        let desc = ColorDescription::new(&ColorMixer, Color::WHITE);
        let out = render(|w| swatch(w, &desc, 1, true));
        let rgb_row = out.lines().nth(2).unwrap();
        assert!(rgb_row.contains("R: 255.00  G: 255.00  B: 255.00  \x1b[0m"));
    }

    #[test]
    fn plain_slots_listing() {
        let palette = Palette::with_colors(ColorMixer, [Color::RED, Color::BLUE]).unwrap();
        let out = render(|w| slots(w, &palette, false));
        assert_eq!(out, " 1 #FF0000\n 2 #0000FF\n 3 +\n");
    }

    #[test]
    fn ansi_slots_show_chips() {
        let palette = Palette::with_colors(ColorMixer, [Color::GREEN]).unwrap();
        let out = render(|w| slots(w, &palette, true));
        assert_eq!(
            out,
            " 1 \x1b[48;2;0;255;0m    \x1b[0m #00FF00\n 2 +\n"
        );
    }
}
