// SPDX-License-Identifier: MIT
//
// color-blender — blend up to nine colors and describe the result.
//
// This is the binary that wires the crates together:
//
//   cb-color   → Color parsing, blend / luminance / hex math
//   cb-palette → nine-slot palette, background, description panel
//
// Each run flows through:
//
//   argv → clap → Config (flags + NO_COLOR + tty check)
//        → parse colors → Palette::with_colors → describe
//        → render::swatch (+ render::slots) → stdout
//
// Logging goes to stderr through env_logger; set RUST_LOG=debug to see
// palette mutations and output decisions.

mod config;
mod render;

use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use cb_color::{Color, ColorMixer};
use cb_palette::Palette;

use crate::config::{Cli, Config};

fn main() {
    env_logger::init();

    let config = Config::from_cli(Cli::parse());
    if let Err(e) = run(&config) {
        eprintln!("color-blender: {e:#}");
        process::exit(1);
    }
}

fn run(config: &Config) -> Result<()> {
    let colors = parse_colors(&config.colors)?;
    let palette = Palette::with_colors(ColorMixer, colors).context("cannot build palette")?;
    log::info!(
        "blended {} colors into {}",
        palette.len(),
        palette.background()
    );

    let mut out = io::stdout().lock();
    render::swatch(&mut out, &palette.describe(), config.width, config.ansi)?;
    if config.show_slots {
        writeln!(out)?;
        render::slots(&mut out, &palette, config.ansi)?;
    }
    out.flush()?;
    Ok(())
}

/// Parse every color argument, naming the first one that fails.
fn parse_colors(args: &[String]) -> Result<Vec<Color>> {
    args.iter()
        .map(|arg| {
            arg.parse::<Color>()
                .with_context(|| format!("invalid color '{arg}'"))
        })
        .collect()
}

// ─── Tests ──────────────────────────────────────────────────────────────────
