// SPDX-License-Identifier: MIT
//
// Command-line flags and the environment, resolved into one `Config`.
//
// ANSI output is on only when all of these hold: `--plain` was not given,
// `NO_COLOR` is unset or empty, and stdout is a terminal.

use std::ffi::OsString;
use std::io::{self, IsTerminal};

use clap::Parser;

/// Narrowest swatch we draw, in columns.
pub const MIN_WIDTH: usize = 24;

/// Blend up to nine colors and describe the result.
///
/// Colors may be written as `#RGB`, `#RRGGBB`, `rgb(r, g, b)` or `r,g,b`
/// with 0–255 channels.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Colors to blend, in palette order (at most nine).
    #[arg(value_name = "COLOR")]
    pub colors: Vec<String>,

    /// Print plain text without ANSI colors.
    #[arg(long)]
    pub plain: bool,

    /// Swatch width in columns.
    #[arg(short, long, default_value_t = 32)]
    pub width: usize,

    /// Also list every palette slot.
    #[arg(short, long)]
    pub slots: bool,
}

/// Effective settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub colors: Vec<String>,
    pub ansi: bool,
    pub width: usize,
    pub show_slots: bool,
}

impl Config {
    /// Resolve parsed flags against the real environment.
    #[must_use]
    pub fn from_cli(cli: Cli) -> Self {
        Self::resolve(cli, std::env::var_os("NO_COLOR"), io::stdout().is_terminal())
    }

    /// Resolve parsed flags against an explicit environment.
    fn resolve(cli: Cli, no_color: Option<OsString>, is_terminal: bool) -> Self {
        let no_color = no_color.is_some_and(|v| !v.is_empty());
        let ansi = !cli.plain && !no_color && is_terminal;
        if !ansi {
            log::debug!(
                "ANSI output off (plain={}, NO_COLOR={no_color}, terminal={is_terminal})",
                cli.plain
            );
        }
        Self {
            colors: cli.colors,
            ansi,
            width: cli.width.max(MIN_WIDTH),
            show_slots: cli.slots,
        }
    }
}
