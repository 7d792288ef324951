// SPDX-License-Identifier: MIT
//
// Error types for color parsing and blending.

use thiserror::Error;

/// `blend` was handed zero colors.
///
/// There is no meaningful average of nothing. Callers are expected to guard
/// against this (the palette falls back to black before ever asking).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot blend an empty list of colors")]
pub struct EmptyInputError;

/// Why a color string could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("empty color string")]
    Empty,

    #[error("invalid hex length: expected 3 or 6 digits, got {0}")]
    InvalidLength(usize),

    #[error("invalid hex digits in '{0}'")]
    InvalidHex(String),

    #[error("invalid rgb() notation: '{0}'")]
    InvalidFunc(String),

    #[error("component {0} out of range 0..=255")]
    OutOfRange(String),
}
