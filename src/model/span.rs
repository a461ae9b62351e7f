//! Highlighted spans

use serde::{Deserialize, Serialize};

use super::position::{Position, TextRange};
use crate::palette::ColorTag;

/// A highlighted text range with its color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub range: TextRange,
    pub color: ColorTag,
}

impl Span {
    /// Create a span from two positions (normalized into start <= end)
    pub fn new(start: Position, end: Position, color: ColorTag) -> Self {
        Self {
            range: TextRange::new(start, end),
            color,
        }
    }

    /// Create a span covering `range`
    pub fn from_range(range: TextRange, color: ColorTag) -> Self {
        Self { range, color }
    }
}
