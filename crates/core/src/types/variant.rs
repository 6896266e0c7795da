//! Size and color options offered on the product detail screen.
//!
//! Cart lines store the chosen option as its label string; these enums are
//! the set of labels the storefront offers and validates against.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors parsing a variant option label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VariantError {
    #[error("invalid size: {0}")]
    InvalidSize(String),
    #[error("invalid color: {0}")]
    InvalidColor(String),
}

/// Garment size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Size {
    S,
    M,
    L,
    XL,
}

impl Size {
    pub const ALL: [Self; 4] = [Self::S, Self::M, Self::L, Self::XL];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::S => "S",
            Self::M => "M",
            Self::L => "L",
            Self::XL => "XL",
        }
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Size {
    type Err = VariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "S" => Ok(Self::S),
            "M" => Ok(Self::M),
            "L" => Ok(Self::L),
            "XL" => Ok(Self::XL),
            _ => Err(VariantError::InvalidSize(s.to_string())),
        }
    }
}

/// Product color, labelled in Vietnamese.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    White,
    Black,
    Brown,
}

impl Color {
    pub const ALL: [Self; 4] = [Self::Red, Self::White, Self::Black, Self::Brown];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Red => "Đỏ",
            Self::White => "Trắng",
            Self::Black => "Đen",
            Self::Brown => "Nâu",
        }
    }

    /// Swatch color as `0xRRGGBB`.
    #[must_use]
    pub const fn hex(self) -> u32 {
        match self {
            Self::Red => 0x00E5_3935,
            Self::White => 0x00FF_FFFF,
            Self::Black => 0x0000_0000,
            Self::Brown => 0x0079_5548,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Color {
    type Err = VariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|color| color.label() == s)
            .ok_or_else(|| VariantError::InvalidColor(s.to_string()))
    }
}
