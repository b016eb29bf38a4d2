//! Duplicate group markers
//!
//! A fixed palette of seven colored symbols, handed out in order and reused
//! cyclically once exhausted.

use serde::Serialize;

/// Visual marker attached to every line of one duplicate group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Marker {
    /// 🔴
    Red,
    /// 🟡
    Yellow,
    /// 🔵
    Blue,
    /// 🟣
    Purple,
    /// 🟠
    Orange,
    /// 🟤
    Brown,
    /// ⚫
    Black,
}

impl Marker {
    /// Palette in assignment order
    pub const PALETTE: [Self; 7] = [
        Self::Red,
        Self::Yellow,
        Self::Blue,
        Self::Purple,
        Self::Orange,
        Self::Brown,
        Self::Black,
    ];

    /// Marker for the `n`th duplicate group (0-based), wrapping after the palette
    #[must_use]
    pub const fn nth(n: usize) -> Self {
        Self::PALETTE[n % Self::PALETTE.len()]
    }

    /// The emoji rendered in reports
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Red => "🔴",
            Self::Yellow => "🟡",
            Self::Blue => "🔵",
            Self::Purple => "🟣",
            Self::Orange => "🟠",
            Self::Brown => "🟤",
            Self::Black => "⚫",
        }
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
