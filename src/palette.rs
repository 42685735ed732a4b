//! Scene palette and categorical color assignment.
//!
//! The scene keeps a small fixed palette: deep emerald foliage with gold
//! sparkles, and ornaments drawn from weighted bands of golds, red, and
//! emerald.

use glam::Vec3;

/// Convert a packed `0xRRGGBB` value to linear-ish RGB in [0, 1].
pub fn hex(rgb: u32) -> Vec3 {
    Vec3::new(
        ((rgb >> 16) & 0xFF) as f32 / 255.0,
        ((rgb >> 8) & 0xFF) as f32 / 255.0,
        (rgb & 0xFF) as f32 / 255.0,
    )
}

/// Base foliage color (deep emerald, #023020).
pub fn emerald_deep() -> Vec3 {
    hex(0x023020)
}

/// Accent foliage green (#0B5345).
pub fn emerald_light() -> Vec3 {
    hex(0x0B5345)
}

/// Muted metallic gold (#D4AF37).
pub fn gold_metallic() -> Vec3 {
    hex(0xD4AF37)
}

/// Saturated bright gold (#FFD700).
pub fn gold_bright() -> Vec3 {
    hex(0xFFD700)
}

/// Deep red accent (#720E1E).
pub fn accent_red() -> Vec3 {
    hex(0x720E1E)
}

/// Background void color (#011005).
pub fn background() -> Vec3 {
    hex(0x011005)
}

/// Foliage particles whose phase scalar is at or above this threshold
/// render in the sparkle color instead of the base color.
pub const SPARKLE_THRESHOLD: f32 = 0.85;

/// Categorical ornament color, drawn from weighted bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrnamentColor {
    /// Muted metallic gold, the dominant band (~45%).
    MetallicGold,
    /// Saturated bright gold (~20%).
    BrightGold,
    /// Deep red accent (~20%).
    AccentRed,
    /// Emerald green (~15%).
    Emerald,
}

impl OrnamentColor {
    /// Map a uniform draw in [0, 1) through the cumulative color bands.
    pub fn pick(draw: f32) -> Self {
        if draw > 0.55 {
            OrnamentColor::MetallicGold
        } else if draw > 0.35 {
            OrnamentColor::BrightGold
        } else if draw > 0.15 {
            OrnamentColor::AccentRed
        } else {
            OrnamentColor::Emerald
        }
    }

    /// RGB value for this color.
    pub fn rgb(&self) -> Vec3 {
        match self {
            OrnamentColor::MetallicGold => gold_metallic(),
            OrnamentColor::BrightGold => gold_bright(),
            OrnamentColor::AccentRed => accent_red(),
            OrnamentColor::Emerald => emerald_light(),
        }
    }
}
