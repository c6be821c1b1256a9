// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Scale applied to the base sizes for a grid of `total_cells` cells.
///
/// The denser the grid, the smaller each cell's content. Band upper bounds are inclusive.
pub fn scale_factor_for(total_cells: u32) -> f64 {
    match total_cells {
        0..=1 => 2.5,
        2 => 2.0,
        3..=4 => 1.8,
        5..=6 => 1.6,
        7..=8 => 1.5,
        9..=10 => 1.4,
        11..=12 => 1.3,
        13..=14 => 1.2,
        15..=16 => 1.1,
        17..=18 => 1.0,
        19..=20 => 0.9,
        _ => 0.8,
    }
}

/// Font sizes in points, unrounded.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct FontSizes {
    /// Name in the simple template.
    pub name: f64,

    /// Name in the card and photo templates.
    pub name_card: f64,

    /// Hebrew date line.
    pub hebrew_date: f64,

    /// Tribute line.
    pub tribute: f64,

    /// Board title.
    pub title: f64,
}

impl FontSizes {
    const BASE: Self = Self {
        name: 18.0,
        name_card: 16.0,
        hebrew_date: 14.0,
        tribute: 12.0,
        title: 24.0,
    };

    fn scaled(scale: f64) -> Self {
        let base = Self::BASE;
        Self {
            name: base.name * scale,
            name_card: base.name_card * scale,
            hebrew_date: base.hebrew_date * scale,
            tribute: base.tribute * scale,
            title: base.title * scale,
        }
    }
}

/// Memorial candle icon sizes in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct CandleSizes {
    /// Candle in the simple template.
    pub simple: u32,

    /// Candle in the card template.
    pub card: u32,

    /// Candle in the photo template.
    pub photo: u32,
}

impl CandleSizes {
    const BASE: Self = Self {
        simple: 40,
        card: 35,
        photo: 30,
    };

    fn scaled(scale: f64) -> Self {
        let base = Self::BASE;
        Self {
            simple: scale_pixels(base.simple, scale),
            card: scale_pixels(base.card, scale),
            photo: scale_pixels(base.photo, scale),
        }
    }
}

/// Every size the memorial board needs for one grid density.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct SizingProfile {
    /// The factor all sizes were scaled by.
    pub scale_factor: f64,

    /// Text sizes.
    pub font_sizes: FontSizes,

    /// Candle icon sizes.
    pub candle_sizes: CandleSizes,
}

/// The sizing profile for a grid of `total_cells` cells.
pub fn sizing_profile(total_cells: u32) -> SizingProfile {
    let scale_factor = scale_factor_for(total_cells);
    SizingProfile {
        scale_factor,
        font_sizes: FontSizes::scaled(scale_factor),
        candle_sizes: CandleSizes::scaled(scale_factor),
    }
}

/// Rounds half up, as pixel sizes are always positive.
#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scale_pixels(base: u32, scale: f64) -> u32 {
    (f64::from(base) * scale).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn matches_band_breakpoints() {
        for (cells, expected) in [
            (0, 2.5),
            (1, 2.5),
            (2, 2.0),
            (3, 1.8),
            (4, 1.8),
            (5, 1.6),
            (6, 1.6),
            (8, 1.5),
            (10, 1.4),
            (12, 1.3),
            (14, 1.2),
            (16, 1.1),
            (17, 1.0),
            (18, 1.0),
            (20, 0.9),
            (21, 0.8),
            (30, 0.8),
        ] {
            assert_close(scale_factor_for(cells), expected);
        }
    }

    #[test]
    fn never_grows_with_more_cells() {
        let factors: Vec<_> = (0..64).map(scale_factor_for).collect();
        assert!(factors.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn scales_fonts_without_rounding() {
        let profile = sizing_profile(4);
        assert_close(profile.scale_factor, 1.8);
        assert_close(profile.font_sizes.name, 32.4);
        assert_close(profile.font_sizes.name_card, 28.8);
    }

    #[test]
    fn rounds_candles_half_up() {
        let profile = sizing_profile(1);
        assert_eq!(
            profile.candle_sizes,
            CandleSizes {
                simple: 100,
                card: 88,
                photo: 75,
            }
        );

        let profile = sizing_profile(18);
        assert_eq!(profile.candle_sizes, CandleSizes::BASE);
    }
}
