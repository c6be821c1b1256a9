// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Which memorial records are shown.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Every record, regardless of date.
    All,

    /// Only records whose yahrzeit falls in the current Hebrew month.
    #[default]
    Monthly,
}

/// Display mode and grid dimensions of the memorial board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DisplayModeConfig {
    /// Filtering mode.
    #[serde(default)]
    pub mode: DisplayMode,

    /// Rows per page.
    #[serde(default = "default_grid_rows")]
    pub grid_rows: u32,

    /// Columns per page.
    #[serde(default = "default_grid_columns")]
    pub grid_columns: u32,
}

const fn default_grid_rows() -> u32 {
    4
}

const fn default_grid_columns() -> u32 {
    3
}

impl DisplayModeConfig {
    /// Total number of grid cells on one page.
    pub const fn total_cells(&self) -> u32 {
        self.grid_rows.saturating_mul(self.grid_columns)
    }
}

impl Default for DisplayModeConfig {
    fn default() -> Self {
        Self {
            mode: DisplayMode::default(),
            grid_rows: default_grid_rows(),
            grid_columns: default_grid_columns(),
        }
    }
}

/// Liturgical custom, which decides when Slichot starts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Nusach {
    /// Slichot from the Saturday night before Rosh Hashanah.
    #[default]
    Ashkenaz,

    /// Slichot from the second of Elul.
    #[cfg_attr(feature = "clap", clap(alias = "sefard"))]
    #[serde(alias = "sefard", alias = "sephardi")]
    Sephardic,
}
