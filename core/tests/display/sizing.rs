// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use luach_core::{DisplayModeConfig, scale_factor_for, sizing_profile};

#[test]
fn scale_factor_breakpoints() {
    assert!((scale_factor_for(1) - 2.5).abs() < f64::EPSILON);
    assert!((scale_factor_for(4) - 1.8).abs() < f64::EPSILON);
    assert!((scale_factor_for(6) - 1.6).abs() < f64::EPSILON);
    assert!((scale_factor_for(18) - 1.0).abs() < f64::EPSILON);
    assert!((scale_factor_for(30) - 0.8).abs() < f64::EPSILON);
}

#[test]
fn default_grid_uses_twelve_cells() {
    let display = DisplayModeConfig::default();
    assert_eq!(display.total_cells(), 12);

    let profile = sizing_profile(display.total_cells());
    assert!((profile.scale_factor - 1.3).abs() < f64::EPSILON);
    assert_eq!(profile.candle_sizes.simple, 52);
    assert_eq!(profile.candle_sizes.card, 46);
    assert_eq!(profile.candle_sizes.photo, 39);
}
