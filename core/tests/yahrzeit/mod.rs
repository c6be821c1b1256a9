// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Monthly yahrzeit filtering, including the Adar I / Adar II rules.

mod adar;
mod monthly;
