// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - A deterministic calendar oracle
//! - Memorial record factories

mod fake_oracle;
mod fixtures;

#[allow(unused_imports)]
pub use fake_oracle::FakeOracle;
#[allow(unused_imports)]
pub use fixtures::{ids, record, records_numbered};
