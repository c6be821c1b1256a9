// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::Path};

use jiff::{Zoned, civil::Date};
use luach_core::{CalendricalOracle, Config, MemorialRecord, load_records};

/// Everything a command needs: the normalized configuration and the moment it started.
#[derive(Debug, Clone)]
pub struct Board {
    config: Config,
    now: Zoned,
}

impl Board {
    /// Creates a board pinned to the current local time.
    pub fn new(config: Config) -> Self {
        Self::at(config, Zoned::now())
    }

    /// Creates a board pinned to `now`.
    pub fn at(config: Config, now: Zoned) -> Self {
        Self { config, now }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The calendar oracle for `date`, or for today when no date is given.
    pub fn oracle(&self, date: Option<Date>) -> CalendricalOracle {
        CalendricalOracle::at(date.unwrap_or_else(|| self.now.date()))
    }

    /// The given hour, or the current local hour.
    pub fn hour(&self, hour: Option<u8>) -> u8 {
        hour.unwrap_or_else(|| u8::try_from(self.now.hour()).unwrap_or_default())
    }

    /// Loads the memorial records, treating a missing store as empty.
    pub async fn records(&self) -> Result<Vec<MemorialRecord>, Box<dyn Error>> {
        let path = self.records_path()?;
        if !path.exists() {
            tracing::warn!(path = %path.display(), "memorial store not found, showing no records");
            return Ok(Vec::new());
        }

        Ok(load_records(path).await?)
    }

    pub fn records_path(&self) -> Result<&Path, Box<dyn Error>> {
        self.config
            .records_path
            .as_deref()
            .ok_or_else(|| "No memorial store path configured".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;
    use luach_core::HebrewDateOracle;

    fn board() -> Board {
        let now = date(2025, 9, 14)
            .at(21, 30, 0, 0)
            .in_tz("UTC")
            .unwrap();
        Board::at(Config::default(), now)
    }

    #[test]
    fn test_oracle_defaults_to_now() {
        let board = board();
        assert_eq!(board.oracle(None).today(), date(2025, 9, 14));
        assert_eq!(
            board.oracle(Some(date(2024, 3, 24))).current_hebrew_date().to_string(),
            "14 Adar II 5784"
        );
    }

    #[test]
    fn test_hour_defaults_to_now() {
        let board = board();
        assert_eq!(board.hour(None), 21);
        assert_eq!(board.hour(Some(7)), 7);
    }

    #[tokio::test]
    async fn test_missing_store_is_empty() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = Config {
            records_path: Some(dir.path().join("memorials.json")),
            ..Default::default()
        };
        let board = Board::at(config, board().now);
        assert!(board.records().await.unwrap().is_empty());
    }

    #[test]
    fn test_unconfigured_store_is_an_error() {
        assert!(board().records_path().is_err());
    }
}
