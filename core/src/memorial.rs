// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::Date;

use crate::calendar::parse_calendar_date_string;

/// How a memorial record is laid out on the display.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayTemplate {
    /// Name and dates only.
    #[default]
    Simple,

    /// Framed card with a tribute line.
    Card,

    /// Card with a photo.
    Photo,
}

/// A person remembered on the display.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemorialRecord {
    /// Unique identifier, assigned when loading the store if missing.
    #[serde(default)]
    pub id: String,

    /// Display name.
    pub name: String,

    /// Used by the UI to pick gendered wording.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_male: Option<bool>,

    /// Gregorian date of death, `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_death: Option<String>,

    /// Free-form Hebrew date for display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hebrew_date_of_death: Option<String>,

    /// Layout template.
    #[serde(default)]
    pub display_template: DisplayTemplate,

    /// Photo for the [`DisplayTemplate::Photo`] template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,

    /// Short tribute line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tribute: Option<String>,
}

impl MemorialRecord {
    /// Creates a simple record with only an id and a name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_male: None,
            date_of_death: None,
            hebrew_date_of_death: None,
            display_template: DisplayTemplate::Simple,
            photo_url: None,
            tribute: None,
        }
    }

    /// Sets the Gregorian date of death.
    #[must_use]
    pub fn with_date_of_death(mut self, date: impl Into<String>) -> Self {
        self.date_of_death = Some(date.into());
        self
    }

    /// The date of death, if present and a valid calendar date.
    pub fn death_date(&self) -> Option<Date> {
        let raw = self.date_of_death.as_deref()?;
        parse_calendar_date_string(raw).to_date()
    }
}
