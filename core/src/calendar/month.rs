// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// A month of the Hebrew calendar.
///
/// Months are numbered from Nisan, so the civil year starts at [`HebrewMonth::Tishrei`] (7).
/// In a regular year the single Adar is [`HebrewMonth::AdarI`] (12); [`HebrewMonth::AdarII`]
/// (13) only exists in a leap year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum HebrewMonth {
    /// Nisan.
    Nisan = 1,

    /// Iyyar.
    Iyyar = 2,

    /// Sivan.
    Sivan = 3,

    /// Tamuz.
    Tamuz = 4,

    /// Av.
    Av = 5,

    /// Elul, the last month of the civil year.
    Elul = 6,

    /// Tishrei, the first month of the civil year.
    Tishrei = 7,

    /// Cheshvan.
    Cheshvan = 8,

    /// Kislev.
    Kislev = 9,

    /// Tevet.
    Tevet = 10,

    /// Shvat.
    Shvat = 11,

    /// Adar in a regular year, Adar I in a leap year.
    AdarI = 12,

    /// Adar II, leap years only.
    AdarII = 13,
}

impl HebrewMonth {
    /// The month number, 1 (Nisan) to 13 (Adar II).
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Whether this is one of the Adar months.
    pub const fn is_adar(self) -> bool {
        matches!(self, HebrewMonth::AdarI | HebrewMonth::AdarII)
    }

    /// The transliterated month name. Month 12 is plain "Adar" outside leap years.
    pub const fn name(self, leap_year: bool) -> &'static str {
        match self {
            HebrewMonth::Nisan => "Nisan",
            HebrewMonth::Iyyar => "Iyyar",
            HebrewMonth::Sivan => "Sivan",
            HebrewMonth::Tamuz => "Tamuz",
            HebrewMonth::Av => "Av",
            HebrewMonth::Elul => "Elul",
            HebrewMonth::Tishrei => "Tishrei",
            HebrewMonth::Cheshvan => "Cheshvan",
            HebrewMonth::Kislev => "Kislev",
            HebrewMonth::Tevet => "Tevet",
            HebrewMonth::Shvat => "Sh'vat",
            HebrewMonth::AdarI if leap_year => "Adar I",
            HebrewMonth::AdarI => "Adar",
            HebrewMonth::AdarII => "Adar II",
        }
    }
}

impl TryFrom<u8> for HebrewMonth {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            1 => HebrewMonth::Nisan,
            2 => HebrewMonth::Iyyar,
            3 => HebrewMonth::Sivan,
            4 => HebrewMonth::Tamuz,
            5 => HebrewMonth::Av,
            6 => HebrewMonth::Elul,
            7 => HebrewMonth::Tishrei,
            8 => HebrewMonth::Cheshvan,
            9 => HebrewMonth::Kislev,
            10 => HebrewMonth::Tevet,
            11 => HebrewMonth::Shvat,
            12 => HebrewMonth::AdarI,
            13 => HebrewMonth::AdarII,
            _ => return Err(value),
        })
    }
}

impl From<HebrewMonth> for u8 {
    fn from(value: HebrewMonth) -> Self {
        value.number()
    }
}
