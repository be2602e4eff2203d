use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};

/// Language used for weekday labels on rosters
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    Polish,
    English,
}

impl Locale {
    pub fn weekday_abbreviation(&self, date: NaiveDate) -> &'static str {
        match (self, date.weekday()) {
            (Self::Polish, Weekday::Mon) => "pn",
            (Self::Polish, Weekday::Tue) => "wt",
            (Self::Polish, Weekday::Wed) => "śr",
            (Self::Polish, Weekday::Thu) => "cz",
            (Self::Polish, Weekday::Fri) => "pt",
            (Self::Polish, Weekday::Sat) => "sb",
            (Self::Polish, Weekday::Sun) => "nd",
            (Self::English, Weekday::Mon) => "Mon",
            (Self::English, Weekday::Tue) => "Tue",
            (Self::English, Weekday::Wed) => "Wed",
            (Self::English, Weekday::Thu) => "Thu",
            (Self::English, Weekday::Fri) => "Fri",
            (Self::English, Weekday::Sat) => "Sat",
            (Self::English, Weekday::Sun) => "Sun",
        }
    }

    /// Value for the `lang` attribute of exported documents
    pub fn language_tag(&self) -> &'static str {
        match self {
            Self::Polish => "pl",
            Self::English => "en",
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pl" => Ok(Self::Polish),
            "en" => Ok(Self::English),
            other => Err(format!("unsupported locale {:?}, expected \"pl\" or \"en\"", other)),
        }
    }
}
