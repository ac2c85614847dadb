use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::AppError;

/// Spanish weekday names, Monday first, with the unaccented spellings clients often send
const WEEKDAYS: [(&str, &str, Weekday); 7] = [
    ("lunes", "lunes", Weekday::Mon),
    ("martes", "martes", Weekday::Tue),
    ("miércoles", "miercoles", Weekday::Wed),
    ("jueves", "jueves", Weekday::Thu),
    ("viernes", "viernes", Weekday::Fri),
    ("sábado", "sabado", Weekday::Sat),
    ("domingo", "domingo", Weekday::Sun),
];

const MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Date format of `movies.release_date`
pub const RELEASE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Lowercases and trims a user-supplied name for comparison
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// A weekday requested by name, together with the normalised name echoed back to the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekdayQuery {
    pub name: String,
    pub weekday: Weekday,
}

impl WeekdayQuery {
    pub fn parse(input: &str) -> Result<Self, AppError> {
        let name = normalize(input);
        WEEKDAYS
            .iter()
            .find(|(accented, plain, _)| name == *accented || name == *plain)
            .map(|(_, _, weekday)| Self {
                name: name.clone(),
                weekday: *weekday,
            })
            .ok_or_else(|| AppError::InvalidInput("Día no válido".to_string()))
    }

    /// ISO day number, Monday = 1 through Sunday = 7
    pub fn iso_number(&self) -> i32 {
        self.weekday.number_from_monday() as i32
    }
}

/// A month requested by name, mapped to 1-12
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthQuery {
    pub name: String,
    pub number: u32,
}

impl MonthQuery {
    pub fn parse(input: &str) -> Result<Self, AppError> {
        let name = normalize(input);
        MONTHS
            .iter()
            .position(|month| *month == name)
            .map(|idx| Self {
                name: name.clone(),
                number: idx as u32 + 1,
            })
            .ok_or_else(|| AppError::InvalidInput("Mes no válido".to_string()))
    }
}

/// Parses a stored release date; `None` when the column holds something else
///
/// Only zero-padded `YYYY-MM-DD` naming a real day from year 1 on is accepted.
/// `release_date_or_null` in the migrations applies the same rule in SQL.
pub fn parse_release_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if !has_iso_date_shape(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, RELEASE_DATE_FORMAT)
        .ok()
        .filter(|date| date.year() >= 1)
}

fn has_iso_date_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Release year of a stored date
pub fn release_year(value: &str) -> Option<i32> {
    parse_release_date(value).map(|date| date.year())
}

/// Capitalizes the first character and lowercases the rest
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}
