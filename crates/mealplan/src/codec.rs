use std::fmt;
use std::str::FromStr;

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Month, Time, Weekday};

use crate::MealPlanError;

/// Rotation weeks are stored as years counted from this one.
const EPOCH_YEAR: i32 = 2000;

/// Largest week whose key still fits a four digit year.
pub const MAX_WEEK: u32 = 7999;

pub const DAYS_PER_WEEK: u8 = 7;

const KEY_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

const KEY_LEN: usize = 10;

const TIME_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[hour]:[minute]:[second]");

const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Position inside one cycle of the rotation. `day` is 0 for Monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coordinate {
    pub week: u32,
    pub day: u8,
}

impl Coordinate {
    pub fn new(week: u32, day: u8) -> Result<Self, MealPlanError> {
        if week < 1 || week > MAX_WEEK || day >= DAYS_PER_WEEK {
            return Err(MealPlanError::InvalidCoordinate { week, day });
        }

        Ok(Self { week, day })
    }

    pub fn weekday(&self) -> Weekday {
        Weekday::Monday.nth_next(self.day)
    }

    pub fn day_name(&self) -> &'static str {
        day_name(self.day)
    }

    pub fn encode(&self) -> Result<DateKey, MealPlanError> {
        encode(self.week, self.day)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "week {} {}", self.week, self.day_name())
    }
}

/// Encoded rotation coordinate as persisted on a meal plan entry.
///
/// The key looks like an ISO date (`2003-01-03` is week 3, Wednesday) so that
/// it sorts in rotation order, but it is never a real calendar date.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(String);

impl DateKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn coordinate(&self) -> Result<Coordinate, MealPlanError> {
        decode(&self.0)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for DateKey {
    type Err = MealPlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)?.encode()
    }
}

pub fn encode(week: u32, day: u8) -> Result<DateKey, MealPlanError> {
    let invalid = || MealPlanError::InvalidCoordinate { week, day };
    let coordinate = Coordinate::new(week, day)?;

    let year = EPOCH_YEAR + i32::try_from(coordinate.week).map_err(|_| invalid())?;
    let date = Date::from_calendar_date(year, Month::January, coordinate.day + 1)
        .map_err(|_| invalid())?;

    date.format(KEY_FORMAT)
        .map(DateKey)
        .map_err(|_| invalid())
}

pub fn decode(key: &str) -> Result<Coordinate, MealPlanError> {
    let malformed = || MealPlanError::Decode(key.to_owned());

    let date_part = strip_midnight(key).ok_or_else(malformed)?;
    if date_part.len() != KEY_LEN || !date_part.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(malformed());
    }

    let date = Date::parse(date_part, KEY_FORMAT).map_err(|_| malformed())?;
    if date.month() != Month::January || date.day() > DAYS_PER_WEEK {
        return Err(malformed());
    }

    let week = u32::try_from(date.year() - EPOCH_YEAR).map_err(|_| malformed())?;
    Coordinate::new(week, date.day() - 1).map_err(|_| malformed())
}

/// Datetime columns come back as the midnight timestamp of the key
/// (`2001-01-01T00:00:00`, optionally with zero fractional seconds and a UTC
/// offset). Returns the date part, or `None` for any other time of day.
fn strip_midnight(key: &str) -> Option<&str> {
    let Some((date, time)) = key.split_once('T') else {
        return Some(key);
    };

    let time = time
        .strip_suffix('Z')
        .or_else(|| time.strip_suffix("+00:00"))
        .unwrap_or(time);

    let time = match time.split_once('.') {
        Some((whole, fraction)) if !fraction.is_empty() && fraction.bytes().all(|b| b == b'0') => {
            whole
        }
        Some(_) => return None,
        None => time,
    };

    let time = Time::parse(time, TIME_FORMAT).ok()?;
    (time == Time::MIDNIGHT).then_some(date)
}

pub fn day_name(day: u8) -> &'static str {
    DAY_NAMES.get(usize::from(day)).copied().unwrap_or("")
}
