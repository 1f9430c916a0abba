use std::collections::BTreeSet;

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::error::{NuStorageError, Result};
use crate::fmt::{DATE_FORMAT, DATE_TIME_FORMAT, TIME_FORMAT};
use crate::index::Index;
use crate::messages::{invalid_command_format, MESSAGE_INVALID_INDEX};
use crate::models::{Address, Email, Name, Phone, Tag};

pub const MESSAGE_INVALID_ITEM_NAME: &str = "Item name should not be blank";
pub const MESSAGE_INVALID_QUANTITY: &str = "Quantity should be a non-negative whole number";
pub const MESSAGE_INVALID_AMOUNT: &str =
    "Amount should be a number no larger than 1000000000000 either way, e.g. 12.50 or -3";
/// Largest accepted magnitude, so account totals stay finite.
pub const MAX_AMOUNT: f64 = 1_000_000_000_000.0;
pub const MESSAGE_INVALID_DATE: &str = "Date should be in the format YYYY-MM-DD";
pub const MESSAGE_INVALID_TIME: &str = "Time should be in the format HH:MM";
pub const MESSAGE_INVALID_DATE_TIME: &str = "Date and time should be in the format YYYY-MM-DD HH:MM";

fn parse_error(message: &str) -> NuStorageError {
    NuStorageError::Parse(message.to_string())
}

pub fn format_error(usage: &str) -> NuStorageError {
    NuStorageError::Parse(invalid_command_format(usage))
}

/// Local clock, truncated to the minute so it matches what users can type.
pub fn now_to_minute() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(now)
}

/// A positive 1-based index. Leading/trailing whitespace is ignored.
pub fn parse_index(one_based: &str) -> Result<Index> {
    let trimmed = one_based.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(parse_error(MESSAGE_INVALID_INDEX));
    }
    trimmed
        .parse::<usize>()
        .ok()
        .and_then(Index::from_one_based)
        .ok_or_else(|| parse_error(MESSAGE_INVALID_INDEX))
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn parse_item_name(name: &str) -> Result<String> {
    let collapsed = collapse_whitespace(name);
    if collapsed.is_empty() {
        return Err(parse_error(MESSAGE_INVALID_ITEM_NAME));
    }
    Ok(collapsed)
}

pub fn parse_quantity(quantity: &str) -> Result<u32> {
    let trimmed = quantity.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(parse_error(MESSAGE_INVALID_QUANTITY));
    }
    trimmed
        .parse::<u32>()
        .map_err(|_| parse_error(MESSAGE_INVALID_QUANTITY))
}

pub fn parse_amount(amount: &str) -> Result<f64> {
    amount
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|a| a.is_finite() && a.abs() <= MAX_AMOUNT)
        .ok_or_else(|| parse_error(MESSAGE_INVALID_AMOUNT))
}

pub fn parse_date(date: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), DATE_FORMAT).map_err(|_| parse_error(MESSAGE_INVALID_DATE))
}

pub fn parse_time(time: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(time.trim(), TIME_FORMAT).map_err(|_| parse_error(MESSAGE_INVALID_TIME))
}

pub fn parse_date_time(date_time: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(&collapse_whitespace(date_time), DATE_TIME_FORMAT)
        .map_err(|_| parse_error(MESSAGE_INVALID_DATE_TIME))
}

/// Whitespace-separated keywords; at least one is required.
pub fn parse_keywords(args: &str, usage: &str) -> Result<Vec<String>> {
    let keywords: Vec<String> = args.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(format_error(usage));
    }
    Ok(keywords)
}

pub fn parse_name(name: &str) -> Result<Name> {
    Name::try_from(collapse_whitespace(name)).map_err(NuStorageError::Parse)
}

pub fn parse_phone(phone: &str) -> Result<Phone> {
    Phone::try_from(phone.trim().to_string()).map_err(NuStorageError::Parse)
}

pub fn parse_email(email: &str) -> Result<Email> {
    Email::try_from(email.trim().to_string()).map_err(NuStorageError::Parse)
}

pub fn parse_address(address: &str) -> Result<Address> {
    Address::try_from(address.trim().to_string()).map_err(NuStorageError::Parse)
}

pub fn parse_tags(tags: &[&str]) -> Result<BTreeSet<Tag>> {
    tags.iter()
        .map(|t| Tag::try_from(t.trim().to_string()).map_err(NuStorageError::Parse))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index(" 1 ").unwrap().zero_based(), 0);
        assert_eq!(parse_index("12").unwrap().one_based(), 12);
        for bad in ["", "0", "-1", "+1", "a", "1 2", "1.0"] {
            let err = parse_index(bad).unwrap_err();
            assert_eq!(err.to_string(), MESSAGE_INVALID_INDEX, "input {bad:?}");
        }
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("0").unwrap(), 0);
        assert_eq!(parse_quantity(" 10 ").unwrap(), 10);
        for bad in ["", "-1", "ten", "1.5", "99999999999"] {
            assert!(parse_quantity(bad).is_err(), "input {bad:?}");
        }
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.50").unwrap(), 12.5);
        assert_eq!(parse_amount("-3").unwrap(), -3.0);
        assert_eq!(parse_amount("0").unwrap(), 0.0);
        assert_eq!(parse_amount("-1000000000000").unwrap(), -MAX_AMOUNT);
        for bad in ["", "abc", "NaN", "inf", "1,000", "1e308", "-1000000000000.01"] {
            assert!(parse_amount(bad).is_err(), "input {bad:?}");
        }
    }

    #[test]
    fn test_parse_name_collapses_spaces() {
        assert_eq!(parse_name("  Amy   Bee ").unwrap(), parse_name("Amy Bee").unwrap());
        assert!(parse_name("   ").is_err());
    }

    #[test]
    fn test_parse_item_name_collapses_spaces() {
        assert_eq!(parse_item_name("  Blue   Pen ").unwrap(), "Blue Pen");
        assert_eq!(parse_item_name("   ").unwrap_err().to_string(), MESSAGE_INVALID_ITEM_NAME);
    }

    #[test]
    fn test_parse_dates_and_times() {
        assert_eq!(parse_date("2024-02-29").unwrap(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert!(parse_date("2023-02-29").is_err());
        assert_eq!(parse_time("09:05").unwrap(), NaiveTime::from_hms_opt(9, 5, 0).unwrap());
        assert!(parse_time("25:00").is_err());
        let dt = parse_date_time("2024-03-01   14:00").unwrap();
        assert_eq!(dt.to_string(), "2024-03-01 14:00:00");
        assert!(parse_date_time("2024-03-01").is_err());
    }

    #[test]
    fn test_now_to_minute_has_no_seconds() {
        let now = now_to_minute();
        assert_eq!(now.second(), 0);
        assert_eq!(now.nanosecond(), 0);
    }

    #[test]
    fn test_parse_keywords_requires_one() {
        assert_eq!(parse_keywords("  pen   ink ", "usage").unwrap(), vec!["pen", "ink"]);
        assert!(parse_keywords("   ", "usage").is_err());
    }

    #[test]
    fn test_parse_tags() {
        let tags = parse_tags(&["friends", " colleagues "]).unwrap();
        assert_eq!(tags.len(), 2);
        assert!(parse_tags(&["not ok"]).is_err());
    }
}
