// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! Turn the captured fields of a rule into calendar dates.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use log::debug;
use regex::Captures;

use crate::interval::DateInterval;
use crate::lexicon::MonthLexicon;
use crate::rules::{Endpoint, FieldLayout};
use crate::{Field, ParseDateRangeError};

/// Build the interval described by the captures of the rule with `layout`.
pub(crate) fn resolve(
    layout: FieldLayout,
    captures: &Captures<'_>,
    lexicon: &MonthLexicon,
) -> Result<DateInterval, ParseDateRangeError> {
    let (start, end) = layout.endpoints();
    let start = start_of_day(calendar_date(captures, start, lexicon)?);
    let end = end_of_day(calendar_date(captures, end, lexicon)?)?;
    DateInterval::new(start, end)
}

fn calendar_date(
    captures: &Captures<'_>,
    endpoint: Endpoint,
    lexicon: &MonthLexicon,
) -> Result<NaiveDate, ParseDateRangeError> {
    let group = |index: usize| captures.get(index).map_or("", |m| m.as_str());

    let year_str = group(endpoint.year);
    let month_str = group(endpoint.month);
    let day_str = group(endpoint.day);

    let year = number(Field::Year, year_str)?;
    let month = lexicon
        .resolve_month(month_str)
        .ok_or_else(|| invalid(Field::Month, month_str))?;
    let day = number(Field::Day, day_str)?;

    date_from_ymd(year, month, day)
}

/// Reject days that do not exist instead of rolling them over into the next
/// month.
fn date_from_ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate, ParseDateRangeError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| invalid(Field::Date, &format!("{year:04}-{month:02}-{day:02}")))
}

fn number<T: std::str::FromStr>(field: Field, s: &str) -> Result<T, ParseDateRangeError> {
    s.parse().map_err(|_| invalid(field, s))
}

fn invalid(field: Field, value: &str) -> ParseDateRangeError {
    debug!("invalid {field} {value:?}");
    ParseDateRangeError::InvalidField {
        field,
        value: value.to_owned(),
    }
}

pub(crate) fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

pub(crate) fn end_of_day(date: NaiveDate) -> Result<DateTime<Utc>, ParseDateRangeError> {
    date.and_hms_nano_opt(23, 59, 59, 999_999_999)
        .map(|dt| dt.and_utc())
        .ok_or_else(|| invalid(Field::Date, &date.to_string()))
}
