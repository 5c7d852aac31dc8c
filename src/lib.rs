// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.
//! A Rust crate for parsing human-written date ranges, such as the ones found
//! in catalog records or document headers, into a pair of `DateTime`s.
//!
//! The following shapes are supported:
//!
//! * both ends spelled out, e.g. "1 January 1900 - 31 December 2000"
//! * a year shared by both ends, e.g. "1 Jan - 31 Dec 2000"
//! * a month and year shared by both ends, e.g. "1-31 December 2000"
//!
//! Months may be abbreviated and written in any case, the halves may be
//! separated by a hyphen or an en dash, and whitespace between tokens is
//! optional.
//!
use std::error::Error;
use std::fmt::{self, Display};
use std::sync::LazyLock;

use chrono::NaiveDate;

mod interval;
mod lexicon;
mod resolve;
mod rules;

pub use interval::DateInterval;
pub use lexicon::MonthLexicon;

use rules::RuleTable;

static PARSER: LazyLock<Parser> = LazyLock::new(Parser::new);

/// The component of a date that could not be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Day,
    Month,
    Year,
    /// Day, month and year are valid on their own but do not form a real
    /// calendar day, e.g. 31 April.
    Date,
}

impl Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Day => "day",
            Field::Month => "month",
            Field::Year => "year",
            Field::Date => "date",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseDateRangeError {
    NoMatch,
    InvalidField { field: Field, value: String },
    EndBeforeStart { start: NaiveDate, end: NaiveDate },
}

impl Display for ParseDateRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseDateRangeError::NoMatch => {
                write!(f, "Invalid input string: cannot be parsed as a date range")
            }
            ParseDateRangeError::InvalidField { field, value } => {
                write!(f, "Invalid {field} in date range: {value:?}")
            }
            ParseDateRangeError::EndBeforeStart { start, end } => {
                write!(f, "Date range ends on {end}, before it starts on {start}")
            }
        }
    }
}

impl Error for ParseDateRangeError {}

/// Matches text against the known date range shapes.
///
/// The rule table and month lexicon are built once per process and shared by
/// every `Parser`, so creating one is cheap and a single parser can be used
/// from many threads at once.
#[derive(Debug, Clone, Copy)]
pub struct Parser {
    rules: &'static RuleTable,
    lexicon: &'static MonthLexicon,
}

impl Parser {
    pub fn new() -> Self {
        Self {
            rules: RuleTable::global(),
            lexicon: MonthLexicon::global(),
        }
    }

    /// Parses a date range out of `text`.
    ///
    /// The range may appear anywhere in `text`. When several shapes could
    /// match, the one carrying the most fields wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use parse_daterange::Parser;
    ///
    /// let interval = Parser::new().parse("1 Jan - 31 Dec 2000").unwrap();
    /// assert_eq!(interval.start(), Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap());
    /// assert_eq!(interval.end_date().to_string(), "2000-12-31");
    /// ```
    ///
    /// # Errors
    ///
    /// * `ParseDateRangeError::NoMatch` if `text` contains no known date range
    /// * `ParseDateRangeError::InvalidField` if a matched day, month or year
    ///   cannot be resolved, or the date does not exist
    /// * `ParseDateRangeError::EndBeforeStart` if the range runs backwards
    pub fn parse(&self, text: &str) -> Result<DateInterval, ParseDateRangeError> {
        let (layout, captures) = self
            .rules
            .find(text)
            .ok_or(ParseDateRangeError::NoMatch)?;
        resolve::resolve(layout, &captures, self.lexicon)
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates a new [`Parser`].
pub fn create_parser() -> Parser {
    Parser::new()
}

/// Parses a date range string and returns the `DateInterval` it describes.
///
/// # Arguments
///
/// * `input` - A string slice containing a date range.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, Timelike};
/// let interval = parse_daterange::parse_date_range("9 December 2020 – 28 February 2021").unwrap();
/// assert_eq!(interval.start_date(), NaiveDate::from_ymd_opt(2020, 12, 9).unwrap());
/// assert_eq!(interval.end_date(), NaiveDate::from_ymd_opt(2021, 2, 28).unwrap());
/// assert_eq!(interval.end().nanosecond(), 999_999_999);
/// ```
///
/// # Errors
///
/// See [`Parser::parse`].
pub fn parse_date_range<S: AsRef<str>>(input: S) -> Result<DateInterval, ParseDateRangeError> {
    PARSER.parse(input.as_ref())
}
