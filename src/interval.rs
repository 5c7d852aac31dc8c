// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

use std::fmt::{self, Display};
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

use crate::ParseDateRangeError;

/// An inclusive range of calendar days.
///
/// `start` is midnight of the first day and `end` is the last nanosecond of
/// the final day, both in UTC. `start` never comes after `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateInterval {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl DateInterval {
    pub(crate) fn new(
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Self, ParseDateRangeError> {
        if start > end {
            return Err(ParseDateRangeError::EndBeforeStart {
                start: start.date_naive(),
                end: end.date_naive(),
            });
        }
        Ok(Self { start, end })
    }

    /// Midnight at the beginning of the first day.
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// `23:59:59.999999999` on the last day.
    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start.date_naive()
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end.date_naive()
    }

    /// Number of calendar days covered, counting both ends.
    pub fn num_days(&self) -> i64 {
        (self.end_date() - self.start_date()).num_days() + 1
    }
}

impl Display for DateInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}",
            self.start.to_rfc3339_opts(SecondsFormat::Nanos, true),
            self.end.to_rfc3339_opts(SecondsFormat::Nanos, true)
        )
    }
}

impl FromStr for DateInterval {
    type Err = ParseDateRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse_date_range(s)
    }
}
