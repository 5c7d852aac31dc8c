// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

use chrono::{Datelike, NaiveDate, Timelike};
use parse_daterange::parse_date_range;
use proptest::prelude::*;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

fn date() -> impl Strategy<Value = NaiveDate> {
    (0i32..=9999, 1u32..=12, 1u32..=31)
        .prop_filter_map("no such day", |(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))
}

fn ordered_dates() -> impl Strategy<Value = (NaiveDate, NaiveDate)> {
    (date(), date()).prop_map(|(a, b)| if a <= b { (a, b) } else { (b, a) })
}

/// A run of whitespace, possibly empty, possibly with line breaks.
fn gap() -> impl Strategy<Value = String> {
    "[ \t\n]{0,3}"
}

fn month_token(month: u32, style: u8) -> String {
    let name = MONTHS[month as usize - 1];
    match style % 4 {
        0 => name.to_owned(),
        1 => name[..3].to_owned(),
        2 => name.to_uppercase(),
        _ => name[..3].to_lowercase(),
    }
}

fn full_both(a: NaiveDate, b: NaiveDate, sep: &str) -> String {
    format!(
        "{} {} {:04} {sep} {} {} {:04}",
        a.day(),
        MONTHS[a.month0() as usize],
        a.year(),
        b.day(),
        MONTHS[b.month0() as usize],
        b.year()
    )
}

proptest! {
    #[test]
    fn full_both_round_trip((a, b) in ordered_dates(), style in any::<u8>()) {
        let input = format!(
            "{} {} {:04} - {} {} {:04}",
            a.day(),
            month_token(a.month(), style),
            a.year(),
            b.day(),
            month_token(b.month(), style),
            b.year()
        );
        let interval = parse_date_range(&input).unwrap();
        prop_assert_eq!(interval.start_date(), a);
        prop_assert_eq!(interval.end_date(), b);
        prop_assert_eq!(interval.start().num_seconds_from_midnight(), 0);
        prop_assert_eq!(interval.start().nanosecond(), 0);
        prop_assert_eq!(interval.end().num_seconds_from_midnight(), 86_399);
        prop_assert_eq!(interval.end().nanosecond(), 999_999_999);
    }

    #[test]
    fn separator_equivalence((a, b) in ordered_dates()) {
        prop_assert_eq!(
            parse_date_range(full_both(a, b, "-")),
            parse_date_range(full_both(a, b, "–"))
        );
    }

    #[test]
    fn whitespace_invariance(
        (a, b) in ordered_dates(),
        gaps in proptest::collection::vec(gap(), 8),
    ) {
        let g = |i: usize| gaps[i].as_str();

        let full = format!(
            "{}{}{}{}{:04}{}-{}{}{}{}{}{:04}",
            g(0), a.day(), g(1), MONTHS[a.month0() as usize], a.year(), g(2),
            g(3), b.day(), g(4), MONTHS[b.month0() as usize], g(5), b.year()
        );
        prop_assert_eq!(parse_date_range(&full), parse_date_range(full_both(a, b, "-")));

        // Only the end carries a year, so use a single year for both ends.
        let b = b.with_year(a.year()).unwrap_or(a).max(a);
        let shared_year = format!(
            "{}{}{}{}{}-{}{}{}{}{}{:04}{}",
            g(0), a.day(), g(1), MONTHS[a.month0() as usize], g(2),
            g(3), b.day(), g(4), MONTHS[b.month0() as usize], g(5), b.year(), g(6)
        );
        let interval = parse_date_range(&shared_year).unwrap();
        prop_assert_eq!(interval.start_date(), a);
        prop_assert_eq!(interval.end_date(), b);

        // Both ends in the month of `a`.
        let end = a.with_day(b.day()).filter(|end| *end >= a).unwrap_or(a);
        let shared_month_year = format!(
            "{}{}{}-{}{}{}{}{}{:04}{}",
            g(0), a.day(), g(1), g(2), end.day(), g(3),
            MONTHS[a.month0() as usize], g(4), a.year(), g(7)
        );
        let interval = parse_date_range(&shared_month_year).unwrap();
        prop_assert_eq!(interval.start_date(), a);
        prop_assert_eq!(interval.end_date(), end);
    }

    #[test]
    fn shared_month_year(date in date(), len in 0u32..31) {
        let last = date.day() + len;
        let input = format!(
            "{} - {} {} {:04}",
            date.day(),
            last,
            MONTHS[date.month0() as usize],
            date.year()
        );
        match date.with_day(last) {
            Some(end) => {
                let interval = parse_date_range(&input).unwrap();
                prop_assert_eq!(interval.start_date(), date);
                prop_assert_eq!(interval.end_date(), end);
            }
            None => prop_assert!(parse_date_range(&input).is_err()),
        }
    }

    #[test]
    fn idempotent(s in "\\PC{0,40}") {
        prop_assert_eq!(parse_date_range(&s), parse_date_range(&s));
    }
}
