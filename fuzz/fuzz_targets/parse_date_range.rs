#![no_main]

use chrono::{Datelike, NaiveDate};
use libfuzzer_sys::arbitrary::{self, Arbitrary};

#[macro_use]
extern crate libfuzzer_sys;

const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

const SEPARATORS: &[&str] = &["-", "–", " - ", "\n–\n"];

#[derive(Debug)]
struct Separator(&'static str);

impl<'a> Arbitrary<'a> for Separator {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(Separator(u.choose(SEPARATORS)?))
    }
}

#[derive(Debug)]
struct Input {
    start: NaiveDate,
    end: NaiveDate,
    separator: Separator,
}

fn date(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<NaiveDate> {
    let year = u.int_in_range(0..=9999)?;
    let month = u.int_in_range(1..=12)?;
    let day = u.int_in_range(1..=31)?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or(arbitrary::Error::IncorrectFormat)
}

impl<'a> Arbitrary<'a> for Input {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(Input {
            start: date(u)?,
            end: date(u)?,
            separator: u.arbitrary()?,
        })
    }
}

fn format(date: NaiveDate) -> String {
    format!(
        "{} {} {:04}",
        date.day(),
        MONTHS[date.month0() as usize],
        date.year()
    )
}

fuzz_target!(|input: Input| {
    let text = format!(
        "{}{}{}",
        format(input.start),
        input.separator.0,
        format(input.end)
    );

    match parse_daterange::parse_date_range(&text) {
        Ok(interval) => {
            assert_eq!(interval.start_date(), input.start, "{text}");
            assert_eq!(interval.end_date(), input.end, "{text}");
        }
        Err(_) => assert!(input.start > input.end, "{text}"),
    }
});
