// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

use parse_daterange::{parse_date_range, DateInterval};

const FORMAT: &str = "%Y-%m-%d %H:%M:%S%.9f";

pub fn format_for_assert(interval: &DateInterval) -> (String, String) {
    (
        interval.start().format(FORMAT).to_string(),
        interval.end().format(FORMAT).to_string(),
    )
}

/// `start` and `end` are `YYYY-MM-DD`; the expected times of day are implied.
pub fn check_interval(input: &str, start: &str, end: &str) {
    let parsed = match parse_date_range(input) {
        Ok(v) => v,
        Err(e) => panic!("Failed to parse date range from value '{input}': {e}"),
    };

    assert_eq!(
        format_for_assert(&parsed),
        (
            format!("{start} 00:00:00.000000000"),
            format!("{end} 23:59:59.999999999")
        ),
        "Input value: {input}"
    );
}
