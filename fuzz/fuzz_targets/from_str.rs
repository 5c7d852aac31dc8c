#![no_main]

use libfuzzer_sys::fuzz_target;
use parse_daterange::DateInterval;

fuzz_target!(|data: &[u8]| {
    let s = std::str::from_utf8(data).unwrap_or("");
    if let Ok(interval) = s.parse::<DateInterval>() {
        assert!(interval.start() <= interval.end());
    }
});
