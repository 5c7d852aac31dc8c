use std::process::ExitCode;

use chrono::SecondsFormat;
use parse_daterange::parse_date_range;

fn main() -> ExitCode {
    env_logger::init();

    let text: String = std::env::args().nth(1).unwrap_or("".to_string());
    match parse_date_range(&text) {
        Ok(interval) => {
            println!(
                "{} {}",
                interval.start().to_rfc3339_opts(SecondsFormat::Nanos, true),
                interval.end().to_rfc3339_opts(SecondsFormat::Nanos, true)
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
