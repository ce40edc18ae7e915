//! Transit departure clock.

use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone};

/// The next instant at which the local clock reads `at`.
///
/// Returns today's `at` when it is still ahead of `now`, otherwise
/// tomorrow's. A wall-clock time skipped by a DST jump moves to the next
/// day; an ambiguous one resolves to its earlier instant.
pub fn next_departure<Tz: TimeZone>(now: &DateTime<Tz>, at: NaiveTime) -> DateTime<Tz> {
    let tz = now.timezone();
    let on = |date: NaiveDate| tz.from_local_datetime(&date.and_time(at)).earliest();

    let today = now.date_naive();
    match on(today) {
        Some(departure) if departure > *now => departure,
        _ => today
            .succ_opt()
            .and_then(on)
            .unwrap_or_else(|| now.clone()),
    }
}

/// Epoch seconds of the next local `at`, as sent with transit requests.
pub fn next_departure_epoch(at: NaiveTime) -> i64 {
    next_departure(&Local::now(), at).timestamp()
}
