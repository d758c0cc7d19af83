// Chart series: pure transform from raw samples to the [daily, hourly] pair
// the chart frontend consumes. DB access (bots, samples) stays in stats_repo::mod.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::models::{Point, Sample, Series, StatName};

pub const MS_PER_HOUR: i64 = 3_600_000;
pub const MS_PER_DAY: i64 = 86_400_000;

/// Civil day number of 1970-01-01 (proleptic Gregorian, day 0 = 0000-01-01).
/// Same day numbering as SQL TO_DAYS.
const UNIX_EPOCH_DAY: i64 = 719_528;

/// Milliseconds between day 0 and 1970-01-01T00:00:00Z.
const EPOCH_OFFSET_MS: i64 = UNIX_EPOCH_DAY * MS_PER_DAY;

/// Whole days from 0000-01-01 (proleptic Gregorian) to the given date.
/// Integer arithmetic only; valid on either side of 1970 without special cases.
fn day_number(year: i32, month: u32, day: u32) -> i64 {
    let y = if month <= 2 {
        i64::from(year) - 1
    } else {
        i64::from(year)
    };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = (i64::from(month) + 9) % 12;
    let doy = (153 * mp + 2) / 5 + i64::from(day) - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    // +60 shifts the era origin (0000-03-01) back to 0000-01-01
    era * 146_097 + doe + 60
}

/// Milliseconds since the UNIX epoch for a calendar timestamp, truncated to the
/// whole hour. Sampling is coarser than one hour, so the chart axis only
/// carries hour resolution; minutes and seconds are dropped.
pub fn hour_epoch_ms(ts: NaiveDateTime) -> i64 {
    let days = day_number(ts.year(), ts.month(), ts.day());
    (days * 24 + i64::from(ts.hour())) * MS_PER_HOUR - EPOCH_OFFSET_MS
}

/// One point per sample, in input order, values copied verbatim. This is the
/// hourly series as-is.
pub fn project_hourly(samples: &[Sample], stat: StatName) -> Vec<Point> {
    samples
        .iter()
        .map(|s| Point {
            time_ms: hour_epoch_ms(s.created_at),
            value: s.value_of(stat),
        })
        .collect()
}

/// Collapse hourly points into one point per UTC day: the day-start timestamp
/// and the maximum value observed that day. Day keys keep first-seen order
/// (ascending for time-sorted input); a point exactly on a midnight boundary
/// keys to the day it opens. Each day's reduction starts from 0.
pub fn reduce_daily(hourly: &[Point]) -> Vec<Point> {
    let mut index: HashMap<i64, usize> = HashMap::new();
    let mut out: Vec<Point> = Vec::new();
    for p in hourly {
        let day_start = p.time_ms - p.time_ms.rem_euclid(MS_PER_DAY);
        match index.get(&day_start) {
            Some(&i) => out[i].value = out[i].value.max(p.value),
            None => {
                index.insert(day_start, out.len());
                out.push(Point {
                    time_ms: day_start,
                    value: p.value.max(0),
                });
            }
        }
    }
    out
}

/// Series pair for one bot and stat: daily first, hourly second, both carrying
/// the bot's display name.
pub fn series_for_stat(bot_name: &str, samples: &[Sample], stat: StatName) -> [Series; 2] {
    let hourly = project_hourly(samples, stat);
    let daily = reduce_daily(&hourly);
    [
        Series {
            name: bot_name.to_string(),
            data: daily,
        },
        Series {
            name: bot_name.to_string(),
            data: hourly,
        },
    ]
}
