// Chart-boundary types. A point is a bare [timeMs, value] pair on the wire,
// matching what the chart frontend feeds straight into its series config.

use serde::{Deserialize, Serialize};

/// One plotted coordinate: milliseconds since the UNIX epoch and the metric
/// reading at that time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[i64; 2]", into = "[i64; 2]")]
pub struct Point {
    pub time_ms: i64,
    pub value: i64,
}

impl From<Point> for [i64; 2] {
    fn from(p: Point) -> Self {
        [p.time_ms, p.value]
    }
}

impl From<[i64; 2]> for Point {
    fn from([time_ms, value]: [i64; 2]) -> Self {
        Self { time_ms, value }
    }
}

/// A named, time-ordered sequence of points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub data: Vec<Point>,
}
