//! Per-suggestion monotonic decision clock.
//!
//! Wall-clock time can repeat or step backwards between two appends. Each
//! stored decision therefore gets `decided_at = max(now, previous + 1µs)` and
//! `sequence = previous + 1`, computed while the write lock is held, so the
//! history of one suggestion is strictly increasing in both.

use chrono::{DateTime, SecondsFormat, Utc};

use cpl_core::errors::CplResult;

use crate::to_repo_err;

/// Timestamp and sequence assigned to the next decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stamp {
    pub decided_at: DateTime<Utc>,
    pub sequence: u64,
}

/// Next stamp after `previous` (if any) given the current time.
/// Stored timestamps have microsecond precision, so `now` is truncated first.
pub fn next_stamp(previous: Option<Stamp>, now: DateTime<Utc>) -> CplResult<Stamp> {
    let now_micros = now.timestamp_micros();
    let (micros, sequence) = match previous {
        Some(prev) => (
            now_micros.max(prev.decided_at.timestamp_micros() + 1),
            prev.sequence + 1,
        ),
        None => (now_micros, 1),
    };
    let decided_at = DateTime::<Utc>::from_timestamp_micros(micros)
        .ok_or_else(|| to_repo_err(format!("timestamp out of range: {micros}µs")))?;
    Ok(Stamp {
        decided_at,
        sequence,
    })
}

/// Fixed-width RFC 3339 text, so lexical order equals time order.
pub fn format_ts(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn parse_ts(raw: &str) -> CplResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| to_repo_err(format!("bad timestamp '{raw}': {e}")))
}
