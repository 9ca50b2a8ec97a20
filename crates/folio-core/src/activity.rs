use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Days looked back from "today"; the emitted histogram spans this many
/// days plus today itself.
pub const ACTIVITY_WINDOW_DAYS: u64 = 365;

/// Highest intensity level for heat-map rendering
pub const MAX_INTENSITY: u8 = 4;

/// One calendar day of commit activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityDay {
    pub date: NaiveDate,
    pub count: u32,
}

/// Bucket timestamped events into a dense daily histogram
///
/// Every day from `today - 365` through `today` inclusive is present, zero
/// by default, in ascending date order. Timestamps are truncated to their
/// UTC calendar date; the same convention fixes the zero-fill range, so a
/// timestamp can never land one day off its bucket. Events outside the
/// range are dropped silently. An empty input still yields the full
/// zero-filled sequence.
pub fn daily_activity(timestamps: &[DateTime<Utc>], today: NaiveDate) -> Vec<ActivityDay> {
    let start = today - Days::new(ACTIVITY_WINDOW_DAYS);

    let mut buckets: BTreeMap<NaiveDate, u32> = start
        .iter_days()
        .take_while(|day| *day <= today)
        .map(|day| (day, 0))
        .collect();

    for timestamp in timestamps {
        if let Some(count) = buckets.get_mut(&timestamp.date_naive()) {
            *count += 1;
        }
    }

    buckets
        .into_iter()
        .map(|(date, count)| ActivityDay { date, count })
        .collect()
}

/// Normalized heat-map intensity for one day
///
/// Returns 0 iff `count` is zero, otherwise `ceil(count / max_count * 4)`
/// clamped to [`MAX_INTENSITY`]. `max_count` is the peak daily count of the
/// emitted histogram; an all-zero histogram has `max_count == 0` and every
/// intensity is 0.
pub fn intensity(count: u32, max_count: u32) -> u8 {
    if count == 0 || max_count == 0 {
        return 0;
    }

    let level = u64::from(count)
        .saturating_mul(u64::from(MAX_INTENSITY))
        .div_ceil(u64::from(max_count));

    level.min(u64::from(MAX_INTENSITY)) as u8
}
