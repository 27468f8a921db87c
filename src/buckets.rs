use crate::models::DailyCounts;

/// Truncate a timestamp to its date component. Lexical, not calendar-aware:
/// whatever precedes the `T` separator is the bucket key, so entries land in
/// the day their timestamp spells out, regardless of timezone.
pub fn day_key(timestamp: &str) -> &str {
    match timestamp.split_once('T') {
        Some((date, _)) => date,
        None => timestamp,
    }
}

/// Count log entries per calendar day. Duplicates are valid and simply
/// increment the day's count.
pub fn bucket_by_day<S: AsRef<str>>(timestamps: &[S]) -> DailyCounts {
    let mut counts = DailyCounts::default();
    for timestamp in timestamps {
        let key = day_key(timestamp.as_ref()).to_string();
        *counts.days.entry(key).or_insert(0) += 1;
    }
    counts
}
