use chrono::Duration;

/// "1 second", "95 seconds"; negative durations count as zero.
#[must_use]
pub fn format_elapsed(value: Duration) -> String {
    let secs = value.num_seconds().max(0);
    if secs == 1 {
        "1 second".to_owned()
    } else {
        format!("{secs} seconds")
    }
}
