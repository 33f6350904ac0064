//! Elapsed-time formatting for the workout display.

#[cfg(test)]
#[path = "duration_test.rs"]
mod duration_test;

const MS_PER_SECOND: u64 = 1_000;
const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;

/// Render milliseconds as zero-padded `HH:MM:SS`.
///
/// Sub-second remainders are truncated. Hours are not wrapped at 24 and
/// widen past two digits when needed.
pub fn format_hms(elapsed_ms: u64) -> String {
    let hours = elapsed_ms / MS_PER_HOUR;
    let minutes = (elapsed_ms % MS_PER_HOUR) / MS_PER_MINUTE;
    let seconds = (elapsed_ms % MS_PER_MINUTE) / MS_PER_SECOND;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}
