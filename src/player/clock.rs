use std::time::Duration;

/// Format a `Duration` as `MM:SS`, truncating partial seconds.
pub fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// The `elapsed / total` text shown next to the progress bar.
pub fn time_text(elapsed: Duration, total: Option<Duration>) -> String {
    format!(
        "{} / {}",
        format_mmss(elapsed),
        format_mmss(total.unwrap_or_default())
    )
}

/// Played fraction in 0.0..=1.0; 0.0 while the length is unknown.
pub fn progress_fraction(elapsed: Duration, total: Option<Duration>) -> f64 {
    match total {
        Some(total) if !total.is_zero() => {
            (elapsed.as_secs_f64() / total.as_secs_f64()).clamp(0.0, 1.0)
        }
        _ => 0.0,
    }
}
