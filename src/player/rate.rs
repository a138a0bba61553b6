//! Conversions from UI controls to audio output settings.

use std::time::Duration;

/// Speed selections offered to the user, in percent.
pub const SPEED_CHOICES: [u16; 8] = [25, 50, 75, 100, 125, 150, 175, 200];

pub fn is_valid_speed(percent: u16) -> bool {
    SPEED_CHOICES.contains(&percent)
}

/// Playback rate for a speed selection; no selection means normal speed.
pub fn playback_rate(selection: Option<u16>) -> f32 {
    selection.map_or(1.0, |percent| f32::from(percent) / 100.0)
}

/// Step `current` by `steps` along `SPEED_CHOICES`, clamping at both ends.
///
/// From no selection the walk starts at 100%.
pub fn cycle_speed(current: Option<u16>, steps: i8) -> Option<u16> {
    let last = SPEED_CHOICES.len() as i64 - 1;
    let pos = current
        .and_then(|p| SPEED_CHOICES.iter().position(|&c| c == p))
        .or_else(|| SPEED_CHOICES.iter().position(|&c| c == 100))
        .unwrap_or(0) as i64;
    let next = match current {
        Some(_) => (pos + i64::from(steps)).clamp(0, last),
        None => pos,
    };
    Some(SPEED_CHOICES[next as usize])
}

/// Label shown for a speed selection.
pub fn speed_label(selection: Option<u16>) -> String {
    match selection {
        Some(percent) => format!("{percent}%"),
        None => "SPEED".to_string(),
    }
}

/// Output volume for a slider position; the slider ranges over 0..=100.
pub fn output_volume(slider: u8) -> f32 {
    f32::from(slider.min(100)) / 100.0
}

/// Slider position after moving `slider` by `delta`, kept within 0..=100.
pub fn nudge_volume(slider: u8, delta: i16) -> u8 {
    (i16::from(slider) + delta).clamp(0, 100) as u8
}

/// Position targeted by a click at column `x` of a bar `width` columns wide.
///
/// `x` past the end of the bar counts as the end; a zero-width bar has no target.
pub fn seek_target(x: u16, width: u16, total: Duration) -> Option<Duration> {
    if width == 0 {
        return None;
    }
    let fraction = f64::from(x.min(width)) / f64::from(width);
    Some(Duration::from_secs_f64(fraction * total.as_secs_f64()))
}
