use crate::error::SubmitError;

/// Parse a 24-hour "HH:MM" wall-clock string into minutes from midnight.
///
/// The string must contain exactly one `:` with a numeric hour (0-23) and
/// minute (0-59) on either side. Anything else is a format error; garbage
/// never flows through into arithmetic.
pub fn encode(time: &str) -> Result<i32, SubmitError> {
    let (hours_part, minutes_part) = time
        .split_once(':')
        .ok_or_else(|| SubmitError::Format(format!("invalid time string '{}'", time)))?;

    if minutes_part.contains(':') {
        return Err(SubmitError::Format(format!(
            "invalid time string '{}'",
            time
        )));
    }

    let hours: i32 = hours_part
        .parse()
        .map_err(|_| SubmitError::Format(format!("invalid hour in '{}'", time)))?;
    let minutes: i32 = minutes_part
        .parse()
        .map_err(|_| SubmitError::Format(format!("invalid minute in '{}'", time)))?;

    if !(0..24).contains(&hours) || !(0..60).contains(&minutes) {
        return Err(SubmitError::Format(format!(
            "time '{}' is out of range",
            time
        )));
    }

    Ok(hours * 60 + minutes)
}

/// Format minutes from midnight as a 12-hour "h:MM AM/PM" display label.
///
/// Purely a label transform, no timezone handling. Only defined for inputs
/// in `[0, 1439]`; out-of-range values are not wrapped and produce an
/// unspecified label.
pub fn decode(minutes: i32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;
    let period = if hours < 12 { "AM" } else { "PM" };
    let display_hours = match hours {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    };
    format!("{}:{:02} {}", display_hours, mins, period)
}
