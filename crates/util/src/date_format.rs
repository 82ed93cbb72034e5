//! Compact date/time formatting: `yyyy-MM-dd HH:mm:ss ±HHmm` and the
//! variations selected by [`DateTimeOptions`] flags.

use chrono::{DateTime, Local, Offset, TimeZone, Utc};

/// Formatting flags. Later flags win when two conflict (`NoSeconds` clears
/// milliseconds, `WithMillis` restores seconds).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateTimeOptions {
    /// Date portion only.
    DateOnly,
    /// Drop seconds (and milliseconds).
    NoSeconds,
    /// Drop the zone suffix.
    NoZone,
    /// Time portion only.
    TimeOnly,
    /// Format in UTC instead of local time.
    Utc,
    /// Separate date and time with `T` instead of a space.
    UseT,
    /// Use a `Z` zone suffix; implies UTC.
    UseZ,
    /// Include milliseconds.
    WithMillis,
}

#[derive(Default)]
struct Flags {
    date_only: bool,
    no_seconds: bool,
    no_zone: bool,
    time_only: bool,
    utc: bool,
    use_t: bool,
    use_z: bool,
    with_millis: bool,
}

impl Flags {
    fn gather(options: &[DateTimeOptions]) -> Flags {
        let mut flags = Flags::default();
        for option in options {
            match option {
                DateTimeOptions::DateOnly => flags.date_only = true,
                DateTimeOptions::NoSeconds => {
                    flags.no_seconds = true;
                    flags.with_millis = false;
                }
                DateTimeOptions::NoZone => flags.no_zone = true,
                DateTimeOptions::TimeOnly => flags.time_only = true,
                DateTimeOptions::Utc => flags.utc = true,
                DateTimeOptions::UseT => flags.use_t = true,
                DateTimeOptions::UseZ => {
                    flags.use_z = true;
                    flags.utc = true;
                }
                DateTimeOptions::WithMillis => {
                    flags.with_millis = true;
                    flags.no_seconds = false;
                }
            }
        }
        flags
    }
}

/// Format an epoch-millisecond instant.
///
/// # Examples
///
/// ```
/// use kitbag_util::date_format::{format_date_time, DateTimeOptions};
///
/// assert_eq!(
///     format_date_time(1_559_956_716_890, &[DateTimeOptions::WithMillis, DateTimeOptions::UseZ]),
///     "2019-06-08 01:18:36.890Z"
/// );
/// assert_eq!(
///     format_date_time(1_559_956_716_000, &[DateTimeOptions::UseT, DateTimeOptions::UseZ]),
///     "2019-06-08T01:18:36Z"
/// );
/// ```
pub fn format_date_time(millis: i64, options: &[DateTimeOptions]) -> String {
    let flags = Flags::gather(options);

    if flags.utc {
        let instant = DateTime::from_timestamp_millis(millis).unwrap_or(DateTime::UNIX_EPOCH);
        render(&flags, &instant, 0)
    } else {
        match Local.timestamp_millis_opt(millis).single() {
            Some(instant) => {
                let offset_minutes = instant.offset().fix().local_minus_utc() / 60;
                render(&flags, &instant, offset_minutes)
            }
            None => {
                let instant =
                    DateTime::from_timestamp_millis(millis).unwrap_or(DateTime::UNIX_EPOCH);
                render(&flags, &instant, 0)
            }
        }
    }
}

/// Format the current moment.
pub fn format_date_time_now(options: &[DateTimeOptions]) -> String {
    format_date_time(Utc::now().timestamp_millis(), options)
}

fn render<Tz: TimeZone>(flags: &Flags, instant: &DateTime<Tz>, offset_minutes: i32) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let date_str = instant.format("%Y-%m-%d").to_string();
    if flags.date_only {
        return date_str;
    }

    let mut time_str = instant.format("%H:%M").to_string();
    if !flags.no_seconds {
        time_str.push_str(&instant.format(":%S").to_string());
    }
    if flags.with_millis {
        time_str.push_str(&instant.format("%.3f").to_string());
    }
    if !flags.no_zone {
        if flags.use_z {
            time_str.push('Z');
        } else {
            let sign = if offset_minutes < 0 { '-' } else { '+' };
            let magnitude = offset_minutes.abs();
            time_str.push(' ');
            time_str.push(sign);
            time_str.push_str(&format!("{:02}{:02}", magnitude / 60, magnitude % 60));
        }
    }

    if flags.time_only {
        time_str
    } else {
        let separator = if flags.use_t { 'T' } else { ' ' };
        format!("{date_str}{separator}{time_str}")
    }
}
