//! Shared display/input helpers for the CLI.

/// Format elapsed seconds as `M:SS`.
pub fn format_mmss(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Parse a time given either as plain seconds (`"585"`) or as `M:SS`
/// (`"9:45"`). Seconds in the `M:SS` form must be below 60.
pub fn parse_time(input: &str) -> Result<u64, String> {
    match input.split_once(':') {
        None => input
            .parse::<u64>()
            .map_err(|_| format!("invalid time '{input}': expected seconds or M:SS")),
        Some((min, sec)) => {
            let minutes: u64 = min
                .parse()
                .map_err(|_| format!("invalid minutes in '{input}'"))?;
            let seconds: u64 = sec
                .parse()
                .map_err(|_| format!("invalid seconds in '{input}'"))?;
            if seconds >= 60 {
                return Err(format!("seconds must be below 60 in '{input}'"));
            }
            Ok(minutes * 60 + seconds)
        }
    }
}
