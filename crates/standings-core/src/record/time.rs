//! `H:MM:SS.mmm` elapsed time parsing and formatting

const MS_PER_HOUR: u64 = 3_600_000;
const MS_PER_MINUTE: u64 = 60_000;
const MS_PER_SECOND: u64 = 1_000;

/// Parse an `H:MM:SS.mmm` time into total milliseconds.
///
/// The fractional part is read as milliseconds: only its first three digits
/// are used and shorter fractions are right-padded (`.4` is 400 ms).
/// Returns `None` unless the colon split yields exactly three numeric parts,
/// or when the total does not fit in a `u64`.
pub fn parse_elapsed(text: &str) -> Option<u64> {
    let parts: Vec<&str> = text.trim().split(':').collect();
    if parts.len() != 3 {
        return None;
    }

    let hours = parse_digits(parts[0])?;
    let minutes = parse_digits(parts[1])?;
    let (seconds, fraction) = parts[2].split_once('.').unwrap_or((parts[2], ""));
    let seconds = parse_digits(seconds)?;
    let millis = parse_millis(fraction)?;

    hours
        .checked_mul(MS_PER_HOUR)?
        .checked_add(minutes.checked_mul(MS_PER_MINUTE)?)?
        .checked_add(seconds.checked_mul(MS_PER_SECOND)?)?
        .checked_add(millis)
}

/// Format milliseconds as `H:MM:SS.mmm`
pub fn format_elapsed(elapsed_ms: u64) -> String {
    let hours = elapsed_ms / MS_PER_HOUR;
    let minutes = (elapsed_ms % MS_PER_HOUR) / MS_PER_MINUTE;
    let seconds = (elapsed_ms % MS_PER_MINUTE) / MS_PER_SECOND;
    let millis = elapsed_ms % MS_PER_SECOND;
    format!("{}:{:02}:{:02}.{:03}", hours, minutes, seconds, millis)
}

fn parse_digits(text: &str) -> Option<u64> {
    let text = text.trim();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

fn parse_millis(fraction: &str) -> Option<u64> {
    let fraction = fraction.trim();
    if fraction.is_empty() {
        return Some(0);
    }
    if !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let digits: String = fraction.chars().take(3).collect();
    format!("{:0<3}", digits).parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_elapsed() {
        assert_eq!(parse_elapsed("0:15:23.456"), Some(923_456));
        assert_eq!(parse_elapsed("1:00:00.000"), Some(3_600_000));
        assert_eq!(parse_elapsed(" 0:00:01.001 "), Some(1_001));
    }

    #[test]
    fn test_parse_elapsed_truncates_millis() {
        assert_eq!(parse_elapsed("0:15:23.4567"), Some(923_456));
    }

    #[test]
    fn test_parse_elapsed_pads_millis() {
        assert_eq!(parse_elapsed("0:15:23.4"), Some(923_400));
        assert_eq!(parse_elapsed("0:15:23.45"), Some(923_450));
    }

    #[test]
    fn test_parse_elapsed_without_fraction() {
        assert_eq!(parse_elapsed("0:15:23"), Some(923_000));
        assert_eq!(parse_elapsed("0:15:23."), Some(923_000));
    }

    #[test]
    fn test_parse_elapsed_rejects_wrong_part_count() {
        assert_eq!(parse_elapsed("15:23.456"), None);
        assert_eq!(parse_elapsed("0:0:15:23.456"), None);
        assert_eq!(parse_elapsed("923456"), None);
    }

    #[test]
    fn test_parse_elapsed_rejects_non_numeric() {
        assert_eq!(parse_elapsed("0:aa:23.456"), None);
        assert_eq!(parse_elapsed("0:15:23.4x6"), None);
        assert_eq!(parse_elapsed("-1:15:23.456"), None);
        assert_eq!(parse_elapsed("0::23.456"), None);
    }

    #[test]
    fn test_parse_elapsed_rejects_overflow() {
        assert_eq!(parse_elapsed("99999999999999:00:00.000"), None);
        assert_eq!(parse_elapsed("0:307445734561826:00.000"), None);
        // Each part fits, the sum does not
        assert_eq!(parse_elapsed("5124095576030:00:1552.000"), None);
        assert_eq!(parse_elapsed("5124095576030:00:00.000"), Some(18_446_744_073_708_000_000));
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(923_456), "0:15:23.456");
        assert_eq!(format_elapsed(0), "0:00:00.000");
        assert_eq!(format_elapsed(3_723_004), "1:02:03.004");
    }

    #[test]
    fn test_format_then_parse_canonical() {
        for ms in [0, 1, 59_999, 923_456, 36_000_000] {
            assert_eq!(parse_elapsed(&format_elapsed(ms)), Some(ms));
        }
    }
}
