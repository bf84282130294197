//! Human-readable sizes in config files.

/// Parses `"10M"`, `"512KB"`, `"1.5G"` or a bare byte count. Units are binary (1K = 1024).
#[must_use]
pub fn parse_size(s: &str) -> Option<u64> {
    let upper = s.trim().to_uppercase();
    let s = upper.strip_suffix("IB").unwrap_or(&upper);
    let (num_str, multiplier): (&str, f64) = if let Some(n) = strip_unit(s, 'G') {
        (n, 1024.0 * 1024.0 * 1024.0)
    } else if let Some(n) = strip_unit(s, 'M') {
        (n, 1024.0 * 1024.0)
    } else if let Some(n) = strip_unit(s, 'K') {
        (n, 1024.0)
    } else {
        (s.trim_end_matches('B'), 1.0)
    };

    let n = num_str.trim().parse::<f64>().ok()?;
    if !n.is_finite() || n < 0.0 {
        return None;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let result = (n * multiplier) as u64;
    Some(result)
}

fn strip_unit(s: &str, unit: char) -> Option<&str> {
    s.strip_suffix('B').unwrap_or(s).strip_suffix(unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn units() {
        assert_eq!(parse_size("10M"), Some(10 * 1024 * 1024));
        assert_eq!(parse_size("10MiB"), Some(10 * 1024 * 1024));
        assert_eq!(parse_size("512kb"), Some(512 * 1024));
        assert_eq!(parse_size("1G"), Some(1024 * 1024 * 1024));
        assert_eq!(parse_size("2048"), Some(2048));
        assert_eq!(parse_size("100B"), Some(100));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_size("lots"), None);
        assert_eq!(parse_size("-5M"), None);
        assert_eq!(parse_size(""), None);
    }
}
