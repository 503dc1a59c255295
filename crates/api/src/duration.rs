use rdns_router_domain::RouterError;
use std::time::Duration;

/// Parses durations like `300s`, `5m`, `1h`, `5m30s` — a sum of
/// `<digits><unit>` runs with `unit` one of `s`, `m`, `h` (§6, §11).
pub fn parse_disable_duration(raw: &str) -> Result<Duration, RouterError> {
    if raw.is_empty() {
        return Err(RouterError::MalformedDuration(raw.to_string()));
    }

    let mut total_secs: u64 = 0;
    let mut digits = String::new();
    let mut consumed_unit = false;

    for c in raw.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
            continue;
        }

        if digits.is_empty() {
            return Err(RouterError::MalformedDuration(raw.to_string()));
        }
        let value: u64 = digits
            .parse()
            .map_err(|_| RouterError::MalformedDuration(raw.to_string()))?;
        let multiplier = match c {
            's' => 1,
            'm' => 60,
            'h' => 3600,
            _ => return Err(RouterError::MalformedDuration(raw.to_string())),
        };
        total_secs += value * multiplier;
        digits.clear();
        consumed_unit = true;
    }

    if !digits.is_empty() || !consumed_unit {
        return Err(RouterError::MalformedDuration(raw.to_string()));
    }

    Ok(Duration::from_secs(total_secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_seconds() {
        assert_eq!(parse_disable_duration("300s").unwrap(), Duration::from_secs(300));
    }

    #[test]
    fn parses_minutes_and_hours() {
        assert_eq!(parse_disable_duration("5m").unwrap(), Duration::from_secs(300));
        assert_eq!(parse_disable_duration("1h").unwrap(), Duration::from_secs(3600));
    }

    #[test]
    fn parses_compound_durations() {
        assert_eq!(
            parse_disable_duration("5m30s").unwrap(),
            Duration::from_secs(330)
        );
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(parse_disable_duration("").is_err());
        assert!(parse_disable_duration("abc").is_err());
        assert!(parse_disable_duration("5").is_err());
        assert!(parse_disable_duration("5x").is_err());
    }
}
