use crate::settings::{ComboDuration, DurationError};

/// Generic numeric input validation
pub fn validate_numeric_input<T>(
    input: &str,
    min: Option<T>,
    max: Option<T>,
    field_name: &str,
) -> Result<T, String>
where
    T: std::str::FromStr + std::fmt::Display + PartialOrd,
{
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(format!("{} cannot be empty", field_name));
    }

    match trimmed.parse::<T>() {
        Ok(val) => {
            if let Some(min_val) = min {
                if val < min_val {
                    return Err(format!("{} must be at least {}", field_name, min_val));
                }
            }
            if let Some(max_val) = max {
                if val > max_val {
                    return Err(format!("{} cannot exceed {}", field_name, max_val));
                }
            }
            Ok(val)
        }
        Err(_) => Err(format!("{} must be a valid number", field_name)),
    }
}

/// Parse the value of the interval `<select>` into a [`ComboDuration`].
pub fn parse_combo_duration(input: &str) -> Result<ComboDuration, DurationError> {
    let seconds = validate_numeric_input::<u32>(input, Some(1), None, "Interval")
        .map_err(DurationError::Invalid)?;
    ComboDuration::try_from(seconds)
}

/// Countdown text shown under the combination.
pub fn countdown_message(remaining: u32) -> String {
    format!("New combo in {} seconds!", remaining)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_input_bounds() {
        assert_eq!(validate_numeric_input::<u32>(" 7 ", Some(1), Some(9), "N"), Ok(7));
        assert_eq!(
            validate_numeric_input::<u32>("0", Some(1), None, "N"),
            Err("N must be at least 1".to_string())
        );
        assert_eq!(
            validate_numeric_input::<u32>("10", None, Some(9), "N"),
            Err("N cannot exceed 9".to_string())
        );
        assert_eq!(
            validate_numeric_input::<u32>("", None, None, "N"),
            Err("N cannot be empty".to_string())
        );
        assert_eq!(
            validate_numeric_input::<u32>("ten", None, None, "N"),
            Err("N must be a valid number".to_string())
        );
    }

    #[test]
    fn parses_select_values() {
        assert_eq!(parse_combo_duration("40").map(|d| d.seconds()), Ok(40));
        assert_eq!(parse_combo_duration("45"), Err(DurationError::NotOffered(45)));
        assert!(matches!(
            parse_combo_duration("forty"),
            Err(DurationError::Invalid(_))
        ));
    }

    #[test]
    fn countdown_text() {
        assert_eq!(countdown_message(0), "New combo in 0 seconds!");
    }
}
