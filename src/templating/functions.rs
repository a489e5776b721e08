use minijinja::Environment;

pub fn register_filters(env: &mut Environment) {
    env.add_filter("swissnum", swissnum);
}

/// Format a number the Swiss way: apostrophe thousands separators, at
/// most one decimal place (`1'500`, `46.8`).
pub fn swissnum(value: f64) -> String {
    let formatted = if (value - value.round()).abs() < 1e-9 {
        format!("{}", value.round() as i64)
    } else {
        format!("{value:.1}")
    };

    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('\'');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swissnum_groups_thousands() {
        assert_eq!(swissnum(0.0), "0");
        assert_eq!(swissnum(500.0), "500");
        assert_eq!(swissnum(1500.0), "1'500");
        assert_eq!(swissnum(1234567.0), "1'234'567");
    }

    #[test]
    fn test_swissnum_keeps_one_decimal() {
        assert_eq!(swissnum(46.8), "46.8");
        assert_eq!(swissnum(0.25), "0.2");
    }

    #[test]
    fn test_swissnum_negative() {
        assert_eq!(swissnum(-1500.0), "-1'500");
    }
}
