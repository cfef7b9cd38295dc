const MAX_VALUE_LEN: usize = 120;

/// Truncates long metadata values for display, appending an ellipsis.
pub fn truncate_value(value: &str) -> String {
    if value.chars().count() > MAX_VALUE_LEN {
        let mut truncated = value.chars().take(MAX_VALUE_LEN).collect::<String>();
        truncated.push('…');
        truncated
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_values_pass_through() {
        assert_eq!(truncate_value("CT"), "CT");
        assert_eq!(truncate_value(""), "");
    }

    #[test]
    fn long_values_are_cut_with_an_ellipsis() {
        let long = "x".repeat(200);
        let truncated = truncate_value(&long);
        assert_eq!(truncated.chars().count(), MAX_VALUE_LEN + 1);
        assert!(truncated.ends_with('…'));
    }
}
