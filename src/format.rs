pub const DURATION_LABEL: &str = "accumulated";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedDuration {
    pub major: String,
    pub label: String,
}

pub fn format_duration(total_minutes: u64) -> FormattedDuration {
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    FormattedDuration {
        major: format!("{hours:02}h {minutes:02}m"),
        label: DURATION_LABEL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_hours_and_minutes_zero_padded() {
        let formatted = format_duration(125);
        assert_eq!(formatted.major, "02h 05m");
        assert_eq!(formatted.label, "accumulated");
    }

    #[test]
    fn formats_zero_total() {
        assert_eq!(format_duration(0).major, "00h 00m");
    }

    #[test]
    fn hours_grow_past_two_digits() {
        assert_eq!(format_duration(6000).major, "100h 00m");
        assert_eq!(format_duration(59).major, "00h 59m");
        assert_eq!(format_duration(60).major, "01h 00m");
    }
}
