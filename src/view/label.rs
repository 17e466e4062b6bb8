//! Time label formatting

/// Render seconds as `mm:ss`, each field padded to at least two digits
pub fn format_clock(total_seconds: u64) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Countdown label shown under the ring, e.g. `-01 : 05`
pub fn countdown_label(remaining_seconds: u64) -> String {
    format!(
        "-{:02} : {:02}",
        remaining_seconds / 60,
        remaining_seconds % 60
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_minutes_and_seconds() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(7), "00:07");
        assert_eq!(format_clock(65), "01:05");
        assert_eq!(format_clock(600), "10:00");
    }

    #[test]
    fn minutes_are_not_capped() {
        assert_eq!(format_clock(6000), "100:00");
    }

    #[test]
    fn countdown_label_matches_screen_format() {
        assert_eq!(countdown_label(10), "-00 : 10");
        assert_eq!(countdown_label(125), "-02 : 05");
    }
}
