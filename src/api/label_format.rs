use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Clock style used for the rise/set labels under the anchors.
///
/// Instants are rendered as UTC wall time; hosts that need local time pass
/// instants already shifted into the zone they display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeLabelFormat {
    /// `HH:mm`
    #[default]
    Hour24,
    /// `h:mm AM`
    Hour12,
}

impl TimeLabelFormat {
    #[must_use]
    pub fn pattern(self) -> &'static str {
        match self {
            Self::Hour24 => "%H:%M",
            Self::Hour12 => "%-I:%M %p",
        }
    }

    /// Formats an epoch-millisecond instant; `None` when out of chrono's range.
    #[must_use]
    pub fn format_instant(self, instant_ms: i64) -> Option<String> {
        let time: DateTime<Utc> = DateTime::from_timestamp_millis(instant_ms)?;
        Some(time.format(self.pattern()).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::TimeLabelFormat;

    #[test]
    fn formats_both_clock_styles() {
        // 2020-06-12T22:00:00Z
        let instant = 1_591_999_200_000;
        assert_eq!(
            TimeLabelFormat::Hour24.format_instant(instant).as_deref(),
            Some("22:00")
        );
        assert_eq!(
            TimeLabelFormat::Hour12.format_instant(instant).as_deref(),
            Some("10:00 PM")
        );
    }

    #[test]
    fn out_of_range_instant_has_no_label() {
        assert_eq!(TimeLabelFormat::Hour24.format_instant(i64::MAX), None);
    }
}
