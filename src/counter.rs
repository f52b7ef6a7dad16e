//! Character Counter
//!
//! Advisory length readout for the item description.

use crate::config::CounterConfig;
use crate::models::CounterTier;

/// What the counter should show for the current text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterReading {
    pub text: String,
    pub tier: CounterTier,
}

/// Length as the browser counts it (UTF-16 code units)
pub fn text_length(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Evaluate a length against the limits. Text over the limit is not clamped.
pub fn read(length: usize, limits: &CounterConfig) -> CounterReading {
    let remaining = limits.max_chars as i64 - length as i64;
    let tier = if remaining < limits.danger_below as i64 {
        CounterTier::Danger
    } else if remaining < limits.warning_below as i64 {
        CounterTier::Warning
    } else {
        CounterTier::Normal
    };

    CounterReading {
        text: format!("{}/{} characters", length, limits.max_chars),
        tier,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(length: usize) -> CounterReading {
        read(length, &CounterConfig::default())
    }

    #[test]
    fn test_empty() {
        let r = reading(0);
        assert_eq!(r.text, "0/500 characters");
        assert_eq!(r.tier, CounterTier::Normal);
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(reading(400).tier, CounterTier::Normal);
        assert_eq!(reading(401).tier, CounterTier::Warning);
        assert_eq!(reading(450).tier, CounterTier::Warning);
        assert_eq!(reading(451).tier, CounterTier::Danger);
    }

    #[test]
    fn test_full_and_over_limit() {
        let full = reading(500);
        assert_eq!(full.text, "500/500 characters");
        assert_eq!(full.tier, CounterTier::Danger);

        let over = reading(620);
        assert_eq!(over.text, "620/500 characters");
        assert_eq!(over.tier, CounterTier::Danger);
    }

    #[test]
    fn test_length_counts_utf16_units() {
        assert_eq!(text_length("abc"), 3);
        assert_eq!(text_length("é"), 1);
        assert_eq!(text_length("😀"), 2);
    }

    #[test]
    fn test_custom_limits() {
        let limits = CounterConfig { max_chars: 10, warning_below: 5, danger_below: 2 };
        assert_eq!(read(5, &limits).tier, CounterTier::Normal);
        assert_eq!(read(6, &limits).tier, CounterTier::Warning);
        assert_eq!(read(9, &limits).tier, CounterTier::Danger);
        assert_eq!(read(9, &limits).text, "9/10 characters");
    }
}
