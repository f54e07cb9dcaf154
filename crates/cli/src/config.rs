//! Run-time choices, settable by flag or environment.
//!
//! | variable                 | flag              | default |
//! |--------------------------|-------------------|---------|
//! | `INVOICER_NUMBERING`     | `--numbering`     | `clock` |
//! | `INVOICER_COUNTER_START` | `--counter-start` | `1`     |
//! | `INVOICER_LOG_FORMAT`    |                   | `json`  |
//! | `RUST_LOG`               |                   | `info`  |

use clap::ValueEnum;

use invoicer_invoicing::{ClockDigits, MonotonicCounter, NumberSource};

/// Invoice sequence numbering scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Numbering {
    /// Two digits from the current second. Not unique.
    Clock,
    /// Increasing counter starting at `--counter-start`.
    Counter,
}

impl Numbering {
    pub fn source(self, counter_start: u32) -> Box<dyn NumberSource> {
        match self {
            Numbering::Clock => Box::new(ClockDigits),
            Numbering::Counter => {
                tracing::debug!(counter_start, "using in-process invoice counter");
                Box::new(MonotonicCounter::new(counter_start))
            }
        }
    }
}

/// How the assembled invoice is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty JSON, for a template renderer.
    Json,
    /// Aligned plain-text listing.
    Text,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn counter_source_starts_at_configured_value() {
        let at = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let source = Numbering::Counter.source(120);
        assert_eq!(source.next_sequence(&at), 120);
        assert_eq!(source.next_sequence(&at), 121);
    }

    #[test]
    fn clock_source_ignores_counter_start() {
        let at = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(0, 0, 34)
            .unwrap();
        assert_eq!(Numbering::Clock.source(999).next_sequence(&at), 44);
    }
}
