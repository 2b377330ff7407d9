use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::Duration;

use crate::{Interval, ValidationError};

/// Dashboard time-range selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "1w")]
    OneWeek,
    #[serde(rename = "1m")]
    OneMonth,
    #[serde(rename = "3m")]
    ThreeMonths,
    #[serde(rename = "1y")]
    OneYear,
}

/// Interval and trailing window a range resolves to when fetching history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchPlan {
    pub interval: Interval,
    pub window: Duration,
}

impl TimeRange {
    pub const ALL: [Self; 5] = [
        Self::OneDay,
        Self::OneWeek,
        Self::OneMonth,
        Self::ThreeMonths,
        Self::OneYear,
    ];

    pub const DEFAULT: Self = Self::OneMonth;

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneDay => "1d",
            Self::OneWeek => "1w",
            Self::OneMonth => "1m",
            Self::ThreeMonths => "3m",
            Self::OneYear => "1y",
        }
    }

    /// Fixed range-to-(interval, window) lookup table.
    pub const fn fetch_plan(self) -> FetchPlan {
        match self {
            Self::OneDay => FetchPlan {
                interval: Interval::FiveMinutes,
                window: Duration::hours(24),
            },
            Self::OneWeek => FetchPlan {
                interval: Interval::ThirtyMinutes,
                window: Duration::days(7),
            },
            Self::OneMonth => FetchPlan {
                interval: Interval::OneDay,
                window: Duration::days(30),
            },
            Self::ThreeMonths => FetchPlan {
                interval: Interval::OneDay,
                window: Duration::days(90),
            },
            Self::OneYear => FetchPlan {
                interval: Interval::OneWeek,
                window: Duration::days(365),
            },
        }
    }

    /// Unrecognized range strings fall back to the one-month plan.
    pub fn parse_or_default(value: &str) -> Self {
        Self::from_str(value).unwrap_or(Self::DEFAULT)
    }
}

impl Display for TimeRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeRange {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "1d" => Ok(Self::OneDay),
            "1w" => Ok(Self::OneWeek),
            "1m" => Ok(Self::OneMonth),
            "3m" => Ok(Self::ThreeMonths),
            "1y" => Ok(Self::OneYear),
            other => Err(ValidationError::InvalidTimeRange {
                value: other.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_table_is_exact() {
        let cases = [
            ("1d", Interval::FiveMinutes, Duration::hours(24)),
            ("1w", Interval::ThirtyMinutes, Duration::days(7)),
            ("1m", Interval::OneDay, Duration::days(30)),
            ("3m", Interval::OneDay, Duration::days(90)),
            ("1y", Interval::OneWeek, Duration::days(365)),
        ];

        for (text, interval, window) in cases {
            let plan = TimeRange::parse_or_default(text).fetch_plan();
            assert_eq!(plan.interval, interval, "interval for {text}");
            assert_eq!(plan.window, window, "window for {text}");
        }
    }

    #[test]
    fn unknown_range_defaults_to_one_month() {
        let plan = TimeRange::parse_or_default("fortnight").fetch_plan();
        assert_eq!(plan.interval, Interval::OneDay);
        assert_eq!(plan.window, Duration::days(30));
    }
}
