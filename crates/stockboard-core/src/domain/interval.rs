use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Time bucket intervals supported by the chart pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interval {
    #[serde(rename = "5m")]
    FiveMinutes,
    #[serde(rename = "30m")]
    ThirtyMinutes,
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "1wk")]
    OneWeek,
}

impl Interval {
    pub const ALL: [Self; 4] = [
        Self::FiveMinutes,
        Self::ThirtyMinutes,
        Self::OneDay,
        Self::OneWeek,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FiveMinutes => "5m",
            Self::ThirtyMinutes => "30m",
            Self::OneDay => "1d",
            Self::OneWeek => "1wk",
        }
    }

    /// The single-stock endpoint only serves daily or weekly history;
    /// anything finer than daily is widened to weekly.
    pub const fn coerce_daily_or_weekly(self) -> Self {
        match self {
            Self::OneDay => Self::OneDay,
            _ => Self::OneWeek,
        }
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interval {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "5m" => Ok(Self::FiveMinutes),
            "30m" => Ok(Self::ThirtyMinutes),
            "1d" => Ok(Self::OneDay),
            "1wk" => Ok(Self::OneWeek),
            other => Err(ValidationError::InvalidInterval {
                value: other.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_interval() {
        let interval = Interval::from_str("1wk").expect("must parse");
        assert_eq!(interval, Interval::OneWeek);
    }

    #[test]
    fn rejects_unknown_interval() {
        let err = Interval::from_str("15m").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidInterval { .. }));
    }

    #[test]
    fn coerces_intraday_to_weekly() {
        assert_eq!(
            Interval::FiveMinutes.coerce_daily_or_weekly(),
            Interval::OneWeek
        );
        assert_eq!(Interval::OneDay.coerce_daily_or_weekly(), Interval::OneDay);
    }
}
