//! Dashboard timeframe selector.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SalesPulseError;

/// Reporting window, measured backward from the evaluation instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    #[default]
    Week,
    Month,
    Quarter,
}

impl Timeframe {
    /// Window length in whole days.
    pub fn window_days(self) -> i64 {
        match self {
            Timeframe::Week => 7,
            Timeframe::Month => 30,
            Timeframe::Quarter => 90,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Timeframe::Week => "week",
            Timeframe::Month => "month",
            Timeframe::Quarter => "quarter",
        }
    }
}

impl FromStr for Timeframe {
    type Err = SalesPulseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "week" => Ok(Timeframe::Week),
            "month" => Ok(Timeframe::Month),
            "quarter" => Ok(Timeframe::Quarter),
            other => Err(SalesPulseError::BadRequest(format!(
                "unknown timeframe: {other}"
            ))),
        }
    }
}
