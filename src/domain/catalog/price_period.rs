//! Billing cadence of a product price.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// How often a product price bills.
///
/// Only `Yearly` has its own termination rule; every other cadence
/// terminates on the monthly billing day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PricePeriod {
    Monthly,
    Yearly,
}

impl PricePeriod {
    /// All supported cadences.
    pub const ALL: [PricePeriod; 2] = [PricePeriod::Monthly, PricePeriod::Yearly];

    /// Storage and wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            PricePeriod::Monthly => "monthly",
            PricePeriod::Yearly => "yearly",
        }
    }
}

impl fmt::Display for PricePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PricePeriod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "monthly" => Ok(PricePeriod::Monthly),
            "yearly" => Ok(PricePeriod::Yearly),
            other => Err(ValidationError::invalid_format(
                "pricePeriod",
                format!("unknown period '{}'", other),
            )),
        }
    }
}
