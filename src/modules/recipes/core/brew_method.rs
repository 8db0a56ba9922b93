use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown brew method: {0}")]
pub struct UnknownBrewMethod(pub String);

/// The two independent recipe configurations stored on one record.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BrewMethod {
    #[default]
    Espresso,
    Filter,
}

impl BrewMethod {
    pub const ALL: [BrewMethod; 2] = [BrewMethod::Espresso, BrewMethod::Filter];

    pub fn as_str(self) -> &'static str {
        match self {
            BrewMethod::Espresso => "espresso",
            BrewMethod::Filter => "filter",
        }
    }

    /// The method actually in use: an explicit override wins over the stored default.
    pub fn effective(override_method: Option<BrewMethod>, stored_default: BrewMethod) -> Self {
        override_method.unwrap_or(stored_default)
    }
}

impl fmt::Display for BrewMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BrewMethod {
    type Err = UnknownBrewMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "espresso" => Ok(BrewMethod::Espresso),
            "filter" => Ok(BrewMethod::Filter),
            other => Err(UnknownBrewMethod(other.to_string())),
        }
    }
}
