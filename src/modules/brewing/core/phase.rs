use serde::{Deserialize, Serialize};
use std::fmt;

/// Steps of the guided brew. A session starts in `Prep` and never returns to it.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BrewPhase {
    #[default]
    Prep,
    Brew,
    Finish,
    Rate,
}

impl BrewPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            BrewPhase::Prep => "prep",
            BrewPhase::Brew => "brew",
            BrewPhase::Finish => "finish",
            BrewPhase::Rate => "rate",
        }
    }

    /// Fill of the wizard progress bar.
    pub fn progress_percent(self) -> u8 {
        match self {
            BrewPhase::Prep => 33,
            BrewPhase::Brew => 66,
            BrewPhase::Finish | BrewPhase::Rate => 100,
        }
    }
}

impl fmt::Display for BrewPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
