//! Activity enumeration

use crate::error::HolterError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What the wearer was doing when the symptoms occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Activity {
    Exercising,
    Sitting,
    #[serde(rename = "Climbing stairs")]
    ClimbingStairs,
    Walking,
    #[serde(rename = "Taking medications")]
    TakingMedications,
    Eating,
    Other,
}

impl Activity {
    /// All activities in display order
    pub const ALL: [Activity; 7] = [
        Activity::Exercising,
        Activity::Sitting,
        Activity::ClimbingStairs,
        Activity::Walking,
        Activity::TakingMedications,
        Activity::Eating,
        Activity::Other,
    ];

    /// Human-readable label, also used in storage and CSV
    pub fn label(&self) -> &'static str {
        match self {
            Activity::Exercising => "Exercising",
            Activity::Sitting => "Sitting",
            Activity::ClimbingStairs => "Climbing stairs",
            Activity::Walking => "Walking",
            Activity::TakingMedications => "Taking medications",
            Activity::Eating => "Eating",
            Activity::Other => "Other",
        }
    }

    pub fn labels() -> impl Iterator<Item = &'static str> {
        Self::ALL.iter().map(Activity::label)
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Activity {
    type Err = HolterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|activity| activity.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| HolterError::InvalidActivity(s.to_string()))
    }
}
